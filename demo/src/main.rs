//! gridroute demo: plan a route on a built-in or text map and print it.
//!
//! Usage:
//!   gridroute-demo --map small --algo astar
//!   gridroute-demo --map medium --algo astar-replan --seed 7
//!   gridroute-demo --layout floor.txt --algo ucs --trace
//!
//! Set `RUST_LOG=debug` for per-search summaries.

mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use gridroute_maps::{Layout, Preset};
use gridroute_paths::{Algorithm, Plan, ReplanConfig, ReplanStatus, plan};

use render::{Overlay, draw_map, draw_trace, stats_line};

/// Plan a route across a grid map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built-in map: small, medium, large or dynamic
    #[arg(short, long, default_value = "medium")]
    map: Preset,

    /// Text map file; overrides --map
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Search algorithm: bfs, ucs, astar or astar-replan
    #[arg(short, long, default_value = "astar")]
    algo: Algorithm,

    /// Seed for randomised maps
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Where the replanning obstacle appears along the first path, as num/den
    #[arg(long, default_value = "2/3", value_parser = parse_offset)]
    offset: ReplanConfig,

    /// Print plain characters without colors
    #[arg(long)]
    no_color: bool,

    /// Print the visitation order
    #[arg(long)]
    trace: bool,
}

fn parse_offset(s: &str) -> Result<ReplanConfig, String> {
    let (num, den) = s
        .split_once('/')
        .ok_or_else(|| format!("expected num/den, got \u{201c}{s}\u{201d}"))?;
    let num = num.trim().parse().map_err(|e| format!("numerator: {e}"))?;
    let den = den.trim().parse().map_err(|e| format!("denominator: {e}"))?;
    Ok(ReplanConfig::with_offset(num, den))
}

fn load_layout(args: &Args) -> Result<(String, Layout), Box<dyn std::error::Error>> {
    match &args.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok((path.display().to_string(), Layout::parse(&text)?))
        }
        None => Ok((args.map.name().to_string(), args.map.build(args.seed))),
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let (name, mut layout) = load_layout(args)?;
    log::info!(
        "loaded {name}: {}x{}",
        layout.grid.width(),
        layout.grid.height()
    );

    let result = plan(args.algo, &mut layout.grid, layout.terrain.as_ref(), &args.offset);

    let mut out = io::stdout().lock();
    draw_map(&mut out, &layout, &Overlay::new(&result), !args.no_color)?;
    if args.trace {
        draw_trace(&mut out, &result.visited())?;
    }

    writeln!(out, "{} on {name}", args.algo)?;
    match (&result, result.stats()) {
        (_, Some(stats)) => writeln!(out, "{}", stats_line(&stats))?,
        (Plan::MissingEndpoint, _) => writeln!(out, "Start or end point not found on the map.")?,
        (Plan::Replanned(o), _) if o.status == ReplanStatus::ReplanFailed => {
            writeln!(out, "Failed to find a new path. Agent is stuck.")?
        }
        _ => writeln!(out, "No path found.")?,
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
