//! Terminal output for a planning run.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, PrintStyledContent, Stylize, style};
use gridroute_core::{CellKind, Point, Terrain};
use gridroute_maps::Layout;
use gridroute_paths::{Plan, RunStats};

/// What a cell shows after a run, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Start,
    End,
    Obstacle,
    Path,
    Visited,
    Wall,
    Floor(Terrain),
}

impl Mark {
    fn glyph(self) -> char {
        match self {
            Mark::Start => 'S',
            Mark::End => 'E',
            Mark::Obstacle => 'X',
            Mark::Path => '*',
            Mark::Visited => 'o',
            Mark::Wall => '#',
            Mark::Floor(Terrain::Road) => '.',
            Mark::Floor(Terrain::Grass) => ',',
            Mark::Floor(Terrain::Water) => '~',
        }
    }

    fn color(self) -> Color {
        match self {
            Mark::Start => Color::Green,
            Mark::End => Color::Red,
            Mark::Obstacle => Color::Magenta,
            Mark::Path => Color::Yellow,
            Mark::Visited => Color::DarkCyan,
            Mark::Wall => Color::DarkGrey,
            Mark::Floor(Terrain::Road) => Color::Grey,
            Mark::Floor(Terrain::Grass) => Color::DarkGreen,
            Mark::Floor(Terrain::Water) => Color::Blue,
        }
    }
}

/// Per-cell marks for a finished plan.
pub struct Overlay {
    visited: HashSet<Point>,
    route: HashSet<Point>,
    obstacle: Option<Point>,
}

impl Overlay {
    pub fn new(plan: &Plan) -> Self {
        let obstacle = match plan {
            Plan::Replanned(o) => o.obstacle,
            _ => None,
        };
        Self {
            visited: plan.visited().into_iter().collect(),
            route: plan.route().iter().copied().collect(),
            obstacle,
        }
    }

    fn mark(&self, layout: &Layout, p: Point) -> Mark {
        match layout.grid.at(p) {
            Some(CellKind::Start) => return Mark::Start,
            Some(CellKind::End) => return Mark::End,
            _ => {}
        }
        if self.obstacle == Some(p) {
            Mark::Obstacle
        } else if self.route.contains(&p) {
            Mark::Path
        } else if self.visited.contains(&p) {
            Mark::Visited
        } else if layout.grid.at(p) == Some(CellKind::Wall) {
            Mark::Wall
        } else {
            Mark::Floor(layout.terrain_at(p))
        }
    }
}

/// Draw the map with the overlay on top, one line per row.
pub fn draw_map(out: &mut impl Write, layout: &Layout, overlay: &Overlay, color: bool) -> io::Result<()> {
    for y in 0..layout.grid.height() {
        for x in 0..layout.grid.width() {
            let mark = overlay.mark(layout, Point::new(x, y));
            if color {
                let mut content = style(mark.glyph()).with(mark.color());
                if matches!(mark, Mark::Start | Mark::End | Mark::Obstacle) {
                    content = content.bold();
                }
                queue!(out, PrintStyledContent(content))?;
            } else {
                write!(out, "{}", mark.glyph())?;
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Visitation order, a fixed number of cells per line.
pub fn draw_trace(out: &mut impl Write, visited: &[Point]) -> io::Result<()> {
    const PER_LINE: usize = 8;
    for (i, chunk) in visited.chunks(PER_LINE).enumerate() {
        let cells: Vec<String> = chunk.iter().map(Point::to_string).collect();
        writeln!(out, "{:>5}: {}", i * PER_LINE, cells.join(" "))?;
    }
    Ok(())
}

pub fn stats_line(stats: &RunStats) -> String {
    let cost = match stats.cost {
        Some(c) => c.to_string(),
        None => "N/A (Replanned)".to_string(),
    };
    format!(
        "Path Cost: {cost} | Nodes Expanded: {} | Time Taken: {:.2} ms | Replans: {}",
        stats.nodes_expanded, stats.elapsed_ms, stats.replans
    )
}
