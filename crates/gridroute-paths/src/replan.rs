//! A* with a single reactive replan.
//!
//! The controller plans a route, simulates an obstacle appearing on it part
//! of the way along, walks the route up to the obstacle, and plans again from
//! there. Stages run strictly in order and stop at the first failed search.

use std::fmt;
use std::time::Duration;

use gridroute_core::{CellGrid, CellKind, Point, TerrainMap};

use crate::search::{SearchResult, search};
use crate::{Algorithm, RouteMap};

/// Replanning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplanConfig {
    /// Numerator of the fraction of the initial path at which the obstacle
    /// appears.
    pub offset_num: usize,
    /// Denominator of that fraction. Zero places the obstacle on the last
    /// cell.
    pub offset_den: usize,
}

impl Default for ReplanConfig {
    fn default() -> Self {
        Self {
            offset_num: 2,
            offset_den: 3,
        }
    }
}

impl ReplanConfig {
    /// Obstacle at `num / den` of the way along the initial path.
    pub fn with_offset(num: usize, den: usize) -> Self {
        Self {
            offset_num: num,
            offset_den: den,
        }
    }

    /// Index of the obstacle on a path of `len` cells.
    ///
    /// `floor(len * num / den)`, clamped to `1..=len - 1` so that at least
    /// the start has been traversed. `None` for paths shorter than two
    /// cells, which leave nowhere to put an obstacle.
    pub fn obstacle_index(&self, len: usize) -> Option<usize> {
        if len < 2 {
            return None;
        }
        let last = len - 1;
        let raw = (len as u128 * self.offset_num as u128)
            .checked_div(self.offset_den as u128)
            .map_or(last, |i| i.min(last as u128) as usize);
        Some(raw.clamp(1, last))
    }
}

/// The controller's stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplanStage {
    InitialPlan,
    ObstacleInjection,
    PartialTraversal,
    Replan,
}

impl fmt::Display for ReplanStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReplanStage::InitialPlan => "initial plan",
            ReplanStage::ObstacleInjection => "obstacle injection",
            ReplanStage::PartialTraversal => "partial traversal",
            ReplanStage::Replan => "replan",
        };
        f.write_str(s)
    }
}

/// How a replanning run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplanStatus {
    /// A route to the end exists after the obstacle appeared.
    Completed,
    /// No route existed even before the obstacle.
    InitialPlanFailed,
    /// The obstacle cut the end off from the agent.
    ReplanFailed,
}

impl ReplanStatus {
    /// The stage that halted the run, if any.
    pub fn failed_stage(self) -> Option<ReplanStage> {
        match self {
            ReplanStatus::Completed => None,
            ReplanStatus::InitialPlanFailed => Some(ReplanStage::InitialPlan),
            ReplanStatus::ReplanFailed => Some(ReplanStage::Replan),
        }
    }
}

/// Everything a replanning run produced.
#[derive(Debug, Clone)]
pub struct ReplanOutcome {
    pub status: ReplanStatus,
    /// The first search, over the unmodified grid.
    pub initial: SearchResult,
    /// Where the obstacle was placed.
    pub obstacle: Option<Point>,
    /// The part of the initial path walked before the obstacle. Its last
    /// cell is where the second search starts.
    pub prefix: Vec<Point>,
    /// The second search, over the grid with the obstacle.
    pub replanned: Option<SearchResult>,
    /// The final route: `prefix` followed by the replanned path without its
    /// first cell. Empty unless `status` is `Completed`.
    pub route: Vec<Point>,
    /// Sum of entry costs along `route`, excluding its first cell.
    pub route_cost: i32,
}

impl ReplanOutcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == ReplanStatus::Completed
    }

    /// Expansions across both searches.
    pub fn nodes_expanded(&self) -> usize {
        self.initial.nodes_expanded() + self.replanned.as_ref().map_or(0, |r| r.nodes_expanded())
    }

    /// Search time across both searches.
    pub fn elapsed(&self) -> Duration {
        self.initial.elapsed + self.replanned.as_ref().map_or(Duration::ZERO, |r| r.elapsed)
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }

    /// Number of reactive replans performed: 1 once the second search ran.
    #[inline]
    pub fn replans(&self) -> usize {
        usize::from(self.replanned.is_some())
    }

    /// Visitation traces of both searches, in order.
    pub fn visited(&self) -> impl Iterator<Item = Point> + '_ {
        self.initial
            .visited
            .iter()
            .chain(self.replanned.iter().flat_map(|r| r.visited.iter()))
            .copied()
    }
}

/// Plan from `start` to `end`, inject an obstacle on the planned route, and
/// replan from the cell just before it.
///
/// The obstacle is written into `grid` as a wall and stays there. The grid
/// is only modified between the two searches.
pub fn replan(
    grid: &mut CellGrid,
    terrain: Option<&TerrainMap>,
    start: Option<Point>,
    end: Option<Point>,
    config: &ReplanConfig,
) -> ReplanOutcome {
    log::info!("[{}] calculating route", ReplanStage::InitialPlan);
    let initial = search(Algorithm::AStar, &RouteMap::from_parts(grid, terrain), start, end);

    let mut outcome = ReplanOutcome {
        status: ReplanStatus::InitialPlanFailed,
        initial,
        obstacle: None,
        prefix: Vec::new(),
        replanned: None,
        route: Vec::new(),
        route_cost: 0,
    };

    if !outcome.initial.found() {
        log::info!("no initial path found, halting");
        return outcome;
    }

    let path = &outcome.initial.path;
    let Some(block_idx) = config.obstacle_index(path.len()) else {
        // Start is the end: already there, nothing to replan.
        outcome.status = ReplanStatus::Completed;
        outcome.route = path.clone();
        return outcome;
    };

    let blocked = path[block_idx];
    grid.set(blocked, CellKind::Wall);
    outcome.obstacle = Some(blocked);
    log::info!("[{}] obstacle appeared at {blocked}", ReplanStage::ObstacleInjection);

    outcome.prefix = path[..block_idx].to_vec();
    let agent = outcome.prefix[outcome.prefix.len() - 1];
    log::info!("[{}] agent stopped at {agent}", ReplanStage::PartialTraversal);
    log::info!("[{}] replanning from {agent}", ReplanStage::Replan);

    let map = RouteMap::from_parts(grid, terrain);
    let replanned = search(Algorithm::AStar, &map, Some(agent), end);
    if !replanned.found() {
        log::info!("failed to find a new path, agent is stuck");
        outcome.replanned = Some(replanned);
        outcome.status = ReplanStatus::ReplanFailed;
        return outcome;
    }

    let mut route = outcome.prefix.clone();
    route.extend_from_slice(&replanned.path[1..]);
    outcome.route_cost = map.path_cost(&route);
    outcome.route = route;
    outcome.replanned = Some(replanned);
    outcome.status = ReplanStatus::Completed;
    log::info!(
        "[{}] new route: {} cells, cost {}",
        ReplanStage::Replan,
        outcome.route.len(),
        outcome.route_cost
    );
    outcome
}
