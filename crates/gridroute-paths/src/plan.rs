use gridroute_core::{CellGrid, Point, TerrainMap};

use crate::replan::{ReplanConfig, ReplanOutcome, replan};
use crate::search::SearchResult;
use crate::{Algorithm, RouteMap};

/// Summary figures of a planning run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Path cost. `None` for a replanned route, whose cost mixes a walked
    /// prefix with a fresh plan; see [`ReplanOutcome::route_cost`].
    pub cost: Option<i32>,
    pub nodes_expanded: usize,
    pub elapsed_ms: f64,
    pub replans: usize,
}

/// Result of [`plan`].
#[derive(Debug, Clone)]
pub enum Plan {
    /// The grid has no Start or no End cell.
    MissingEndpoint,
    Single(SearchResult),
    Replanned(ReplanOutcome),
}

impl Plan {
    /// Whether a route to the end was found.
    pub fn is_success(&self) -> bool {
        match self {
            Plan::MissingEndpoint => false,
            Plan::Single(r) => r.found(),
            Plan::Replanned(o) => o.is_success(),
        }
    }

    /// The final route, empty on failure.
    pub fn route(&self) -> &[Point] {
        match self {
            Plan::MissingEndpoint => &[],
            Plan::Single(r) => &r.path,
            Plan::Replanned(o) => &o.route,
        }
    }

    /// Every visitation trace, in search order.
    pub fn visited(&self) -> Vec<Point> {
        match self {
            Plan::MissingEndpoint => Vec::new(),
            Plan::Single(r) => r.visited.clone(),
            Plan::Replanned(o) => o.visited().collect(),
        }
    }

    /// Figures for a successful run; `None` when no route was found.
    pub fn stats(&self) -> Option<RunStats> {
        match self {
            Plan::Single(r) if r.found() => Some(RunStats {
                cost: Some(r.total_cost),
                nodes_expanded: r.nodes_expanded(),
                elapsed_ms: r.elapsed_ms(),
                replans: 0,
            }),
            Plan::Replanned(o) if o.is_success() => Some(RunStats {
                cost: None,
                nodes_expanded: o.nodes_expanded(),
                elapsed_ms: o.elapsed_ms(),
                replans: o.replans(),
            }),
            _ => None,
        }
    }
}

/// Locate the Start and End cells of `grid` and route between them.
///
/// [`Algorithm::AStarReplan`] runs the replanning controller, which leaves
/// its obstacle in `grid`; every other algorithm runs a single search and
/// leaves `grid` untouched.
pub fn plan(
    algorithm: Algorithm,
    grid: &mut CellGrid,
    terrain: Option<&TerrainMap>,
    config: &ReplanConfig,
) -> Plan {
    let (start, end) = grid.find_endpoints();
    if start.is_none() || end.is_none() {
        log::warn!("start or end point not found on the map");
        return Plan::MissingEndpoint;
    }

    log::info!("starting {algorithm}");
    match algorithm {
        Algorithm::AStarReplan => Plan::Replanned(replan(grid, terrain, start, end, config)),
        _ => Plan::Single(RouteMap::from_parts(grid, terrain).search(algorithm, start, end)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::{CellKind, Grid};

    fn two_row_corridor() -> CellGrid {
        let mut g: CellGrid = Grid::new(10, 2);
        g.set(Point::new(0, 0), CellKind::Start);
        g.set(Point::new(9, 0), CellKind::End);
        g
    }

    #[test]
    fn missing_endpoint() {
        let mut g: CellGrid = Grid::new(3, 3);
        g.set(Point::new(0, 0), CellKind::Start);
        let p = plan(Algorithm::AStar, &mut g, None, &ReplanConfig::default());
        assert!(matches!(p, Plan::MissingEndpoint));
        assert!(!p.is_success());
        assert!(p.route().is_empty());
        assert!(p.visited().is_empty());
        assert!(p.stats().is_none());
    }

    #[test]
    fn single_search_stats() {
        let mut g = two_row_corridor();
        let before = g.clone();
        let p = plan(Algorithm::UniformCost, &mut g, None, &ReplanConfig::default());
        let stats = p.stats().unwrap();
        assert_eq!(stats.cost, Some(9));
        assert_eq!(stats.replans, 0);
        assert_eq!(stats.nodes_expanded, p.visited().len());
        assert_eq!(p.route().len(), 10);
        assert_eq!(g, before);
    }

    #[test]
    fn replanned_stats() {
        let mut g = two_row_corridor();
        let p = plan(Algorithm::AStarReplan, &mut g, None, &ReplanConfig::default());
        let stats = p.stats().unwrap();
        assert_eq!(stats.cost, None);
        assert_eq!(stats.replans, 1);
        assert_eq!(stats.nodes_expanded, p.visited().len());
        assert_eq!(p.route().len(), 12);
        assert_eq!(g.count(CellKind::Wall), 1);
    }

    #[test]
    fn failed_search_has_no_stats() {
        let mut g = two_row_corridor();
        g.set(Point::new(5, 0), CellKind::Wall);
        g.set(Point::new(5, 1), CellKind::Wall);
        let p = plan(Algorithm::BreadthFirst, &mut g, None, &ReplanConfig::default());
        assert!(!p.is_success());
        assert!(p.stats().is_none());
        assert!(!p.visited().is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use gridroute_core::{CellKind, Grid};

    #[test]
    fn run_figures_json_round_trip() {
        let mut g: CellGrid = Grid::new(4, 1);
        g.set(Point::new(0, 0), CellKind::Start);
        g.set(Point::new(3, 0), CellKind::End);
        let Plan::Single(result) = plan(Algorithm::AStar, &mut g, None, &ReplanConfig::default()) else {
            panic!("expected a single search");
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);

        let stats = RunStats {
            cost: None,
            nodes_expanded: 7,
            elapsed_ms: 0.25,
            replans: 1,
        };
        let back: RunStats = serde_json::from_str(&serde_json::to_string(&stats).unwrap()).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn settings_json_round_trip() {
        let config = ReplanConfig::with_offset(3, 4);
        let back: ReplanConfig = serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(back, config);

        let json = serde_json::to_string(&Algorithm::AStarReplan).unwrap();
        assert_eq!(serde_json::from_str::<Algorithm>(&json).unwrap(), Algorithm::AStarReplan);
    }
}
