use std::fmt;
use std::str::FromStr;

/// Search strategy selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Uninformed, FIFO order. Fewest steps on uniform terrain; ignores cost
    /// when ordering the frontier.
    BreadthFirst,
    /// Uninformed, ordered by accumulated cost (Dijkstra).
    UniformCost,
    /// Ordered by accumulated cost plus Manhattan distance to the end.
    AStar,
    /// A* that replans once around an obstacle discovered mid-route. A single
    /// search in this mode behaves exactly like [`AStar`](Algorithm::AStar).
    AStarReplan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::UniformCost,
        Algorithm::AStar,
        Algorithm::AStarReplan,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "Breadth-First Search (Uninformed)",
            Algorithm::UniformCost => "Uniform-Cost Search (Uninformed)",
            Algorithm::AStar => "A* Search (Informed)",
            Algorithm::AStarReplan => "A* with Replanning",
        }
    }

    /// Short identifier, accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::UniformCost => "ucs",
            Algorithm::AStar => "astar",
            Algorithm::AStarReplan => "astar-replan",
        }
    }

    #[inline]
    pub const fn is_informed(self) -> bool {
        matches!(self, Algorithm::AStar | Algorithm::AStarReplan)
    }

    /// Frontier priority of a cell reached with accumulated cost `g` and
    /// heuristic estimate `h`.
    #[inline]
    pub const fn priority(self, g: i32, h: i32) -> i32 {
        match self {
            Algorithm::BreadthFirst => 0,
            Algorithm::UniformCost => g,
            Algorithm::AStar | Algorithm::AStarReplan => g + h,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "ucs" | "uniform-cost" | "dijkstra" => Ok(Algorithm::UniformCost),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "astar-replan" | "replan" => Ok(Algorithm::AStarReplan),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// An unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, ucs, astar or astar-replan)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_formula() {
        assert_eq!(Algorithm::BreadthFirst.priority(7, 3), 0);
        assert_eq!(Algorithm::UniformCost.priority(7, 3), 7);
        assert_eq!(Algorithm::AStar.priority(7, 3), 10);
        assert_eq!(Algorithm::AStarReplan.priority(7, 3), 10);
    }

    #[test]
    fn keys_parse_back() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.key().parse::<Algorithm>(), Ok(algo));
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert!("greedy".parse::<Algorithm>().is_err());
    }
}
