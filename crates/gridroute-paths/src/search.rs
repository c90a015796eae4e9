use std::collections::HashMap;
use std::time::{Duration, Instant};

use gridroute_core::Point;

use crate::Algorithm;
use crate::frontier::Frontier;
use crate::reconstruct::reconstruct_path;
use crate::traits::AstarPather;

/// Outcome of one search call.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in the order they were taken off the frontier. A cell relaxed
    /// after it was queued may appear more than once.
    pub visited: Vec<Point>,
    /// Route from start to end inclusive, or empty if none was found.
    pub path: Vec<Point>,
    /// Sum of entry costs along `path` (the start cell is free). Zero when
    /// `path` is empty.
    pub total_cost: i32,
    /// Wall-clock duration of the call.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Whether a route was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of frontier pops.
    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Search for a route from `start` to `end`.
///
/// A missing endpoint, or one outside the map, yields an empty result rather
/// than an error. Cells are appended to the visitation trace when popped,
/// without a closed-set check, and the search stops as soon as `end` is
/// popped.
pub fn search<P: AstarPather>(
    algorithm: Algorithm,
    pather: &P,
    start: Option<Point>,
    end: Option<Point>,
) -> SearchResult {
    let (Some(start), Some(end)) = (start, end) else {
        log::warn!("search called without a start or end point");
        return SearchResult::default();
    };
    if !pather.contains(start) || !pather.contains(end) {
        log::warn!("search endpoint outside the map: start {start}, end {end}");
        return SearchResult::default();
    }

    let began = Instant::now();

    let mut frontier = Frontier::for_algorithm(algorithm);
    let mut came_from: HashMap<Point, Option<Point>> = HashMap::new();
    let mut cost_so_far: HashMap<Point, i32> = HashMap::new();
    let mut visited = Vec::new();

    frontier.push(start, 0);
    came_from.insert(start, None);
    cost_so_far.insert(start, 0);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = frontier.pop() {
        visited.push(current);
        if current == end {
            break;
        }

        let current_g = cost_so_far[&current];
        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &next in nbuf.iter() {
            let tentative = current_g + pather.cost(current, next);
            if cost_so_far.get(&next).is_some_and(|&g| tentative >= g) {
                continue;
            }
            cost_so_far.insert(next, tentative);
            came_from.insert(next, Some(current));

            let h = if algorithm.is_informed() {
                pather.estimate(next, end)
            } else {
                0
            };
            frontier.push(next, algorithm.priority(tentative, h));
        }
    }

    let (path, total_cost) = reconstruct_path(pather, &came_from, start, end);
    let elapsed = began.elapsed();

    log::debug!(
        "{}: {} -> {}: expanded {}, path {} cells, cost {}",
        algorithm.key(),
        start,
        end,
        visited.len(),
        path.len(),
        total_cost
    );

    SearchResult {
        visited,
        path,
        total_cost,
        elapsed,
    }
}
