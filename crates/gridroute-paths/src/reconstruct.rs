use std::collections::HashMap;

use gridroute_core::Point;

use crate::traits::WeightedPather;

/// Rebuild the route ending at `end` from a predecessor map.
///
/// `came_from` maps each reached cell to the cell it was reached from, and
/// the start to `None`. Returns the path from start to end inclusive with
/// its total cost: the sum of entry costs of every cell after the start.
///
/// The path is discarded (empty, cost 0) when `end` was never reached, when
/// the walk does not lead back to `start`, or when it is a single cell
/// while `start != end`. A search whose start is its end yields `[start]`.
pub fn reconstruct_path<P: WeightedPather>(
    pather: &P,
    came_from: &HashMap<Point, Option<Point>>,
    start: Point,
    end: Point,
) -> (Vec<Point>, i32) {
    if !came_from.contains_key(&end) {
        return (Vec::new(), 0);
    }

    let mut path = Vec::new();
    let mut total_cost = 0;
    let mut cur = end;
    loop {
        path.push(cur);
        match came_from.get(&cur).copied().flatten() {
            Some(prev) => {
                total_cost += pather.cost(prev, cur);
                cur = prev;
            }
            None => break,
        }
        // Cyclic links.
        if path.len() > came_from.len() {
            return (Vec::new(), 0);
        }
    }
    path.reverse();

    let valid = path.first() == Some(&start) && (path.len() > 1 || start == end);
    if !valid {
        return (Vec::new(), 0);
    }
    (path, total_cost)
}
