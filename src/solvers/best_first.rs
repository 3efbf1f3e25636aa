use std::collections::HashMap;

use super::{history::Visits, queue::MinQueue, walk_parents};
use crate::maze::{Coord, Grid};

/// Shared settle-on-pop search behind Dijkstra, A* and Johnson's second phase.
///
/// Entries are keyed by `g + estimate(cell)` with `g` the accumulated `cost`.
/// A popped cell that was already settled is a stale entry and is skipped, and
/// a cell is marked visited only when it is settled. `cost` must be non-negative
/// and `estimate` consistent for the returned path to be a shortest one.
/// Returns the start-to-end path, or an empty one.
pub(super) fn settle_search(
    grid: &Grid,
    cost: impl Fn(Coord, Coord) -> i64,
    estimate: impl Fn(Coord) -> i64,
    visits: &mut Visits,
) -> Vec<Coord> {
    let (start, goal) = (grid.start(), grid.end());

    let mut best: HashMap<Coord, i64> = HashMap::from([(start, 0)]);
    let mut parents = HashMap::new();
    let mut open = MinQueue::new();
    open.push(estimate(start), start);

    while let Some((_, current)) = open.pop() {
        if !visits.visit(current) {
            continue;
        }
        if current == goal {
            return walk_parents(&parents, goal);
        }

        let Some(&g) = best.get(&current) else {
            continue;
        };
        for neighbor in grid.neighbors(current) {
            if visits.contains(neighbor) {
                continue;
            }
            let tentative = g + cost(current, neighbor);
            // Only consider neighbours that we can reach with a lower cost
            if best.get(&neighbor).is_none_or(|&known| tentative < known) {
                best.insert(neighbor, tentative);
                parents.insert(neighbor, current);
                open.push(tentative + estimate(neighbor), neighbor);
            }
        }
    }

    Vec::new()
}
