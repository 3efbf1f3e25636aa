use std::collections::HashMap;

use super::{Outcome, Trace, best_first::settle_search, history::Visits};
use crate::maze::{Coord, Grid};

/// Johnson's algorithm from the start cell: Bellman–Ford potentials, then
/// Dijkstra on the re-weighted edges `w(u, v) + h(u) - h(v)`.
///
/// With unit weights the potentials are plain distances and no negative cycle
/// can exist, but the check still runs. The first history step is an empty view
/// marking the end of the re-weighting phase.
pub fn solve_johnson(grid: &Grid) -> Trace {
    johnson(grid, |_, _| 1)
}

pub(super) fn johnson(grid: &Grid, weight: impl Fn(Coord, Coord) -> i64) -> Trace {
    let Some(potential) = bellman_ford(grid, grid.start(), &weight) else {
        tracing::warn!("[solver] Johnson: negative cycle reachable from start, giving up");
        return Trace {
            outcome: Outcome::NegativeCycle,
            ..Default::default()
        };
    };
    let h = |cell: Coord| potential.get(&cell).copied().unwrap_or_default();

    let mut visits = Visits::default();
    visits.history.record_unchanged();
    let path = settle_search(
        grid,
        |u, v| weight(u, v) + h(u) - h(v),
        |_| 0,
        &mut visits,
    );
    Trace::from_visits(visits, path)
}

/// Distances from `source` to every cell it reaches, or `None` if a negative
/// cycle is reachable.
fn bellman_ford(
    grid: &Grid,
    source: Coord,
    weight: impl Fn(Coord, Coord) -> i64,
) -> Option<HashMap<Coord, i64>> {
    let nodes = grid.walkable_cells().collect::<Vec<_>>();
    let mut dist = HashMap::from([(source, 0)]);

    // Relaxes every edge once; reports whether anything improved
    let relax = |dist: &mut HashMap<Coord, i64>| {
        let mut changed = false;
        for &u in &nodes {
            let Some(&du) = dist.get(&u) else {
                continue;
            };
            for v in grid.neighbors(u) {
                let candidate = du + weight(u, v);
                if dist.get(&v).is_none_or(|&dv| candidate < dv) {
                    dist.insert(v, candidate);
                    changed = true;
                }
            }
        }
        changed
    };

    for _ in 1..nodes.len() {
        if !relax(&mut dist) {
            break;
        }
    }
    if relax(&mut dist) { None } else { Some(dist) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::solve_bfs;

    const ROOM: [&str; 4] = ["S..#", ".#..", ".#.#", "...E"];

    #[test]
    fn test_johnson_matches_bfs_length() {
        let grid = Grid::from_rows(&ROOM).unwrap();
        let trace = solve_johnson(&grid);
        assert_eq!(trace.outcome, Outcome::Found);
        assert_eq!(trace.path.len(), solve_bfs(&grid).path.len());
    }

    #[test]
    fn test_potentials_are_distances() {
        let grid = Grid::from_rows(&ROOM).unwrap();
        let h = bellman_ford(&grid, grid.start(), |_, _| 1).unwrap();
        assert_eq!(h[&(0, 0)], 0);
        assert_eq!(h[&(3, 3)], 6);
        assert_eq!(h[&(3, 1)], 4);
    }

    #[test]
    fn test_negative_cycle_gives_empty_result() {
        let grid = Grid::from_rows(&ROOM).unwrap();
        let trace = johnson(&grid, |_, _| -1);
        assert_eq!(trace.outcome, Outcome::NegativeCycle);
        assert!(trace.path.is_empty());
        assert!(trace.visited.is_empty());
        assert!(trace.history.is_empty());
    }

    #[test]
    fn test_history_opens_with_empty_view() {
        let grid = Grid::from_rows(&ROOM).unwrap();
        let trace = solve_johnson(&grid);
        assert_eq!(trace.history.snapshot(0), Some(&[][..]));
        assert_eq!(trace.history.len(), trace.visited.len() + 1);
    }
}
