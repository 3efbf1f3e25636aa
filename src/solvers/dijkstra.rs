use super::{Trace, best_first::settle_search, history::Visits};
use crate::maze::Grid;

/// Dijkstra's algorithm with unit edge costs, lazy deletion and parent-pointer
/// reconstruction. Cells count as visited once settled.
pub fn solve_dijkstra(grid: &Grid) -> Trace {
    let mut visits = Visits::default();
    let path = settle_search(grid, |_, _| 1, |_| 0, &mut visits);
    Trace::from_visits(visits, path)
}
