use std::collections::{HashMap, VecDeque};

use super::{Trace, history::Visits, walk_parents};
use crate::maze::Grid;

/// Breadth-first search. Cells are marked visited when first queued, so each is
/// expanded at most once and the first path to reach the end is a shortest one.
pub fn solve_bfs(grid: &Grid) -> Trace {
    let (start, goal) = (grid.start(), grid.end());

    let mut visits = Visits::default();
    let mut parents = HashMap::new();
    let mut queue = VecDeque::from([start]);
    visits.visit(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Trace::from_visits(visits, walk_parents(&parents, goal));
        }

        for neighbor in grid.neighbors(current) {
            if visits.visit(neighbor) {
                parents.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    Trace::from_visits(visits, Vec::new())
}
