use std::collections::HashMap;

use super::{Trace, history::Visits, queue::MinQueue, walk_parents};
use crate::maze::{Grid, manhattan};

/// Greedy best-first search keyed purely by Manhattan distance to the end.
///
/// Cells are marked visited when queued and never queued twice, so it always
/// terminates, but the path is not guaranteed to be shortest.
pub fn solve_greedy(grid: &Grid) -> Trace {
    let (start, goal) = (grid.start(), grid.end());

    let mut visits = Visits::default();
    let mut parents = HashMap::new();
    let mut open = MinQueue::new();
    visits.visit(start);
    open.push(manhattan(start, goal), start);

    while let Some((_, current)) = open.pop() {
        if current == goal {
            return Trace::from_visits(visits, walk_parents(&parents, goal));
        }

        for neighbor in grid.neighbors(current) {
            if visits.visit(neighbor) {
                parents.insert(neighbor, current);
                open.push(manhattan(neighbor, goal), neighbor);
            }
        }
    }

    Trace::from_visits(visits, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::solve_bfs;

    #[test]
    fn test_greedy_never_beats_bfs() {
        // The right-hand corridor heads towards E but dead-ends
        let grid = Grid::from_rows(&[
            "S.......",
            ".######.",
            ".#....#.",
            ".#.##.#.",
            ".#.#E.#.",
            ".#.####.",
            "...#....",
        ])
        .unwrap();
        let greedy = solve_greedy(&grid);
        let bfs = solve_bfs(&grid);
        assert!(!greedy.path.is_empty());
        assert!(greedy.path.len() >= bfs.path.len());
    }

    #[test]
    fn test_greedy_straight_line() {
        let grid = Grid::from_rows(&["S...E"]).unwrap();
        let trace = solve_greedy(&grid);
        assert_eq!(trace.path.len(), 5);
        assert_eq!(trace.visited.len(), 5);
    }
}
