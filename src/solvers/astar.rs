use super::{Trace, best_first::settle_search, history::Visits};
use crate::maze::{Grid, manhattan};

/// A* keyed by `g + h`, with `h` the Manhattan distance to the end.
///
/// Manhattan distance never overestimates a 4-connected unit-cost walk, so the
/// path is a shortest one.
pub fn solve_astar(grid: &Grid) -> Trace {
    let goal = grid.end();
    let mut visits = Visits::default();
    let path = settle_search(
        grid,
        |_, _| 1,
        |cell| manhattan(cell, goal) as i64,
        &mut visits,
    );
    Trace::from_visits(visits, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{solve_bfs, solve_dijkstra};

    #[test]
    fn test_astar_visits_fewer_cells_than_dijkstra_in_open_room() {
        // Cells left of the start lie off every shortest path, so their `g + h`
        // exceeds the optimum and A* never settles them
        let rows = ["...S......", "..........", "..........", ".........E"];
        let grid = Grid::from_rows(&rows).unwrap();
        let astar = solve_astar(&grid);
        let dijkstra = solve_dijkstra(&grid);
        assert_eq!(astar.path.len(), 10);
        assert_eq!(astar.path.len(), dijkstra.path.len());
        assert!(astar.visited.len() < dijkstra.visited.len());
        assert!(!astar.visited.contains(&(0, 0)));
        assert!(dijkstra.visited.contains(&(0, 0)));
    }

    #[test]
    fn test_astar_optimal_around_a_wall() {
        let grid = Grid::from_rows(&[
            "S.....",
            "#####.",
            "......",
            ".#####",
            ".....E",
        ])
        .unwrap();
        let astar = solve_astar(&grid);
        assert_eq!(astar.path.len(), solve_bfs(&grid).path.len());
    }
}
