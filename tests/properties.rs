//! Property tests for generated mazes and every solver run on them.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use mazerun::{
    AlgorithmKind, CellKind, Coord, Generator, Grid, MazeOptions, Solver, generate_maze_with, get_rng,
    maze::manhattan, solve,
};

fn arb_generator() -> impl Strategy<Value = Generator> {
    prop_oneof![Just(Generator::Bfs), Just(Generator::Prim)]
}

fn arb_maze(max_side: usize) -> impl Strategy<Value = Grid> {
    (1..=max_side, 1..=max_side, any::<u64>(), arb_generator(), 0.0..0.3f64).prop_map(
        |(width, height, seed, generator, loop_density)| {
            let options = MazeOptions {
                generator,
                loop_density,
            };
            generate_maze_with(width, height, &options, &mut get_rng(Some(seed)))
                .expect("dimensions are positive")
        },
    )
}

/// Flood fill over raw cell kinds, independent of `Grid::neighbors`.
fn reachable(grid: &Grid, from: Coord) -> HashSet<Coord> {
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some((x, y)) = queue.pop_front() {
        let (x, y) = (x as i32, y as i32);
        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if nx < 0 || ny < 0 || nx >= grid.width() as i32 || ny >= grid.height() as i32 {
                continue;
            }
            let c = (nx as u16, ny as u16);
            if grid[c] != CellKind::Wall && seen.insert(c) {
                queue.push_back(c);
            }
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_open_cell_is_reachable(grid in arb_maze(40)) {
        let region = reachable(&grid, grid.start());
        prop_assert_eq!(region.len(), grid.walkable_count());
    }

    #[test]
    fn exactly_one_start_and_end(grid in arb_maze(40)) {
        let count = |kind| (0..grid.len()).filter(|&i| grid[grid.coord(i)] == kind).count();
        prop_assert_eq!(count(CellKind::Start), 1);
        if grid.len() > 1 {
            prop_assert_eq!(count(CellKind::End), 1);
            prop_assert_ne!(grid.start(), grid.end());
        } else {
            prop_assert_eq!(grid.start(), grid.end());
        }
    }

    #[test]
    fn paths_are_valid(grid in arb_maze(16)) {
        for algorithm in AlgorithmKind::ALL {
            let path = solve(algorithm, &grid).path;
            prop_assert_eq!(path.first(), Some(&grid.start()), "{}", algorithm);
            prop_assert_eq!(path.last(), Some(&grid.end()), "{}", algorithm);
            prop_assert!(path.iter().all(|&c| grid.is_walkable(c)), "{}", algorithm);
            prop_assert!(path.windows(2).all(|w| manhattan(w[0], w[1]) == 1), "{}", algorithm);
        }
    }

    #[test]
    fn optimal_solvers_agree_with_bfs(grid in arb_maze(16)) {
        let shortest = solve(AlgorithmKind::Bfs, &grid).path.len();
        for algorithm in AlgorithmKind::ALL {
            let length = solve(algorithm, &grid).path.len();
            if algorithm.is_optimal() {
                prop_assert_eq!(length, shortest, "{}", algorithm);
            } else {
                prop_assert!(length >= shortest, "{}", algorithm);
            }
        }
    }

    #[test]
    fn history_never_shrinks(grid in arb_maze(16)) {
        for algorithm in AlgorithmKind::ALL {
            let trace = algorithm.search(&grid);
            let sizes = trace.history.iter().map(<[Coord]>::len).collect::<Vec<_>>();
            prop_assert!(sizes.windows(2).all(|w| w[0] <= w[1]), "{}", algorithm);
            let last = trace.history.last().map_or(0, <[Coord]>::len);
            prop_assert_eq!(last, trace.visited.len(), "{}", algorithm);
        }
    }

    #[test]
    fn repeated_searches_are_identical(grid in arb_maze(16)) {
        for algorithm in AlgorithmKind::ALL {
            prop_assert_eq!(algorithm.search(&grid), algorithm.search(&grid), "{}", algorithm);
        }
    }
}
