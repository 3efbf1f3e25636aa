//! Criterion benchmarks for every solver on generated mazes.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mazerun::{
    AlgorithmKind, Grid, MazeOptions, Solver, generate_maze_with, get_rng, solvers::DENSE_CELL_LIMIT,
};

fn make_maze(side: usize, seed: u64) -> Grid {
    generate_maze_with(side, side, &MazeOptions::default(), &mut get_rng(Some(seed)))
        .expect("benchmark sizes are positive")
}

/// Every algorithm at increasing sizes. All-pairs solvers stop at their cell limit.
fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);

    for side in [10, 50, 100] {
        let grid = make_maze(side, 42);
        for algorithm in AlgorithmKind::ALL {
            if algorithm.cell_limit().is_some() && grid.walkable_count() > DENSE_CELL_LIMIT / 4 {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(algorithm.key(), side), &grid, |b, grid| {
                b.iter(|| black_box(algorithm.search(grid)))
            });
        }
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for side in [10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            let mut rng = get_rng(Some(7));
            b.iter(|| black_box(generate_maze_with(side, side, &MazeOptions::default(), &mut rng)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solvers, bench_generation);
criterion_main!(benches);
