pub mod app;
pub mod benchmark;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;
pub mod stats;

pub use error::MazeError;
pub use generators::{Generator, MazeOptions, generate_maze, generate_maze_with, get_rng};
pub use maze::{CellKind, Coord, Grid};
pub use solvers::{AlgorithmKind, Outcome, SearchResult, Solver, solve, solve_bounded};
pub use stats::{Statistics, compute_statistics};
