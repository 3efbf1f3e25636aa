use thiserror::Error;

use crate::solvers::AlgorithmKind;

/// Errors surfaced by maze construction and the bounded solve entry point.
///
/// An unreachable goal is not an error: every solver reports it as an empty path.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: each side must be between 1 and 65534")]
    InvalidDimensions { width: usize, height: usize },
    #[error("malformed grid: {0}")]
    MalformedGrid(String),
    #[error("{algorithm} refused a grid with {cells} walkable cells (limit is {limit})")]
    TooManyCells {
        algorithm: AlgorithmKind,
        cells: usize,
        limit: usize,
    },
}
