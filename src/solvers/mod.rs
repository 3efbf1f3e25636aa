use std::collections::{HashMap, HashSet};

mod astar;
mod best_first;
mod bfs;
mod bidirectional;
mod dijkstra;
mod floyd_warshall;
mod greedy;
pub mod history;
mod johnson;
mod queue;

pub use astar::solve_astar;
pub use bfs::solve_bfs;
pub use bidirectional::{solve_bidirectional_astar, solve_bidirectional_bfs};
pub use dijkstra::solve_dijkstra;
pub use floyd_warshall::solve_floyd_warshall;
pub use greedy::solve_greedy;
pub use history::StepHistory;
pub use johnson::solve_johnson;

use crate::{
    benchmark::measure,
    error::MazeError,
    maze::{Coord, Grid},
};
use history::Visits;

/// Walkable-cell count above which the all-pairs solvers refuse to run in
/// [`solve_bounded`]. Floyd–Warshall is cubic in this number and Johnson's
/// Bellman–Ford phase is quadratic.
pub const DENSE_CELL_LIMIT: usize = 2500;

/// How a search ended.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    /// The end is not connected to the start.
    #[default]
    Unreachable,
    /// Johnson's re-weighting found a negative cycle and gave up.
    NegativeCycle,
}

/// Everything a search produced, before timing is attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    pub path: Vec<Coord>,
    pub visited: HashSet<Coord>,
    pub history: StepHistory,
    pub outcome: Outcome,
}

impl Trace {
    fn from_visits(visits: Visits, path: Vec<Coord>) -> Self {
        let outcome = match path.is_empty() {
            true => Outcome::Unreachable,
            false => Outcome::Found,
        };
        Trace {
            path,
            visited: visits.visited,
            history: visits.history,
            outcome,
        }
    }
}

/// Result of one timed solve.
///
/// `path` runs from the grid's start to its end inclusive and is empty when no
/// path exists; check `path.is_empty()` rather than expecting an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub path: Vec<Coord>,
    /// Every cell the search marked visited, not only the path.
    pub visited: HashSet<Coord>,
    pub history: StepHistory,
    pub outcome: Outcome,
    pub elapsed_ms: f64,
}

impl SearchResult {
    pub fn from_trace(trace: Trace, elapsed_ms: f64) -> Self {
        SearchResult {
            path: trace.path,
            visited: trace.visited,
            history: trace.history,
            outcome: trace.outcome,
            elapsed_ms,
        }
    }
}

/// Common contract of every path search.
pub trait Solver {
    /// Runs the search on `grid` without timing it.
    fn search(&self, grid: &Grid) -> Trace;

    /// Runs the search under [`measure`] and attaches the elapsed time.
    fn solve(&self, grid: &Grid) -> SearchResult {
        let (trace, elapsed_ms) = measure(|| self.search(grid));
        SearchResult::from_trace(trace, elapsed_ms)
    }
}

impl<F> Solver for F
where
    F: Fn(&Grid) -> Trace,
{
    fn search(&self, grid: &Grid) -> Trace {
        self(grid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bfs,
    Dijkstra,
    GreedyBestFirst,
    AStarManhattan,
    BidirectionalBfs,
    BidirectionalAStar,
    FloydWarshall,
    Johnson,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 8] = [
        AlgorithmKind::Bfs,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::GreedyBestFirst,
        AlgorithmKind::AStarManhattan,
        AlgorithmKind::BidirectionalBfs,
        AlgorithmKind::BidirectionalAStar,
        AlgorithmKind::FloydWarshall,
        AlgorithmKind::Johnson,
    ];

    /// Short identifier, accepted back by `str::parse`.
    pub const fn key(self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "bfs",
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::GreedyBestFirst => "greedy",
            AlgorithmKind::AStarManhattan => "astar",
            AlgorithmKind::BidirectionalBfs => "bidirectional",
            AlgorithmKind::BidirectionalAStar => "bidirectional-astar",
            AlgorithmKind::FloydWarshall => "floyd-warshall",
            AlgorithmKind::Johnson => "johnson",
        }
    }

    /// Default maximum of walkable cells this algorithm should be run on, if bounded.
    pub const fn cell_limit(self) -> Option<usize> {
        match self {
            AlgorithmKind::FloydWarshall | AlgorithmKind::Johnson => Some(DENSE_CELL_LIMIT),
            _ => None,
        }
    }

    /// Whether the returned path is always a shortest one.
    pub const fn is_optimal(self) -> bool {
        !matches!(
            self,
            AlgorithmKind::GreedyBestFirst | AlgorithmKind::BidirectionalAStar
        )
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgorithmKind::Bfs => write!(f, "Breadth-First Search (BFS)"),
            AlgorithmKind::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            AlgorithmKind::GreedyBestFirst => write!(f, "Greedy Best-First Search"),
            AlgorithmKind::AStarManhattan => write!(f, "A* (Manhattan)"),
            AlgorithmKind::BidirectionalBfs => write!(f, "Bidirectional BFS"),
            AlgorithmKind::BidirectionalAStar => write!(f, "Bidirectional A*"),
            AlgorithmKind::FloydWarshall => write!(f, "Floyd-Warshall"),
            AlgorithmKind::Johnson => write!(f, "Johnson's Algorithm"),
        }
    }
}

impl std::str::FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| {
                let known = AlgorithmKind::ALL.map(AlgorithmKind::key).join(", ");
                format!("unknown algorithm '{}', expected one of: {}", s, known)
            })
    }
}

impl Solver for AlgorithmKind {
    fn search(&self, grid: &Grid) -> Trace {
        match self {
            AlgorithmKind::Bfs => solve_bfs(grid),
            AlgorithmKind::Dijkstra => solve_dijkstra(grid),
            AlgorithmKind::GreedyBestFirst => solve_greedy(grid),
            AlgorithmKind::AStarManhattan => solve_astar(grid),
            AlgorithmKind::BidirectionalBfs => solve_bidirectional_bfs(grid),
            AlgorithmKind::BidirectionalAStar => solve_bidirectional_astar(grid),
            AlgorithmKind::FloydWarshall => solve_floyd_warshall(grid),
            AlgorithmKind::Johnson => solve_johnson(grid),
        }
    }
}

/// Solve `grid` with `algorithm`, timing the search.
pub fn solve(algorithm: AlgorithmKind, grid: &Grid) -> SearchResult {
    let result = algorithm.solve(grid);
    tracing::debug!(
        "[solver] {}: path {} cells, {} visited, {} steps, {:.3} ms ({:?})",
        algorithm,
        result.path.len(),
        result.visited.len(),
        result.history.len(),
        result.elapsed_ms,
        result.outcome
    );
    result
}

/// Like [`solve`], but refuses grids above the algorithm's [`AlgorithmKind::cell_limit`].
pub fn solve_bounded(algorithm: AlgorithmKind, grid: &Grid) -> Result<SearchResult, MazeError> {
    solve_within(algorithm, grid, algorithm.cell_limit().unwrap_or(usize::MAX))
}

/// Like [`solve_bounded`] with a caller-chosen limit for the algorithms that
/// have one. Unbounded algorithms always run.
pub fn solve_within(
    algorithm: AlgorithmKind,
    grid: &Grid,
    limit: usize,
) -> Result<SearchResult, MazeError> {
    if algorithm.cell_limit().is_some() {
        let cells = grid.walkable_count();
        if cells > limit {
            tracing::warn!(
                "[solver] {} skipped: {} walkable cells exceeds limit {}",
                algorithm,
                cells,
                limit
            );
            return Err(MazeError::TooManyCells {
                algorithm,
                cells,
                limit,
            });
        }
    }
    Ok(solve(algorithm, grid))
}

/// Follows parent links back from `to` and returns the chain root-first.
pub(crate) fn walk_parents(parents: &HashMap<Coord, Coord>, to: Coord) -> Vec<Coord> {
    let mut path = vec![to];
    let mut current = to;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
