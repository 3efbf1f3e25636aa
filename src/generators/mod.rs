use rand::{Rng, SeedableRng, rngs::StdRng};

mod endpoints;
mod frontier;
mod loops;

use crate::{
    error::MazeError,
    maze::{CellKind, Grid},
};

/// Fraction of the grid area sampled for extra openings after carving.
pub const DEFAULT_LOOP_DENSITY: f64 = 0.05;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Frontier pop policy used while carving.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Oldest frontier cell first.
    Bfs,
    /// Uniformly random frontier cell.
    #[default]
    Prim,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Bfs => write!(f, "Randomized Breadth-First Expansion"),
            Generator::Prim => write!(f, "Randomized Prim's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Generator::Bfs),
            "prim" => Ok(Generator::Prim),
            _ => Err(format!("unknown generator '{}', expected bfs or prim", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeOptions {
    pub generator: Generator,
    /// See [`DEFAULT_LOOP_DENSITY`]. Zero keeps the maze perfect.
    pub loop_density: f64,
}

impl Default for MazeOptions {
    fn default() -> Self {
        Self {
            generator: Generator::default(),
            loop_density: DEFAULT_LOOP_DENSITY,
        }
    }
}

/// Generate a maze with the default options and a fresh OS-seeded RNG.
pub fn generate_maze(width: usize, height: usize) -> Result<Grid, MazeError> {
    generate_maze_with(width, height, &MazeOptions::default(), &mut get_rng(None))
}

/// Generate a maze, drawing all randomness from `rng`.
///
/// Every walkable cell of the result is reachable from the start, and start and end
/// differ unless the grid has a single cell.
pub fn generate_maze_with<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    options: &MazeOptions,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::filled(width, height, CellKind::Wall)?;

    let origin = (
        rng.random_range(0..grid.width()),
        rng.random_range(0..grid.height()),
    );
    let carved = frontier::carve(&mut grid, origin, options.generator, rng);
    let loops = loops::inject_loops(&mut grid, options.loop_density, rng);
    let (start, end) = endpoints::place_endpoints(&mut grid, origin);
    grid.set_endpoints(start, end);

    tracing::debug!(
        "[generator] {} built {}x{} maze: {} carved, {} loops, start {:?}, end {:?}",
        options.generator,
        width,
        height,
        carved,
        loops,
        start,
        end
    );
    Ok(grid)
}
