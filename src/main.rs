use std::io::Write;

use clap::{Args, Parser, Subcommand};
use tracing::Level;

use mazerun::{
    app::{App, MazeSize, ReplayStatus},
    compute_statistics,
    generators::{DEFAULT_LOOP_DENSITY, Generator, MazeOptions},
    solvers::{AlgorithmKind, DENSE_CELL_LIMIT, Outcome, solve},
};

/// Generate mazes and compare path search algorithms on them
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log more to mazerun.log (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct MazeArgs {
    /// Maze width in cells
    #[arg(long, default_value_t = 21)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 21)]
    height: usize,

    /// Size preset (small, medium, large), overrides --width and --height
    #[arg(long)]
    size: Option<MazeSize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Frontier policy while carving (bfs, prim)
    #[arg(long, default_value = "prim")]
    generator: Generator,

    /// Fraction of the area sampled for extra openings
    #[arg(long, default_value_t = DEFAULT_LOOP_DENSITY)]
    loop_density: f64,
}

impl MazeArgs {
    fn dimensions(&self) -> (usize, usize) {
        self.size.map_or((self.width, self.height), MazeSize::dimensions)
    }

    fn options(&self) -> MazeOptions {
        MazeOptions {
            generator: self.generator,
            loop_density: self.loop_density,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve one maze and print it with the path
    Solve {
        #[command(flatten)]
        maze: MazeArgs,

        /// Search algorithm
        #[arg(short, long, default_value = "astar")]
        algorithm: AlgorithmKind,

        /// Show the visited view at this history step instead of the last one
        #[arg(long)]
        step: Option<usize>,

        /// Overlay the visited cells
        #[arg(long)]
        show_visited: bool,
    },
    /// Animate how a search explores the maze
    Replay {
        #[command(flatten)]
        maze: MazeArgs,

        /// Search algorithm
        #[arg(short, long, default_value = "astar")]
        algorithm: AlgorithmKind,

        /// Delay between steps, in milliseconds
        #[arg(long, default_value_t = 30)]
        frame_ms: u64,
    },
    /// Print statistics of every algorithm on the same maze
    Report {
        #[command(flatten)]
        maze: MazeArgs,

        /// Run once per size preset instead of on a single maze
        #[arg(long)]
        all_sizes: bool,

        /// Walkable-cell limit for Floyd-Warshall and Johnson
        #[arg(long, default_value_t = DENSE_CELL_LIMIT)]
        cell_limit: usize,
    },
}

/// Log to a file so events never interleave with terminal rendering.
/// The returned guard flushes pending events when dropped.
fn init_logging(verbose: u8) -> tracing_appender::non_blocking::WorkerGuard {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let file_appender = tracing_appender::rolling::never(".", "mazerun.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose);

    let mut stdout = std::io::stdout();
    match cli.command {
        Command::Solve {
            maze,
            algorithm,
            step,
            show_visited,
        } => {
            let app = App {
                seed: maze.seed,
                ..App::default()
            };
            let (width, height) = maze.dimensions();
            let grid = app.generate(width, height, &maze.options())?;
            let result = solve(algorithm, &grid);
            App::print_solution(&mut stdout, &grid, &result, step, show_visited)?;

            let stats = compute_statistics(&result);
            match result.outcome {
                Outcome::Found => writeln!(
                    stdout,
                    "{}: path {} cells, {} visited, {} steps, {:.3} ms",
                    algorithm,
                    stats.path_length,
                    stats.visited_count,
                    result.history.len(),
                    stats.time_taken_ms
                )?,
                outcome => writeln!(
                    stdout,
                    "{}: no path ({:?}), {} visited, {:.3} ms",
                    algorithm, outcome, stats.visited_count, stats.time_taken_ms
                )?,
            }
        }
        Command::Replay {
            maze,
            algorithm,
            frame_ms,
        } => {
            let app = App {
                seed: maze.seed,
                replay_frame: std::time::Duration::from_millis(frame_ms),
                ..App::default()
            };
            let (width, height) = maze.dimensions();
            let grid = app.generate(width, height, &maze.options())?;
            let result = solve(algorithm, &grid);
            match app.replay(&mut stdout, &grid, &result, algorithm)? {
                ReplayStatus::Completed => {}
                ReplayStatus::Cancelled => tracing::info!("Replay was cancelled by user."),
                ReplayStatus::TerminalTooSmall => eprintln!(
                    "Terminal is too small for a {}x{} maze; resize it or pick a smaller size.",
                    width, height
                ),
            }
        }
        Command::Report {
            maze,
            all_sizes,
            cell_limit,
        } => {
            let app = App {
                seed: maze.seed,
                cell_limit,
                ..App::default()
            };
            let sizes = match all_sizes {
                true => MazeSize::ALL.map(MazeSize::dimensions).to_vec(),
                false => vec![maze.dimensions()],
            };
            for (width, height) in sizes {
                let grid = app.generate(width, height, &maze.options())?;
                writeln!(stdout, "{}", app.report(&grid))?;
            }
        }
    }
    Ok(())
}
