mod history;
mod renderer;

use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, KeyCode},
    queue,
    terminal::{self, ClearType},
};

pub use history::ReplayCursor;
pub use renderer::{Renderer, Tile, compose, write_plain};

use crate::{
    error::MazeError,
    generators::{Generator, MazeOptions, generate_maze_with, get_rng},
    maze::{Coord, Grid},
    solvers::{AlgorithmKind, DENSE_CELL_LIMIT, SearchResult, solve},
    stats::Report,
};

/// Maze size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeSize {
    Small,
    Medium,
    Large,
}

impl MazeSize {
    pub const ALL: [MazeSize; 3] = [MazeSize::Small, MazeSize::Medium, MazeSize::Large];

    /// `(width, height)` in cells.
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            MazeSize::Small => (10, 10),
            MazeSize::Medium => (50, 50),
            MazeSize::Large => (100, 100),
        }
    }
}

impl std::fmt::Display for MazeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.dimensions();
        let name = match self {
            MazeSize::Small => "Small",
            MazeSize::Medium => "Medium",
            MazeSize::Large => "Large",
        };
        write!(f, "{} ({}x{})", name, width, height)
    }
}

impl std::str::FromStr for MazeSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(MazeSize::Small),
            "medium" => Ok(MazeSize::Medium),
            "large" => Ok(MazeSize::Large),
            _ => Err(format!("unknown size '{}', expected small, medium or large", s)),
        }
    }
}

/// How a replay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStatus {
    /// Played to the last step and the user closed it.
    Completed,
    /// Esc pressed before the last step.
    Cancelled,
    /// The terminal was too small to show the grid.
    TerminalTooSmall,
}

pub struct App {
    /// Walkable-cell limit for the all-pairs solvers in reports
    pub cell_limit: usize,
    /// Delay between two replayed steps
    pub replay_frame: Duration,
    /// Seed for maze generation. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            cell_limit: DENSE_CELL_LIMIT,
            replay_frame: Duration::from_millis(30),
            seed: None,
        }
    }
}

impl App {
    const MIN_FRAME: Duration = Duration::from_millis(1);
    const MAX_FRAME: Duration = Duration::from_millis(1000);

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Generate a maze with this app's seed.
    pub fn generate(&self, width: usize, height: usize, options: &MazeOptions) -> Result<Grid, MazeError> {
        generate_maze_with(width, height, options, &mut get_rng(self.seed))
    }

    /// Solve every algorithm on `grid`, skipping the all-pairs ones above
    /// [`App::cell_limit`].
    pub fn report(&self, grid: &Grid) -> Report {
        Report::run(grid, &AlgorithmKind::ALL, self.cell_limit)
    }

    /// Print `grid` with the path, and optionally the visited view at `step`
    /// (the final view when `step` is `None`). The path is only drawn on the
    /// final view.
    pub fn print_solution(
        out: &mut impl Write,
        grid: &Grid,
        result: &SearchResult,
        step: Option<usize>,
        show_visited: bool,
    ) -> std::io::Result<()> {
        let last = result.history.len().saturating_sub(1);
        let step = step.map_or(last, |step| step.min(last));
        let visited: &[Coord] = match show_visited {
            true => result.history.snapshot(step).unwrap_or_default(),
            false => &[],
        };
        let route: &[Coord] = match step == last {
            true => result.path.as_slice(),
            false => &[],
        };
        write_plain(out, grid, &compose(grid, visited, route))
    }

    /// Animate the step history of `result` in the alternate screen.
    ///
    /// Controls: Enter pauses and resumes, ←/→ step while paused, Home/End jump
    /// to the first or last step, ↑/↓ change speed, Esc quits.
    pub fn replay(
        &self,
        stdout: &mut Stdout,
        grid: &Grid,
        result: &SearchResult,
        algorithm: AlgorithmKind,
    ) -> std::io::Result<ReplayStatus> {
        let (term_width, term_height) = terminal::size()?;
        if !Renderer::<Stdout>::fits(grid, term_width, term_height) {
            tracing::warn!(
                "[replay] terminal {}x{} too small for {}x{} grid",
                term_width,
                term_height,
                grid.width(),
                grid.height()
            );
            return Ok(ReplayStatus::TerminalTooSmall);
        }

        App::setup_terminal(stdout)?;
        let status = self.replay_loop(stdout, grid, result, algorithm);
        App::restore_terminal(stdout)?;
        status
    }

    fn replay_loop(
        &self,
        stdout: &mut Stdout,
        grid: &Grid,
        result: &SearchResult,
        algorithm: AlgorithmKind,
    ) -> std::io::Result<ReplayStatus> {
        let history = &result.history;
        let mut cursor = ReplayCursor::new(history.len());
        let mut renderer = Renderer::new(stdout);
        let mut frame = self.replay_frame;
        let mut is_paused = false;

        let first = history.snapshot(0).unwrap_or_default();
        renderer.draw_grid(grid, &compose(grid, first, &[]))?;

        loop {
            let paused = if is_paused { " [paused]" } else { "" };
            renderer.status(
                grid,
                &format!(
                    "{}: step {}/{}{}  Enter pause, ←/→ step, Home/End jump, ↑/↓ speed, Esc quit",
                    algorithm,
                    cursor.step() + 1,
                    cursor.len(),
                    paused
                ),
            )?;

            if cursor.is_at_end() && !is_paused {
                break;
            }

            if event::poll(frame)? {
                let event::Event::Key(key) = event::read()? else {
                    continue;
                };
                if key.kind != event::KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => {
                        tracing::debug!("[replay] cancelled at step {}", cursor.step());
                        return Ok(ReplayStatus::Cancelled);
                    }
                    KeyCode::Enter => is_paused = !is_paused,
                    KeyCode::Right if is_paused => {
                        if let Some(step) = cursor.forward() {
                            let added = history.added_at(step).unwrap_or_default();
                            renderer.draw_cells(grid, added, Some(Tile::Visited))?;
                        }
                    }
                    KeyCode::Left if is_paused => {
                        if let Some(left) = cursor.backward() {
                            let added = history.added_at(left).unwrap_or_default();
                            renderer.draw_cells(grid, added, None)?;
                        }
                    }
                    KeyCode::Home | KeyCode::End => {
                        let target = match key.code {
                            KeyCode::Home => 0,
                            _ => cursor.len(),
                        };
                        cursor.seek(target);
                        let view = history.snapshot(cursor.step()).unwrap_or_default();
                        renderer.draw_grid(grid, &compose(grid, view, &[]))?;
                    }
                    KeyCode::Up => frame = (frame / 2).max(App::MIN_FRAME),
                    KeyCode::Down => frame = (frame * 2).min(App::MAX_FRAME),
                    _ => {}
                }
            } else if !is_paused {
                if let Some(step) = cursor.forward() {
                    let added = history.added_at(step).unwrap_or_default();
                    renderer.draw_cells(grid, added, Some(Tile::Visited))?;
                }
            }
        }

        renderer.draw_cells(grid, &result.path, Some(Tile::Route))?;
        let found = match result.path.is_empty() {
            true => "No path found.".to_string(),
            false => format!("Path found: {} cells.", result.path.len()),
        };
        renderer.status(grid, &format!("{} Press Esc to exit...", found))?;
        App::wait_for_esc()?;
        Ok(ReplayStatus::Completed)
    }

    /// Wait for the user to press the Esc key
    /// This function blocks until Esc is pressed
    fn wait_for_esc() -> std::io::Result<()> {
        loop {
            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if code == KeyCode::Esc && kind == event::KeyEventKind::Press {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Profiling mode: generate and solve repeatedly without rendering.
    /// Returns the total solve time in milliseconds.
    pub fn profile(
        &self,
        width: usize,
        height: usize,
        algorithm: AlgorithmKind,
        generator: Generator,
        iterations: usize,
    ) -> Result<f64, MazeError> {
        let options = MazeOptions {
            generator,
            ..MazeOptions::default()
        };
        let mut rng = get_rng(self.seed);
        let mut total_ms = 0.0;
        for _ in 0..iterations {
            let grid = generate_maze_with(width, height, &options, &mut rng)?;
            total_ms += solve(algorithm, &grid).elapsed_ms;
        }
        tracing::info!(
            "[profile] {} x{} on {}x{}: {:.3} ms total",
            algorithm,
            iterations,
            width,
            height,
            total_ms
        );
        Ok(total_ms)
    }
}
