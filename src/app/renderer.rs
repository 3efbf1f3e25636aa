use std::{collections::HashSet, fmt, io::Write};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{CellKind, Coord, Grid};

/// What a single grid position looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Start,
    End,
    /// Marked visited by the search at the shown step.
    Visited,
    /// Part of the returned path.
    Route,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn for_cell(kind: CellKind) -> Tile {
        match kind {
            CellKind::Wall => Tile::Wall,
            CellKind::Path => Tile::Open,
            CellKind::Start => Tile::Start,
            CellKind::End => Tile::End,
        }
    }

    /// Start and end stay visible whatever overlay covers them.
    fn overlaid(kind: CellKind, overlay: Tile) -> Tile {
        match kind {
            CellKind::Start | CellKind::End | CellKind::Wall => Tile::for_cell(kind),
            CellKind::Path => overlay,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Start => "🟩".with(Color::Green),
            Tile::End => "🟥".with(Color::Red),
            Tile::Visited => "* ".with(Color::Blue),
            Tile::Route => "🟨".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::CELL_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Tiles of `grid` in row-major order with the visited and route overlays
/// applied. Route wins over visited.
pub fn compose(grid: &Grid, visited: &[Coord], route: &[Coord]) -> Vec<Tile> {
    let visited = visited.iter().copied().collect::<HashSet<_>>();
    let route = route.iter().copied().collect::<HashSet<_>>();
    (0..grid.len())
        .map(|idx| {
            let coord = grid.coord(idx);
            let kind = grid[coord];
            if route.contains(&coord) {
                Tile::overlaid(kind, Tile::Route)
            } else if visited.contains(&coord) {
                Tile::overlaid(kind, Tile::Visited)
            } else {
                Tile::for_cell(kind)
            }
        })
        .collect()
}

/// Writes `tiles` as plain lines, for output that is not a raw-mode screen.
pub fn write_plain(out: &mut impl Write, grid: &Grid, tiles: &[Tile]) -> std::io::Result<()> {
    for row in tiles.chunks(grid.width() as usize) {
        for tile in row {
            write!(out, "{}", tile)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Draws grids and incremental cell updates onto a raw-mode screen.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    /// Rows kept free under the grid for the status line.
    pub const NUM_STATUS_ROWS: u16 = 2;

    pub fn new(out: W) -> Self {
        Renderer { out }
    }

    /// Whether a terminal of the given size can show `grid` with its status rows.
    pub fn fits(grid: &Grid, term_width: u16, term_height: u16) -> bool {
        (grid.width() as u32) * (Tile::CELL_WIDTH as u32) <= term_width as u32
            && (grid.height() as u32) + (Self::NUM_STATUS_ROWS as u32) <= term_height as u32
    }

    /// Clears the screen and draws every tile.
    pub fn draw_grid(&mut self, grid: &Grid, tiles: &[Tile]) -> std::io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        for (y, row) in tiles.chunks(grid.width() as usize).enumerate() {
            self.out.queue(cursor::MoveTo(0, y as u16))?;
            for tile in row {
                self.out.queue(style::Print(tile))?;
            }
        }
        self.out.flush()
    }

    /// Redraws the given cells of `grid` with `overlay`, keeping start and end.
    pub fn draw_cells(&mut self, grid: &Grid, cells: &[Coord], overlay: Option<Tile>) -> std::io::Result<()> {
        for &coord in cells {
            let kind = grid[coord];
            let tile = match overlay {
                Some(overlay) => Tile::overlaid(kind, overlay),
                None => Tile::for_cell(kind),
            };
            queue!(
                self.out,
                cursor::MoveTo(coord.0 * Tile::CELL_WIDTH, coord.1),
                style::Print(tile)
            )?;
        }
        self.out.flush()
    }

    /// Replaces the status line under the grid.
    pub fn status(&mut self, grid: &Grid, text: &str) -> std::io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, grid.height()),
            terminal::Clear(ClearType::FromCursorDown),
            style::PrintStyledContent(text.with(Color::Cyan)),
        )?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [&str; 2] = ["S.#", "..E"];

    #[test]
    fn test_every_tile_is_two_columns() {
        use unicode_width::UnicodeWidthStr;
        for tile in [Tile::Wall, Tile::Open, Tile::Start, Tile::End, Tile::Visited, Tile::Route] {
            // Display asserts the width in debug builds
            assert!(!tile.to_string().is_empty());
        }
        assert_eq!("🟨".width(), Tile::CELL_WIDTH as usize);
    }

    #[test]
    fn test_compose_overlays() {
        let grid = Grid::from_rows(&GRID).unwrap();
        let tiles = compose(&grid, &[(0, 0), (1, 0), (0, 1)], &[(0, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(
            tiles,
            vec![
                Tile::Start,
                Tile::Visited,
                Tile::Wall,
                Tile::Route,
                Tile::Route,
                Tile::End,
            ]
        );
    }

    #[test]
    fn test_write_plain_has_one_line_per_row() {
        let grid = Grid::from_rows(&GRID).unwrap();
        let mut out = Vec::new();
        write_plain(&mut out, &grid, &compose(&grid, &[], &[])).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("🟩"));
        assert!(text.contains("🟥"));
    }

    #[test]
    fn test_draw_cells_keeps_endpoints() {
        let grid = Grid::from_rows(&GRID).unwrap();
        let mut renderer = Renderer::new(Vec::new());
        renderer.draw_cells(&grid, &[(0, 0), (1, 0)], Some(Tile::Visited)).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("🟩"));
        assert!(text.contains("* "));
    }

    #[test]
    fn test_fits() {
        let grid = Grid::from_rows(&GRID).unwrap();
        assert!(Renderer::<Vec<u8>>::fits(&grid, 6, 4));
        assert!(!Renderer::<Vec<u8>>::fits(&grid, 5, 4));
        assert!(!Renderer::<Vec<u8>>::fits(&grid, 6, 3));
    }
}
