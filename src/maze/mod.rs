pub mod cell;

use std::fmt;

pub use cell::CellKind;

use crate::error::MazeError;

/// A cell position as `(x, y)`, with `x` the column and `y` the row.
pub type Coord = (u16, u16);

/// The four orthogonal neighbours of a coordinate, in the order every solver
/// explores them: down, right, up, left.
///
/// Off-grid positions are produced instead of being skipped, so callers must
/// filter with [`Grid::is_in_bounds`].
pub fn adjacent(coord: Coord) -> [Coord; 4] {
    let (x, y) = coord;
    // NOTE: When x or y is 0, wrap to u16::MAX so the bounds check filters it out.
    // Saturating at u16::MAX is also out of bounds, since the largest index is u16::MAX - 1.
    [
        (x, y.saturating_add(1)),
        (x.saturating_add(1), y),
        (x, y.wrapping_sub(1)),
        (x.wrapping_sub(1), y),
    ]
}

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
}

/// The canonical maze: a row-major rectangle of classified cells with one
/// start and one end.
///
/// Solvers only ever see a `&Grid`; the only way to change a grid is to build a
/// new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[CellKind]>,
    width: u16,
    height: u16,
    start: Coord,
    end: Coord,
}

impl Grid {
    /// Allocates a grid with every cell set to `kind`. Endpoints default to the
    /// top-left and bottom-right corners until [`Grid::set_endpoints`] runs.
    pub(crate) fn filled(width: usize, height: usize, kind: CellKind) -> Result<Self, MazeError> {
        let (w, h) = checked_dimensions(width, height)?;
        Ok(Grid {
            cells: vec![kind; width * height].into_boxed_slice(),
            width: w,
            height: h,
            start: (0, 0),
            end: (w - 1, h - 1),
        })
    }

    /// Parses the textual form: `#` wall, `.` path, `S` start and `E` end.
    ///
    /// Exactly one `S` and one `E` are required and all rows must be equally long.
    /// No reachability check is done, so disconnected grids can be built on purpose.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut grid = Grid::filled(width, height, CellKind::Wall)?;

        let mut start = None;
        let mut end = None;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(MazeError::MalformedGrid(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, glyph) in row.chars().enumerate() {
                let kind = CellKind::from_glyph(glyph).ok_or_else(|| {
                    MazeError::MalformedGrid(format!("unknown cell '{}' at ({}, {})", glyph, x, y))
                })?;
                // Both fit in u16, checked by `filled`
                let coord = (x as u16, y as u16);
                let slot = match kind {
                    CellKind::Start => Some((&mut start, "start")),
                    CellKind::End => Some((&mut end, "end")),
                    _ => None,
                };
                if let Some((slot, name)) = slot {
                    if slot.replace(coord).is_some() {
                        return Err(MazeError::MalformedGrid(format!("more than one {} cell", name)));
                    }
                }
                grid.set(coord, kind);
            }
        }

        match (start, end) {
            (Some(start), Some(end)) => {
                grid.start = start;
                grid.end = end;
                Ok(grid)
            }
            (None, _) => Err(MazeError::MalformedGrid("missing start cell".into())),
            (_, None) => Err(MazeError::MalformedGrid("missing end cell".into())),
        }
    }

    /// Returns the width of the grid in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height of the grid in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Total number of cells, walls included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// On the outer ring of the grid.
    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.0 == 0 || coord.1 == 0 || coord.0 == self.width - 1 || coord.1 == self.height - 1
    }

    /// The kind of the cell at `coord`, or `None` when out of bounds.
    pub fn cell_kind(&self, coord: Coord) -> Option<CellKind> {
        self.is_in_bounds(coord).then(|| self[coord])
    }

    /// In bounds and not a wall.
    pub fn is_walkable(&self, coord: Coord) -> bool {
        self.cell_kind(coord).is_some_and(CellKind::is_walkable)
    }

    /// Walkable 4-connected neighbours of `coord`, in [`adjacent`] order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        adjacent(coord)
            .into_iter()
            .filter(move |&c| self.is_walkable(c))
    }

    /// All walkable cells in row-major order.
    pub fn walkable_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| kind.is_walkable())
            .map(|(idx, _)| self.coord(idx))
    }

    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|kind| kind.is_walkable()).count()
    }

    /// Row-major index of an in-bounds coordinate.
    pub fn ravel_index(&self, coord: Coord) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Inverse of [`Grid::ravel_index`].
    pub fn coord(&self, idx: usize) -> Coord {
        let width = self.width as usize;
        ((idx % width) as u16, (idx / width) as u16)
    }

    pub(crate) fn set(&mut self, coord: Coord, kind: CellKind) {
        let idx = self.ravel_index(coord);
        self.cells[idx] = kind;
    }

    /// Marks the endpoints. When both coincide (single-cell grids) the cell is
    /// classified as `Start`.
    pub(crate) fn set_endpoints(&mut self, start: Coord, end: Coord) {
        self.set(end, CellKind::End);
        self.set(start, CellKind::Start);
        self.start = start;
        self.end = end;
    }
}

fn checked_dimensions(width: usize, height: usize) -> Result<(u16, u16), MazeError> {
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 && w < u16::MAX && h < u16::MAX => Ok((w, h)),
        _ => Err(MazeError::InvalidDimensions { width, height }),
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = CellKind;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(coord)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
