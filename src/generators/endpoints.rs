use crate::maze::{CellKind, Coord, Grid};

/// Side length of the corner regions scanned for the start and end cells.
const CORNER_SPAN: u16 = 3;

/// Picks the start near the top-left corner and the end near the bottom-right
/// corner. `origin` must be a path cell connected to every other path cell; forced
/// openings are carved towards it so reachability still holds.
pub(super) fn place_endpoints(grid: &mut Grid, origin: Coord) -> (Coord, Coord) {
    let (width, height) = (grid.width(), grid.height());

    let start = first_open(
        grid,
        (0..height.min(CORNER_SPAN)).flat_map(|y| (0..width.min(CORNER_SPAN)).map(move |x| (x, y))),
        None,
    )
    .unwrap_or_else(|| force_opening(grid, (0, 0), origin));

    if grid.len() == 1 {
        return (start, start);
    }

    let end = first_open(
        grid,
        (height.saturating_sub(CORNER_SPAN)..height)
            .rev()
            .flat_map(|y| {
                (width.saturating_sub(CORNER_SPAN)..width)
                    .rev()
                    .map(move |x| (x, y))
            }),
        Some(start),
    )
    .unwrap_or_else(|| {
        let corner = [
            (width - 1, height - 1),
            (0, height - 1),
            (width - 1, 0),
            (0, 0),
        ]
        .into_iter()
        .find(|&c| c != start)
        .unwrap_or((width - 1, height - 1));
        force_opening(grid, corner, origin)
    });

    (start, end)
}

fn first_open(
    grid: &Grid,
    mut region: impl Iterator<Item = Coord>,
    exclude: Option<Coord>,
) -> Option<Coord> {
    region.find(|&c| grid[c] != CellKind::Wall && Some(c) != exclude)
}

/// Opens `from` and an L-shaped corridor (horizontal first) to `to`.
fn force_opening(grid: &mut Grid, from: Coord, to: Coord) -> Coord {
    tracing::warn!(
        "[generator] no open cell near {:?}, carving a corridor to {:?}",
        from,
        to
    );
    let (x0, x1) = (from.0.min(to.0), from.0.max(to.0));
    (x0..=x1).for_each(|x| open(grid, (x, from.1)));
    let (y0, y1) = (from.1.min(to.1), from.1.max(to.1));
    (y0..=y1).for_each(|y| open(grid, (to.0, y)));
    from
}

fn open(grid: &mut Grid, coord: Coord) {
    if grid[coord] == CellKind::Wall {
        grid.set(coord, CellKind::Path);
    }
}
