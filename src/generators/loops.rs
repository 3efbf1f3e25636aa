use rand::{Rng, seq::SliceRandom};

use crate::maze::{CellKind, Coord, Grid};

/// Opens up to `⌊density × width × height⌋` random interior walls, each only if
/// it directly joins two path cells on opposite sides. This turns a perfect maze
/// into one with cycles. Returns the number of walls removed.
pub(super) fn inject_loops<R: Rng + ?Sized>(grid: &mut Grid, density: f64, rng: &mut R) -> usize {
    let (width, height) = (grid.width(), grid.height());
    // NaN and negative densities add nothing
    if width < 3 || height < 3 || !(density > 0.0) {
        return 0;
    }
    let budget = (density.min(1.0) * grid.len() as f64).floor() as usize;
    if budget == 0 {
        return 0;
    }

    let mut candidates = (0..grid.len())
        .map(|idx| grid.coord(idx))
        .filter(|&coord| !grid.is_boundary(coord) && grid[coord] == CellKind::Wall)
        .collect::<Vec<_>>();
    candidates.shuffle(rng);
    candidates.truncate(budget);

    let mut opened = 0;
    for coord in candidates {
        if joins_opposite_paths(grid, coord) {
            grid.set(coord, CellKind::Path);
            opened += 1;
        }
    }
    opened
}

/// `coord` must not be on the boundary.
fn joins_opposite_paths(grid: &Grid, coord: Coord) -> bool {
    let (x, y) = coord;
    let open = |c: Coord| grid[c] != CellKind::Wall;
    (open((x - 1, y)) && open((x + 1, y))) || (open((x, y - 1)) && open((x, y + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_joins_opposite_paths() {
        let horizontal = Grid::from_rows(&["###", "S#E", "###"]).unwrap();
        assert!(joins_opposite_paths(&horizontal, (1, 1)));
        let vertical = Grid::from_rows(&["#S#", "###", "#E#"]).unwrap();
        assert!(joins_opposite_paths(&vertical, (1, 1)));
        let corner = Grid::from_rows(&["S#.", "###", "..E"]).unwrap();
        assert!(!joins_opposite_paths(&corner, (1, 1)));
    }

    #[test]
    fn test_inject_loops_only_bridges_paths() {
        // Two vertical corridors separated by a wall column
        let mut grid = Grid::from_rows(&[
            "#####",
            "#S#.#",
            "#.#.#",
            "#.#E#",
            "#####",
        ])
        .unwrap();
        let mut rng = get_rng(Some(3));
        let opened = inject_loops(&mut grid, 1.0, &mut rng);
        // Only the middle column can bridge the two corridors
        assert_eq!(opened, 3);
        for y in 1..4 {
            assert_eq!(grid[(2, y)], CellKind::Path);
        }
        assert_eq!(grid[(0, 2)], CellKind::Wall);
    }

    #[test]
    fn test_inject_loops_keeps_outer_ring() {
        // Each ring wall has open cells on both sides along the edge
        let mut grid = Grid::from_rows(&[
            "S.#..",
            ".....",
            "#...#",
            ".....",
            "..#.E",
        ])
        .unwrap();
        let mut rng = get_rng(Some(5));
        assert_eq!(inject_loops(&mut grid, 1.0, &mut rng), 0);
        for coord in [(2, 0), (0, 2), (4, 2), (2, 4)] {
            assert_eq!(grid[coord], CellKind::Wall);
        }
    }

    #[test]
    fn test_inject_loops_ignores_small_or_empty_budget() {
        let mut grid = Grid::from_rows(&["S.", ".E"]).unwrap();
        let mut rng = get_rng(Some(0));
        assert_eq!(inject_loops(&mut grid, 1.0, &mut rng), 0);

        let mut grid = Grid::from_rows(&["S#.", "###", "..E"]).unwrap();
        assert_eq!(inject_loops(&mut grid, 0.0, &mut rng), 0);
        assert_eq!(inject_loops(&mut grid, f64::NAN, &mut rng), 0);
    }
}
