use std::collections::VecDeque;

use rand::{Rng, seq::SliceRandom};

use super::Generator;
use crate::maze::{CellKind, Coord, Grid};

/// Cells waiting to be expanded. The variant decides which one comes out next.
enum Frontier {
    /// First in, first out: corridors grow in breadth-first rings.
    Fifo(VecDeque<Coord>),
    /// Uniformly random pick, as in randomized Prim.
    Random(Vec<Coord>),
}

impl Frontier {
    fn new(generator: Generator) -> Self {
        match generator {
            Generator::Bfs => Frontier::Fifo(VecDeque::new()),
            Generator::Prim => Frontier::Random(Vec::new()),
        }
    }

    fn push(&mut self, coord: Coord) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(coord),
            Frontier::Random(cells) => cells.push(coord),
        }
    }

    fn pop<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Random(cells) if cells.is_empty() => None,
            Frontier::Random(cells) => {
                let idx = rng.random_range(0..cells.len());
                Some(cells.swap_remove(idx))
            }
        }
    }
}

/// Moves two cells away in each cardinal direction, paired with the wall cell in between.
/// Returned as `(between, destination)`.
fn jumps(coord: Coord) -> [(Coord, Coord); 4] {
    let (x, y) = coord;
    // NOTE: When x < 2 or y < 2 the destination becomes u16::MAX and fails the bounds check,
    // and saturating at u16::MAX is out of bounds as well.
    [
        ((x, y.wrapping_sub(1)), (x, y.checked_sub(2).unwrap_or(u16::MAX))),
        ((x.saturating_add(1), y), (x.saturating_add(2), y)),
        ((x, y.saturating_add(1)), (x, y.saturating_add(2))),
        ((x.wrapping_sub(1), y), (x.checked_sub(2).unwrap_or(u16::MAX), y)),
    ]
}

/// Carves a perfect maze into an all-wall grid, starting from `origin`.
///
/// Only cells sharing the parity of `origin` become rooms, so every corridor is
/// separated by walls of odd spacing. Returns the number of cells turned into paths.
pub(super) fn carve<R: Rng + ?Sized>(
    grid: &mut Grid,
    origin: Coord,
    generator: Generator,
    rng: &mut R,
) -> usize {
    grid.set(origin, CellKind::Path);
    let mut carved = 1;

    let mut frontier = Frontier::new(generator);
    frontier.push(origin);

    while let Some(cell) = frontier.pop(rng) {
        let mut moves = jumps(cell);
        moves.shuffle(rng);

        for (between, destination) in moves {
            if grid.is_in_bounds(destination) && grid[destination] == CellKind::Wall {
                grid.set(between, CellKind::Path);
                grid.set(destination, CellKind::Path);
                carved += 2;
                frontier.push(destination);
            }
        }
    }
    carved
}
