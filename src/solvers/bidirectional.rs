use std::collections::{HashMap, HashSet, VecDeque};

use super::{
    Trace,
    history::{StepHistory, Visits},
    queue::MinQueue,
    walk_parents,
};
use crate::maze::{Coord, Grid, manhattan};

/// Frontier of one search direction.
enum SideQueue {
    Fifo(VecDeque<Coord>),
    /// Keyed by depth plus Manhattan distance to the opposite endpoint.
    Heuristic(MinQueue<u32>),
}

/// One direction of a bidirectional search.
struct Side {
    queue: SideQueue,
    visited: HashSet<Coord>,
    parents: HashMap<Coord, Coord>,
    depth: HashMap<Coord, u32>,
    /// The endpoint this side is heading towards.
    target: Coord,
}

impl Side {
    fn new(origin: Coord, target: Coord, heuristic: bool) -> Self {
        let queue = match heuristic {
            true => {
                let mut open = MinQueue::new();
                open.push(manhattan(origin, target), origin);
                SideQueue::Heuristic(open)
            }
            false => SideQueue::Fifo(VecDeque::from([origin])),
        };
        Side {
            queue,
            visited: HashSet::from([origin]),
            parents: HashMap::new(),
            depth: HashMap::from([(origin, 0)]),
            target,
        }
    }

    fn is_exhausted(&self) -> bool {
        match &self.queue {
            SideQueue::Fifo(queue) => queue.is_empty(),
            SideQueue::Heuristic(open) => open.is_empty(),
        }
    }

    fn pop(&mut self) -> Option<Coord> {
        match &mut self.queue {
            SideQueue::Fifo(queue) => queue.pop_front(),
            SideQueue::Heuristic(open) => open.pop().map(|(_, cell)| cell),
        }
    }

    fn push(&mut self, cell: Coord, depth: u32) {
        let target = self.target;
        match &mut self.queue {
            SideQueue::Fifo(queue) => queue.push_back(cell),
            SideQueue::Heuristic(open) => open.push(depth + manhattan(cell, target), cell),
        }
    }

    /// One turn of this side: a whole BFS layer for a FIFO frontier, a single pop
    /// for a heuristic one. Stops early at the first meeting cell.
    ///
    /// Whole layers keep the first meeting on a shortest path: when the forward side
    /// has settled depths below `f` and the backward side depths below `b`, no
    /// path shorter than `f + b + 1` edges can exist yet.
    fn step(&mut self, grid: &Grid, other: &Side, history: &mut StepHistory) -> Option<Coord> {
        let batch = match &self.queue {
            SideQueue::Fifo(queue) => queue.len(),
            SideQueue::Heuristic(_) => 1,
        };
        (0..batch).find_map(|_| self.expand(grid, other, history))
    }

    /// Pops one cell and discovers its unvisited neighbours, recording each into
    /// the shared `history`. Returns the meeting cell as soon as a discovered
    /// neighbour is already visited by `other`.
    fn expand(&mut self, grid: &Grid, other: &Side, history: &mut StepHistory) -> Option<Coord> {
        let current = self.pop()?;
        let depth = self.depth.get(&current).copied().unwrap_or_default() + 1;

        for neighbor in grid.neighbors(current) {
            if !self.visited.insert(neighbor) {
                continue;
            }
            self.parents.insert(neighbor, current);
            self.depth.insert(neighbor, depth);
            self.push(neighbor, depth);

            if other.visited.contains(&neighbor) {
                // Already part of the combined view
                history.record_unchanged();
                return Some(neighbor);
            }
            history.record(neighbor);
        }
        None
    }
}

/// Bidirectional breadth-first search: one FIFO frontier from each end taking
/// turns one layer at a time, stopping when a frontier discovers a cell the other
/// side has already visited. The path is a shortest one.
pub fn solve_bidirectional_bfs(grid: &Grid) -> Trace {
    bidirectional(grid, false)
}

/// Bidirectional A*: like [`solve_bidirectional_bfs`] but each frontier is a heap
/// keyed by depth plus Manhattan distance to the opposite end. Cells are marked
/// visited when discovered, so the path is not guaranteed to be shortest.
pub fn solve_bidirectional_astar(grid: &Grid) -> Trace {
    bidirectional(grid, true)
}

fn bidirectional(grid: &Grid, heuristic: bool) -> Trace {
    let (start, goal) = (grid.start(), grid.end());
    let mut history = StepHistory::new();

    if start == goal {
        history.record(start);
        let visits = Visits {
            visited: HashSet::from([start]),
            history,
        };
        return Trace::from_visits(visits, vec![start]);
    }

    let mut forward = Side::new(start, goal, heuristic);
    let mut backward = Side::new(goal, start, heuristic);
    history.record_many([start, goal]);

    let mut meeting = None;
    while meeting.is_none() && !forward.is_exhausted() && !backward.is_exhausted() {
        meeting = forward
            .step(grid, &backward, &mut history)
            .or_else(|| backward.step(grid, &forward, &mut history));
    }

    let path = meeting
        .map(|cell| {
            // Forward segment ends at the meeting cell; the backward one starts there
            let mut path = walk_parents(&forward.parents, cell);
            let mut tail = walk_parents(&backward.parents, cell);
            tail.reverse();
            path.extend(tail.into_iter().skip(1));
            path
        })
        .unwrap_or_default();

    let visited = forward.visited.union(&backward.visited).copied().collect();
    Trace::from_visits(Visits { visited, history }, path)
}
