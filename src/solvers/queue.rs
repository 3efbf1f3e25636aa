use std::{cmp::Reverse, collections::BinaryHeap};

use crate::maze::Coord;

/// Heap entry ordered by `key`, then by push order.
///
/// `tiebreak` is unique per queue, so equal keys pop first-in first-out and
/// `cell` never takes part in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct PriorityEntry<K> {
    pub key: K,
    pub tiebreak: u64,
    pub cell: Coord,
}

/// Min-priority queue with deterministic ordering among equal keys.
pub(crate) struct MinQueue<K> {
    // Using Reverse to turn the max-heap into a min-heap
    heap: BinaryHeap<Reverse<PriorityEntry<K>>>,
    counter: u64,
}

impl<K: Ord> MinQueue<K> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }

    pub(crate) fn push(&mut self, key: K, cell: Coord) {
        self.heap.push(Reverse(PriorityEntry {
            key,
            tiebreak: self.counter,
            cell,
        }));
        self.counter += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(K, Coord)> {
        self.heap.pop().map(|Reverse(entry)| (entry.key, entry.cell))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
