use std::collections::HashSet;

use crate::maze::Coord;

/// Replayable record of how a search's visited view grew.
///
/// Cells are never removed from the view, so each step is stored as a prefix
/// of one insertion-ordered list instead of a full set copy. Step `i` may add
/// one cell, several cells (seeded frames) or none (a frame where the view did
/// not grow, e.g. two bidirectional frontiers meeting).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepHistory {
    order: Vec<Coord>,
    ends: Vec<usize>,
}

impl StepHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, cell: Coord) {
        self.order.push(cell);
        self.ends.push(self.order.len());
    }

    /// One step that adds every cell of `cells` at once.
    pub(crate) fn record_many(&mut self, cells: impl IntoIterator<Item = Coord>) {
        self.order.extend(cells);
        self.ends.push(self.order.len());
    }

    /// One step that repeats the previous view.
    pub(crate) fn record_unchanged(&mut self) {
        self.ends.push(self.order.len());
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// The visited view at `step`, in the order cells joined it.
    pub fn snapshot(&self, step: usize) -> Option<&[Coord]> {
        self.ends.get(step).map(|&end| &self.order[..end])
    }

    /// Cells that joined the view at exactly `step`.
    pub fn added_at(&self, step: usize) -> Option<&[Coord]> {
        let end = *self.ends.get(step)?;
        let begin = match step {
            0 => 0,
            _ => self.ends[step - 1],
        };
        Some(&self.order[begin..end])
    }

    /// The visited view after the final step.
    pub fn last(&self) -> Option<&[Coord]> {
        self.len().checked_sub(1).and_then(|step| self.snapshot(step))
    }

    /// Iterates over every step's view, oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[Coord]> + '_ {
        self.ends.iter().map(|&end| &self.order[..end])
    }
}

/// Visited set paired with its history: a cell is recorded exactly when it is
/// first marked visited.
#[derive(Debug, Default)]
pub(crate) struct Visits {
    pub(crate) visited: HashSet<Coord>,
    pub(crate) history: StepHistory,
}

impl Visits {
    /// Marks `cell` visited. Returns `false` (and records nothing) if it already was.
    pub(crate) fn visit(&mut self, cell: Coord) -> bool {
        let fresh = self.visited.insert(cell);
        if fresh {
            self.history.record(cell);
        }
        fresh
    }

    pub(crate) fn contains(&self, cell: Coord) -> bool {
        self.visited.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshots_are_prefixes() {
        let mut history = StepHistory::new();
        history.record_many([(0, 0), (5, 5)]);
        history.record((1, 0));
        history.record_unchanged();
        history.record((2, 0));

        assert_eq!(history.len(), 4);
        assert_eq!(history.snapshot(0), Some(&[(0, 0), (5, 5)][..]));
        assert_eq!(history.snapshot(2), Some(&[(0, 0), (5, 5), (1, 0)][..]));
        assert_eq!(history.added_at(2), Some(&[][..]));
        assert_eq!(history.added_at(3), Some(&[(2, 0)][..]));
        assert_eq!(history.last().map(<[_]>::len), Some(4));
        assert_eq!(history.snapshot(4), None);
    }

    #[test]
    fn test_views_never_shrink() {
        let mut history = StepHistory::new();
        (0..10).for_each(|x| history.record((x, 0)));
        let sizes = history.iter().map(<[_]>::len).collect::<Vec<_>>();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(history.snapshot(3).map(<[_]>::len), Some(4));
    }

    #[test]
    fn test_empty_history() {
        let history = StepHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
        assert_eq!(history.added_at(0), None);
    }

    #[test]
    fn test_visits_record_once() {
        let mut visits = Visits::default();
        assert!(visits.visit((1, 1)));
        assert!(!visits.visit((1, 1)));
        assert!(visits.contains((1, 1)));
        assert_eq!(visits.history.len(), 1);
    }
}
