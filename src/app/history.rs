/// Position inside a recorded step history while it is being replayed.
///
/// Step 0 is the first recorded view and `len - 1` the last. An empty history
/// has no valid step, so every move fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayCursor {
    /// Current step. Always less than `len` when `len > 0`.
    step: usize,
    len: usize,
}

impl ReplayCursor {
    pub fn new(len: usize) -> Self {
        ReplayCursor { step: 0, len }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.step + 1 >= self.len
    }

    /// Moves one step towards the final view. Returns the new step, or `None`
    /// when already there.
    pub fn forward(&mut self) -> Option<usize> {
        match self.is_at_end() {
            true => None,
            false => {
                self.step += 1;
                Some(self.step)
            }
        }
    }

    /// Moves one step back. Returns the step that was left, or `None` at step 0.
    pub fn backward(&mut self) -> Option<usize> {
        match self.step {
            0 => None,
            _ => {
                self.step -= 1;
                Some(self.step + 1)
            }
        }
    }

    /// Jumps to `step`, clamped to the last recorded one.
    pub fn seek(&mut self, step: usize) {
        self.step = step.min(self.len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_stops_at_last_step() {
        let mut cursor = ReplayCursor::new(3);
        assert_eq!(cursor.forward(), Some(1));
        assert_eq!(cursor.forward(), Some(2));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.forward(), None);
        assert_eq!(cursor.step(), 2);
    }

    #[test]
    fn test_backward_reports_left_step() {
        let mut cursor = ReplayCursor::new(3);
        cursor.seek(2);
        assert_eq!(cursor.backward(), Some(2));
        assert_eq!(cursor.step(), 1);
        assert_eq!(cursor.backward(), Some(1));
        assert_eq!(cursor.backward(), None);
    }

    #[test]
    fn test_empty_history() {
        let mut cursor = ReplayCursor::new(0);
        assert!(cursor.is_empty());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.forward(), None);
        assert_eq!(cursor.backward(), None);
        cursor.seek(10);
        assert_eq!(cursor.step(), 0);
    }

    #[test]
    fn test_seek_clamps() {
        let mut cursor = ReplayCursor::new(4);
        cursor.seek(99);
        assert_eq!(cursor.step(), 3);
    }

    #[test]
    fn test_jump_to_ends() {
        let mut cursor = ReplayCursor::new(5);
        cursor.forward();
        cursor.seek(cursor.len());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.forward(), None);
        cursor.seek(0);
        assert_eq!(cursor.step(), 0);
        assert_eq!(cursor.backward(), None);
        assert_eq!(cursor.forward(), Some(1));
    }
}
