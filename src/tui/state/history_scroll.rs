//! Scroll position within the history list.

/// Index of the first history entry drawn on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryScroll {
    /// Offset of the top visible entry.
    pub offset: usize,
}

impl HistoryScroll {
    /// Clamps the offset so it points at an existing entry.
    ///
    /// An empty list resets the offset to 0.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.offset = 0;
        } else if self.offset >= count {
            self.offset = count.saturating_sub(1);
        }
    }

    /// Scrolls up by `step` entries, stopping at the top.
    pub const fn up(&mut self, step: usize) {
        self.offset = self.offset.saturating_sub(step);
    }

    /// Scrolls down by `step` entries, stopping at the last entry.
    pub const fn down(&mut self, step: usize, count: usize) {
        let max_index = count.saturating_sub(1);
        let target = self.offset.saturating_add(step);
        self.offset = if target < max_index { target } else { max_index };
    }
}
