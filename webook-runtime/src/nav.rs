//! Chapter navigation.

use std::collections::BTreeSet;

/// Result of stepping forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(usize),
    /// `next` on the last chapter: fire the completion hook, stay put
    Completed,
    /// Nothing to do (no chapters, or `prev` on the first)
    Stayed,
}

/// Active chapter plus the set of chapters ever shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    total: usize,
    current: usize,
    seen: BTreeSet<usize>,
}

impl NavState {
    /// The first chapter starts active and seen
    pub fn new(total: usize) -> Self {
        let mut seen = BTreeSet::new();
        if total > 0 {
            seen.insert(0);
        }
        Self {
            total,
            current: 0,
            seen,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    pub fn jump_to(&mut self, index: usize) -> Step {
        if index >= self.total {
            return Step::Stayed;
        }
        self.current = index;
        self.seen.insert(index);
        Step::Moved(index)
    }

    pub fn next(&mut self) -> Step {
        if self.total == 0 {
            Step::Stayed
        } else if self.current + 1 >= self.total {
            Step::Completed
        } else {
            self.jump_to(self.current + 1)
        }
    }

    pub fn prev(&mut self) -> Step {
        match self.current.checked_sub(1) {
            Some(i) => self.jump_to(i),
            None => Step::Stayed,
        }
    }

    /// Whole-percent progress, `round(|seen| / N * 100)` clamped to [0, 100]
    pub fn progress(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.seen.len() as f64 / self.total as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u32
    }

    /// Zero-padded position label, e.g. `01 / 04`
    pub fn counter(&self) -> String {
        let shown = if self.total == 0 { 0 } else { self.current + 1 };
        format!("{:02} / {:02}", shown, self.total)
    }

    pub fn is_last(&self) -> bool {
        self.total > 0 && self.current + 1 == self.total
    }
}
