//! Two-column matching.
//!
//! Right-column items are addressed by their original pair index, not by
//! where the shuffle put them, so a match is `left == right`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(usize),
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingState {
    matched: Vec<bool>,
    left: Option<usize>,
    right: Option<usize>,
}

impl MatchingState {
    pub fn new(pairs: usize) -> Self {
        Self {
            matched: vec![false; pairs],
            left: None,
            right: None,
        }
    }

    pub fn select_left(&mut self, pair: usize) -> Option<MatchOutcome> {
        if !self.selectable(pair) {
            return None;
        }
        self.left = Some(pair);
        self.resolve()
    }

    /// `pair` is the item's original pair index
    pub fn select_right(&mut self, pair: usize) -> Option<MatchOutcome> {
        if !self.selectable(pair) {
            return None;
        }
        self.right = Some(pair);
        self.resolve()
    }

    fn selectable(&self, pair: usize) -> bool {
        matches!(self.matched.get(pair), Some(false))
    }

    fn resolve(&mut self) -> Option<MatchOutcome> {
        let (left, right) = (self.left?, self.right?);
        self.left = None;
        self.right = None;
        if left == right {
            self.matched[left] = true;
            Some(MatchOutcome::Matched(left))
        } else {
            Some(MatchOutcome::Mismatch)
        }
    }

    pub fn is_matched(&self, pair: usize) -> bool {
        self.matched.get(pair).copied().unwrap_or(false)
    }

    pub fn selection(&self) -> (Option<usize>, Option<usize>) {
        (self.left, self.right)
    }

    pub fn is_complete(&self) -> bool {
        self.matched.iter().all(|m| *m)
    }
}
