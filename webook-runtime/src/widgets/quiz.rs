//! Single-shot quiz.

/// Visual mark on an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Unmarked,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    correct: Vec<bool>,
    picked: Option<usize>,
}

impl QuizState {
    /// `correct[i]` is option i's `isCorrect` flag
    pub fn new(correct: Vec<bool>) -> Self {
        Self {
            correct,
            picked: None,
        }
    }

    /// Pick an option. Returns false when the quiz is already locked or the
    /// index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if self.picked.is_some() || index >= self.correct.len() {
            return false;
        }
        self.picked = Some(index);
        true
    }

    pub fn is_locked(&self) -> bool {
        self.picked.is_some()
    }

    /// Whether the pick was right; `None` before any pick
    pub fn answered_correctly(&self) -> Option<bool> {
        self.picked.map(|i| self.correct[i])
    }

    pub fn marks(&self) -> Vec<Mark> {
        let Some(picked) = self.picked else {
            return vec![Mark::Unmarked; self.correct.len()];
        };
        self.correct
            .iter()
            .enumerate()
            .map(|(i, ok)| {
                if *ok {
                    Mark::Correct
                } else if i == picked {
                    Mark::Wrong
                } else {
                    Mark::Unmarked
                }
            })
            .collect()
    }
}
