/// A deck showing one card at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardDeck {
    len: usize,
    current: usize,
    flipped: bool,
}

impl FlashcardDeck {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            flipped: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        if self.len > 0 {
            self.flipped = !self.flipped;
        }
    }

    /// Move by `delta` cards with wraparound; the new card shows its front
    pub fn step(&mut self, delta: i64) {
        if self.len == 0 {
            return;
        }
        let len = self.len as i64;
        self.current = (self.current as i64 + delta).rem_euclid(len) as usize;
        self.flipped = false;
    }

    /// `current / total`, 1-based
    pub fn counter(&self) -> String {
        if self.len == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound_both_ways() {
        let mut deck = FlashcardDeck::new(3);
        deck.step(-1);
        assert_eq!(deck.current(), 2);
        deck.step(1);
        assert_eq!(deck.current(), 0);
        assert_eq!(deck.counter(), "1 / 3");
    }

    #[test]
    fn test_navigation_resets_flip() {
        let mut deck = FlashcardDeck::new(2);
        deck.flip();
        assert!(deck.is_flipped());
        deck.step(1);
        assert!(!deck.is_flipped());
    }

    #[test]
    fn test_empty_deck_is_inert() {
        let mut deck = FlashcardDeck::new(0);
        deck.flip();
        deck.step(1);
        assert!(!deck.is_flipped());
        assert_eq!(deck.counter(), "0 / 0");
    }
}
