//! Locally simulated poll results.
//!
//! There is no vote store behind an exported artifact. Choosing an option
//! shows a plausible distribution instead: the chosen option weighs 45 and
//! every other option weighs 5..=34, drawn from the seed. The compiler
//! precomputes one row per possible choice, so the artifact only looks rows
//! up.

use crate::seed::draw;

const SELECTED_WEIGHT: u64 = 45;

fn weights(seed: u64, block_id: &str, options: usize, selected: usize) -> Vec<u64> {
    let scope = format!("poll:{block_id}:{selected}");
    (0..options)
        .map(|i| {
            if i == selected {
                SELECTED_WEIGHT
            } else {
                5 + draw(seed, &scope, i as u64) % 30
            }
        })
        .collect()
}

/// Integer percentages for each option when `selected` is chosen.
///
/// Largest-remainder rounding keeps the sum at exactly 100. Empty when there
/// are no options or `selected` is out of range.
pub fn simulate_distribution(seed: u64, block_id: &str, options: usize, selected: usize) -> Vec<u32> {
    if selected >= options {
        return Vec::new();
    }
    let weights = weights(seed, block_id, options, selected);
    let total: u64 = weights.iter().sum();

    let mut shares: Vec<u32> = weights.iter().map(|w| (w * 100 / total) as u32).collect();
    let mut remainders: Vec<(u64, usize)> = weights
        .iter()
        .enumerate()
        .map(|(i, w)| (w * 100 % total, i))
        .collect();
    // largest remainder first, lower index on ties
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    let assigned: u32 = shares.iter().sum();
    for (_, i) in remainders.iter().take((100 - assigned) as usize) {
        shares[*i] += 1;
    }
    shares
}

/// One distribution row per possible choice
pub fn distribution_matrix(seed: u64, block_id: &str, options: usize) -> Vec<Vec<u32>> {
    (0..options)
        .map(|selected| simulate_distribution(seed, block_id, options, selected))
        .collect()
}

/// The reader's current vote; re-voting moves it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    rows: Vec<Vec<u32>>,
    voted: Option<usize>,
}

impl PollState {
    pub fn new(rows: Vec<Vec<u32>>) -> Self {
        Self { rows, voted: None }
    }

    pub fn vote(&mut self, index: usize) -> Option<&[u32]> {
        let row = self.rows.get(index)?;
        self.voted = Some(index);
        Some(row)
    }

    pub fn voted(&self) -> Option<usize> {
        self.voted
    }

    /// Percentages currently displayed; all zero before a vote
    pub fn shown(&self) -> Vec<u32> {
        match self.voted {
            Some(i) => self.rows[i].clone(),
            None => vec![0; self.rows.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sum_to_100_and_favour_selection() {
        for seed in 0..25 {
            for n in 1..7 {
                for selected in 0..n {
                    let row = simulate_distribution(seed, "b1", n, selected);
                    assert_eq!(row.len(), n);
                    assert_eq!(row.iter().sum::<u32>(), 100);
                    let top = *row.iter().max().unwrap();
                    assert_eq!(row[selected], top);
                }
            }
        }
    }

    #[test]
    fn test_single_option_takes_everything() {
        assert_eq!(simulate_distribution(1, "b", 1, 0), vec![100]);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let a = distribution_matrix(9, "poll-1", 4);
        let b = distribution_matrix(9, "poll-1", 4);
        assert_eq!(a, b);
        assert!(simulate_distribution(9, "poll-1", 4, 4).is_empty());
    }

    #[test]
    fn test_revote_switches_row() {
        let mut poll = PollState::new(distribution_matrix(0, "p", 3));
        assert_eq!(poll.shown(), vec![0, 0, 0]);
        poll.vote(1);
        let first = poll.shown();
        poll.vote(2);
        assert_eq!(poll.voted(), Some(2));
        assert_ne!(poll.shown(), first);
        assert!(poll.vote(7).is_none());
        assert_eq!(poll.voted(), Some(2));
    }
}
