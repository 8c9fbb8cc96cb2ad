//! Seeded pseudo-random draws.
//!
//! Every draw is a blake3 hash of `(seed, scope, index)`, so a value depends
//! only on where it is used and never on the order draws happen in.

use blake3::Hasher;

/// A 64-bit value for position `index` within `scope`
pub fn draw(seed: u64, scope: &str, index: u64) -> u64 {
    let mut hasher = Hasher::new();
    hasher.update(&seed.to_le_bytes());
    hasher.update(&(scope.len() as u64).to_le_bytes());
    hasher.update(scope.as_bytes());
    hasher.update(&index.to_le_bytes());
    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// A deterministic permutation of `0..n`.
///
/// For `n >= 2` the result is never the identity, so a shuffled column
/// always differs from the authored order.
pub fn permutation(seed: u64, scope: &str, n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = (draw(seed, scope, i as u64) % (i as u64 + 1)) as usize;
        order.swap(i, j);
    }
    if n >= 2 && order.iter().enumerate().all(|(i, v)| i == *v) {
        order.rotate_left(1);
    }
    order
}
