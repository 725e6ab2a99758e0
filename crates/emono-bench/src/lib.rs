//! Input generators shared by the emono benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Every cell of a square grid one cell wider than `side` on each edge, so
/// probes include off-grid misses as well as interior ones.
pub fn probe_cells(side: u32) -> Vec<(i32, i32)> {
    let side = side as i32;
    (-1..=side)
        .flat_map(|r| (-1..=side).map(move |c| (r, c)))
        .collect()
}

/// Deterministic `(current, roll)` pairs for a board of `board_size` spaces.
pub fn move_inputs(seed: u64, board_size: u32, n: usize) -> Vec<(u32, u32)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let current = rng.random_range(0..board_size);
            let roll = rng.random_range(1..=6) + rng.random_range(1..=6);
            (current, roll)
        })
        .collect()
}
