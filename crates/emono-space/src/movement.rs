//! Movement arithmetic on the track.
//!
//! All functions take the [`BoardGeometry`] explicitly so they never assume
//! a board size of their own. Step counts are `u32` and the sum is formed in
//! `u64`, so any count is valid, including several laps at once.

use emono_core::{BoardError, BoardGeometry, BoardIndex};
use serde::{Deserialize, Serialize};

/// Outcome of a move. Produced fresh per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    /// Where the token ends up.
    pub new_index: BoardIndex,
    /// Whether the cumulative displacement reached or crossed the start line.
    pub passed_start: bool,
    /// How many times the start line was crossed (0 when `!passed_start`).
    pub laps: u32,
}

impl MoveResult {
    fn stay(index: BoardIndex) -> Self {
        Self {
            new_index: index,
            passed_start: false,
            laps: 0,
        }
    }
}

/// Move `steps` spaces forward from `current`.
///
/// `new_index = (current + steps) mod size`; `passed_start` is true iff
/// `current + steps >= size`. Fails with `OutOfRange` when `current` is not
/// on the board.
///
/// # Examples
///
/// ```
/// use emono_core::BoardGeometry;
/// use emono_space::advance;
///
/// let g = BoardGeometry::standard();
/// let m = advance(&g, 37, 5).unwrap();
/// assert_eq!(m.new_index.get(), 2);
/// assert!(m.passed_start);
///
/// // A full lap lands where it started but still passes start.
/// let lap = advance(&g, 0, 40).unwrap();
/// assert_eq!(lap.new_index.get(), 0);
/// assert!(lap.passed_start);
/// ```
pub fn advance(
    geometry: &BoardGeometry,
    current: impl Into<i64>,
    steps: u32,
) -> Result<MoveResult, BoardError> {
    let current = geometry.index(current)?;
    let size = geometry.board_size() as u64;
    let total = u64::from(current.get()) + u64::from(steps);
    // total < 2^33 and size >= 4, so both results fit in u32.
    let laps = (total / size) as u32;
    let new_index = BoardIndex::new((total % size) as u32);
    if laps > 0 {
        log::trace!("move {current} + {steps} -> {new_index} passed start {laps}x");
    }
    Ok(MoveResult {
        new_index,
        passed_start: laps > 0,
        laps,
    })
}

/// Forward distance from `from` to `to`, in `[0, size)`.
pub fn steps_between(
    geometry: &BoardGeometry,
    from: impl Into<i64>,
    to: impl Into<i64>,
) -> Result<u32, BoardError> {
    let from = u64::from(geometry.index(from)?.get());
    let to = u64::from(geometry.index(to)?.get());
    let size = geometry.board_size() as u64;
    Ok(((to + size - from) % size) as u32)
}

/// Move forward from `current` until reaching `target`.
///
/// Used for effects like "advance to start": passing the start line on the
/// way counts as passing start. Moving to the current space is a no-op.
pub fn advance_to(
    geometry: &BoardGeometry,
    current: impl Into<i64>,
    target: impl Into<i64>,
) -> Result<MoveResult, BoardError> {
    let current = geometry.index(current)?;
    let steps = steps_between(geometry, current, target)?;
    advance(geometry, current, steps)
}

/// Place a token directly on `target` without travelling.
///
/// Never passes start. This is the shape of a send-to-detention move; the
/// caller decides when it applies.
pub fn relocate(
    geometry: &BoardGeometry,
    target: impl Into<i64>,
) -> Result<MoveResult, BoardError> {
    Ok(MoveResult::stay(geometry.index(target)?))
}
