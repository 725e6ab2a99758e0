//! The checked [`BoardIndex`] type.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a space on the board track.
///
/// Index 0 is the start space; indices grow in the direction of travel.
/// Values obtained from [`BoardIndex::checked`] are always below the board
/// size they were checked against.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BoardIndex(u32);

impl BoardIndex {
    /// The start space.
    pub const START: Self = Self(0);

    /// Wrap a raw position without a range check.
    ///
    /// Use [`checked`](Self::checked) for caller-supplied values.
    pub const fn new(i: u32) -> Self {
        Self(i)
    }

    /// Validate a caller-supplied index against a board of `size` spaces.
    ///
    /// Accepts any integer convertible to `i64`, so negative probes are
    /// representable and rejected rather than wrapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use emono_core::{BoardError, BoardIndex};
    ///
    /// assert_eq!(BoardIndex::checked(39, 40).unwrap().get(), 39);
    /// assert_eq!(
    ///     BoardIndex::checked(-1, 40),
    ///     Err(BoardError::OutOfRange { index: -1, size: 40 })
    /// );
    /// ```
    pub fn checked(raw: impl Into<i64>, size: usize) -> Result<Self, BoardError> {
        let raw = raw.into();
        match u32::try_from(raw) {
            Ok(i) if (i as usize) < size => Ok(Self(i)),
            _ => {
                log::debug!("rejected board index {raw} on a board of {size} spaces");
                Err(BoardError::OutOfRange { index: raw, size })
            }
        }
    }

    /// The raw position.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The raw position as a slice offset.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BoardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<BoardIndex> for i64 {
    fn from(i: BoardIndex) -> Self {
        i64::from(i.0)
    }
}

impl From<BoardIndex> for usize {
    fn from(i: BoardIndex) -> Self {
        i.as_usize()
    }
}
