//! Error types for index checks and geometry construction.

use std::error::Error;
use std::fmt;

/// Errors raised by board queries.
///
/// The only runtime failure of the board core: an index argument outside
/// `[0, size)`. Queries never clamp or substitute a placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// An index lies outside the board.
    OutOfRange {
        /// The rejected index, as supplied by the caller.
        index: i64,
        /// Number of spaces on the board.
        size: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "board index {index} out of range: expected 0..{size}")
            }
        }
    }
}

impl Error for BoardError {}

/// Errors detected while validating a [`BoardGeometry`](crate::BoardGeometry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Fewer than four spaces: there is no room for the corners.
    TooSmall {
        /// The requested board size.
        board_size: usize,
    },
    /// The board size does not split into four equal edges.
    NotDivisibleByFour {
        /// The requested board size.
        board_size: usize,
    },
    /// The board size does not fit the `u32` index type.
    TooLarge {
        /// The requested board size.
        board_size: usize,
    },
    /// The grid side does not produce exactly `board_size` perimeter cells.
    GridMismatch {
        /// The requested board size.
        board_size: usize,
        /// The requested grid side.
        grid_side: u32,
        /// The only grid side whose perimeter holds `board_size` cells.
        expected: u32,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { board_size } => {
                write!(f, "board size {board_size} is below the minimum of 4")
            }
            Self::NotDivisibleByFour { board_size } => {
                write!(f, "board size {board_size} is not a multiple of 4")
            }
            Self::TooLarge { board_size } => {
                write!(f, "board size {board_size} exceeds u32::MAX")
            }
            Self::GridMismatch {
                board_size,
                grid_side,
                expected,
            } => write!(
                f,
                "a {grid_side}x{grid_side} perimeter cannot hold {board_size} spaces \
                 (expected side {expected})"
            ),
        }
    }
}

impl Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_size() {
        let e = BoardError::OutOfRange { index: -1, size: 40 };
        assert_eq!(e.to_string(), "board index -1 out of range: expected 0..40");
    }

    #[test]
    fn grid_mismatch_message_names_expected_side() {
        let e = GeometryError::GridMismatch {
            board_size: 40,
            grid_side: 10,
            expected: 11,
        };
        let msg = e.to_string();
        assert!(msg.contains("10x10"), "{msg}");
        assert!(msg.contains("expected side 11"), "{msg}");
    }
}
