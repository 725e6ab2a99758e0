//! Layout construction errors.

use emono_core::{Corner, GeometryError};
use std::error::Error;
use std::fmt;

/// Errors detected by [`BoardLayout::new`](crate::BoardLayout::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The number of spaces does not form a valid square track.
    Geometry(GeometryError),
    /// A descriptor's index disagrees with its position in the sequence.
    IndexMismatch {
        /// Position in the sequence.
        position: usize,
        /// Index stored on the descriptor.
        found: u32,
    },
    /// A corner kind appears away from its fixed corner index.
    MisplacedCorner {
        /// The corner the descriptor's kind belongs to.
        corner: Corner,
        /// Where it was found.
        position: usize,
    },
    /// A tax or fee space charges a negative amount.
    NegativeFee {
        /// Position of the space.
        position: usize,
        /// The rejected fee.
        fee: i32,
    },
    /// The fixed corner index holds something other than its corner kind.
    MissingCorner {
        /// The corner that is absent.
        corner: Corner,
        /// The index where it was expected.
        expected_at: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "geometry: {e}"),
            Self::IndexMismatch { position, found } => {
                write!(f, "space at position {position} carries index {found}")
            }
            Self::MisplacedCorner { corner, position } => {
                write!(f, "{corner:?} corner found at non-corner position {position}")
            }
            Self::NegativeFee { position, fee } => {
                write!(f, "space at position {position} charges negative fee {fee}")
            }
            Self::MissingCorner { corner, expected_at } => {
                write!(f, "{corner:?} corner missing from index {expected_at}")
            }
        }
    }
}

impl Error for LayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeometryError> for LayoutError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}
