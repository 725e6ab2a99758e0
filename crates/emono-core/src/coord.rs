//! Grid coordinates on the rendered board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell of the square render grid, `[row, col]` with row 0 at the top.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridCoord {
    /// Row, counted from the top edge.
    pub row: u32,
    /// Column, counted from the left edge.
    pub col: u32,
}

impl GridCoord {
    /// Create a coordinate.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether this cell lies on the outer ring of a `side x side` grid.
    pub fn is_on_perimeter(self, side: u32) -> bool {
        if side == 0 || self.row >= side || self.col >= side {
            return false;
        }
        let last = side - 1;
        self.row == 0 || self.col == 0 || self.row == last || self.col == last
    }
}

impl From<(u32, u32)> for GridCoord {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}
