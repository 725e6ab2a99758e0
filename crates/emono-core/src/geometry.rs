//! Board geometry: track length, grid side, and corner positions.
//!
//! A square ring of side `n` has `4 * (n - 1)` cells, so the track length
//! fixes the grid side. The standard board has 40 spaces on an 11x11 grid,
//! with a corner every 10 spaces.

use crate::error::{BoardError, GeometryError};
use crate::id::BoardIndex;
use serde::{Deserialize, Serialize};

/// Number of spaces on the standard board.
pub const BOARD_SIZE: usize = 40;

/// Side length of the standard render grid.
pub const GRID_SIDE: u32 = 11;

/// The four corner spaces, in track order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Corner {
    /// Index 0: the start space.
    Start,
    /// One quarter of the way round: the detention corner ("just visiting").
    Detention,
    /// Half way round: the safe corner.
    Safe,
    /// Three quarters of the way round: sends the player to detention.
    SendToDetention,
}

impl Corner {
    /// All corners in ascending index order.
    pub const ALL: [Corner; 4] = [
        Corner::Start,
        Corner::Detention,
        Corner::Safe,
        Corner::SendToDetention,
    ];

    /// Which quarter of the track this corner opens (0..4).
    pub const fn quarter(self) -> u32 {
        match self {
            Corner::Start => 0,
            Corner::Detention => 1,
            Corner::Safe => 2,
            Corner::SendToDetention => 3,
        }
    }
}

/// Validated track length and grid side.
///
/// # Examples
///
/// ```
/// use emono_core::{BoardGeometry, Corner};
///
/// let g = BoardGeometry::standard();
/// assert_eq!(g.board_size(), 40);
/// assert_eq!(g.grid_side(), 11);
/// assert_eq!(g.corner_index(Corner::Safe).get(), 20);
///
/// // A 10x10 grid only has 36 perimeter cells.
/// assert!(BoardGeometry::with_grid(40, 10).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry")]
pub struct BoardGeometry {
    board_size: u32,
    grid_side: u32,
}

impl BoardGeometry {
    /// The standard 40-space board on an 11x11 grid.
    pub const fn standard() -> Self {
        Self {
            board_size: BOARD_SIZE as u32,
            grid_side: GRID_SIDE,
        }
    }

    /// Geometry for a track of `board_size` spaces, deriving the grid side.
    pub fn new(board_size: usize) -> Result<Self, GeometryError> {
        if board_size < 4 {
            return Err(GeometryError::TooSmall { board_size });
        }
        if board_size % 4 != 0 {
            return Err(GeometryError::NotDivisibleByFour { board_size });
        }
        let size = u32::try_from(board_size)
            .map_err(|_| GeometryError::TooLarge { board_size })?;
        Ok(Self {
            board_size: size,
            grid_side: size / 4 + 1,
        })
    }

    /// Geometry with an explicit grid side, checked against the track length.
    pub fn with_grid(board_size: usize, grid_side: u32) -> Result<Self, GeometryError> {
        let geometry = Self::new(board_size)?;
        if geometry.grid_side != grid_side {
            return Err(GeometryError::GridMismatch {
                board_size,
                grid_side,
                expected: geometry.grid_side,
            });
        }
        Ok(geometry)
    }

    /// Number of spaces on the track.
    pub fn board_size(&self) -> usize {
        self.board_size as usize
    }

    /// Side length of the square render grid.
    pub fn grid_side(&self) -> u32 {
        self.grid_side
    }

    /// Spaces from one corner to the next.
    pub fn edge_len(&self) -> u32 {
        self.board_size / 4
    }

    /// Validate a caller-supplied index against this board.
    pub fn index(&self, raw: impl Into<i64>) -> Result<BoardIndex, BoardError> {
        BoardIndex::checked(raw, self.board_size())
    }

    /// Track index of `corner`.
    pub fn corner_index(&self, corner: Corner) -> BoardIndex {
        BoardIndex::new(corner.quarter() * self.edge_len())
    }

    /// All four corner indices, ascending.
    pub fn corner_indices(&self) -> [BoardIndex; 4] {
        Corner::ALL.map(|c| self.corner_index(c))
    }

    /// The corner at `index`, if any.
    pub fn corner_at(&self, index: BoardIndex) -> Option<Corner> {
        let i = index.get();
        if i >= self.board_size || i % self.edge_len() != 0 {
            return None;
        }
        Corner::ALL.get((i / self.edge_len()) as usize).copied()
    }
}

/// Unvalidated wire form of [`BoardGeometry`].
#[derive(Deserialize)]
struct RawGeometry {
    board_size: u32,
    grid_side: u32,
}

impl TryFrom<RawGeometry> for BoardGeometry {
    type Error = GeometryError;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        Self::with_grid(raw.board_size as usize, raw.grid_side)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::standard()
    }
}
