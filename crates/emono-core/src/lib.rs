//! Core types for the emono board.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the layout and perimeter crates: the checked
//! [`BoardIndex`], the perimeter [`GridCoord`], the [`BoardGeometry`] that ties
//! the track length to the grid side, and the error types raised when an
//! index or geometry is rejected.
//!
//! The layout crate (`emono-board`) and the perimeter crate (`emono-space`)
//! depend only on this crate, never on each other.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod geometry;
pub mod id;

pub use coord::GridCoord;
pub use error::{BoardError, GeometryError};
pub use geometry::{BoardGeometry, Corner, BOARD_SIZE, GRID_SIDE};
pub use id::BoardIndex;
