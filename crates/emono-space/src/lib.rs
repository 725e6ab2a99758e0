//! Perimeter mapping and movement for the emono board.
//!
//! [`PerimeterMap`] translates between the one-dimensional track index used
//! for movement and the cells of the square render grid, and performs the
//! movement step itself.
//!
//! # Traversal
//!
//! Index 0 sits in the bottom-right corner. Indices run left along the
//! bottom row to the bottom-left corner, up the left column to the top-left
//! corner, right along the top row to the top-right corner, then down the
//! right column back to the start. With row 0 at the top of the screen this
//! is a clockwise loop. On the standard board the corners are
//! 0 → `[10, 10]`, 10 → `[10, 0]`, 20 → `[0, 0]` and 30 → `[0, 10]`.
//!
//! # Movement
//!
//! [`advance`] wraps modulo the board size and reports whether the move
//! crossed the start line, counting the cumulative displacement rather than
//! comparing the old and new index, so an exact lap still counts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod movement;
pub mod perimeter;
pub mod render;

#[cfg(test)]
pub(crate) mod compliance;

pub use movement::{advance, advance_to, relocate, steps_between, MoveResult};
pub use perimeter::PerimeterMap;
pub use render::GridRender;
