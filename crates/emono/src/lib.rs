//! emono: board data and movement arithmetic for a 40-space perimeter board
//! game.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! emono sub-crates and bundles the layout and perimeter map into a single
//! [`Board`]. A game engine calls [`Board::land`] with the current index and
//! a roll, then decides the consequences from the returned [`Landing`]:
//! the passed-start bonus, card draws, the send-to-detention redirect.
//!
//! # Quick start
//!
//! ```rust
//! use emono::prelude::*;
//!
//! let board = Board::standard();
//! let landing = board.land(37, 5).unwrap();
//! assert_eq!(landing.movement.new_index.get(), 2);
//! assert!(landing.movement.passed_start);
//! assert_eq!(landing.space.kind(), SpaceKind::CardDraw(CardDeck::Intimate));
//! assert_eq!(landing.coord, GridCoord::new(10, 8));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `emono-core` | Indices, coordinates, geometry, errors |
//! | [`board`] | `emono-board` | Space descriptors and the board layout |
//! | [`space`] | `emono-space` | Perimeter mapping and movement |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`emono-core`).
pub use emono_core as types;

/// Space descriptors and the board layout (`emono-board`).
pub use emono_board as board;

/// Perimeter mapping and movement arithmetic (`emono-space`).
pub use emono_space as space;

pub mod dice;
pub mod game_board;

pub use dice::DiceRoll;
pub use game_board::{Board, Landing};

/// Common imports for engine and renderer code.
pub mod prelude {
    pub use crate::dice::DiceRoll;
    pub use crate::game_board::{Board, Landing};
    pub use emono_board::{
        BoardLayout, CardDeck, ColorGroup, SpaceDescriptor, SpaceFeature, SpaceKind,
    };
    pub use emono_core::{BoardError, BoardGeometry, BoardIndex, Corner, GridCoord};
    pub use emono_space::{MoveResult, PerimeterMap};
}
