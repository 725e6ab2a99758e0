//! Board layout for the emono board game.
//!
//! [`BoardLayout`] owns the ordered sequence of [`SpaceDescriptor`]s and
//! answers read-only queries over it: by index, by kind, by color group,
//! card-draw spaces and corners. A layout is validated once at construction
//! and never mutated; share it by reference.
//!
//! ```
//! use emono_board::{BoardLayout, SpaceKind};
//!
//! let layout = BoardLayout::standard();
//! assert_eq!(layout.size(), 40);
//! assert_eq!(layout.space_at(30).unwrap().kind(), SpaceKind::SendToDetentionCorner);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod space;
pub mod standard;

pub use error::LayoutError;
pub use layout::BoardLayout;
pub use space::{CardDeck, ColorGroup, SpaceDescriptor, SpaceFeature, SpaceKind};
pub use standard::{standard_spaces, PASS_START_BONUS};
