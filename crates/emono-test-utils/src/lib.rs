//! Fixture boards for emono tests.
//!
//! [`ring_spaces`] builds a structurally valid track of any size that is a
//! multiple of four: the four corner kinds at their fixed indices and a
//! repeating mix of properties, card spaces, taxes, transit and utilities
//! in between. Use it to exercise layouts other than the standard board.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use emono_board::{BoardLayout, CardDeck, ColorGroup, LayoutError, SpaceDescriptor, SpaceFeature};
use emono_core::{BoardGeometry, Corner};

/// Feature for a non-corner position, cycling through every kind.
fn filler(i: u32) -> SpaceFeature {
    let decks = [
        CardDeck::Intimate,
        CardDeck::Passion,
        CardDeck::Steamy,
        CardDeck::Voyeur,
        CardDeck::Special,
    ];
    match i % 6 {
        0 | 1 => SpaceFeature::Property {
            color: ColorGroup::ALL[(i as usize / 6) % ColorGroup::ALL.len()],
            price: 50 + 10 * i as i32,
        },
        2 => SpaceFeature::CardDraw {
            deck: decks[(i as usize / 6) % decks.len()],
        },
        3 => SpaceFeature::TaxOrFee { fee: 100 },
        4 => SpaceFeature::TransitWay { price: 200 },
        _ => SpaceFeature::UtilityAction { price: 150 },
    }
}

/// A valid descriptor sequence for a `board_size`-space track.
///
/// Panics if `board_size` is not a valid geometry; fixtures are for tests.
pub fn ring_spaces(board_size: usize) -> Vec<SpaceDescriptor> {
    let geometry = match BoardGeometry::new(board_size) {
        Ok(g) => g,
        Err(e) => panic!("fixture board size {board_size}: {e}"),
    };
    (0..board_size as u32)
        .map(|i| {
            let feature = match geometry.corner_at(emono_core::BoardIndex::new(i)) {
                Some(Corner::Start) => SpaceFeature::Start { pass_bonus: 200 },
                Some(Corner::Detention) => SpaceFeature::DetentionCorner,
                Some(Corner::Safe) => SpaceFeature::SafeCorner,
                Some(Corner::SendToDetention) => SpaceFeature::SendToDetentionCorner,
                None => filler(i),
            };
            SpaceDescriptor::new(i, format!("Space {i}"), feature)
        })
        .collect()
}

/// A validated layout built from [`ring_spaces`].
pub fn ring_layout(board_size: usize) -> Result<BoardLayout, LayoutError> {
    BoardLayout::new(ring_spaces(board_size))
}

/// Every valid board size from 4 up to `max`, inclusive.
pub fn valid_sizes(max: usize) -> impl Iterator<Item = usize> {
    (4..=max).step_by(4)
}
