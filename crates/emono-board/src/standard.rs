//! The standard 40-space board.
//!
//! Static content: names, prices and flavour text are presentation data.
//! The structural facts the rest of the workspace relies on are the corner
//! positions (0, 10, 20, 30) and the length.

use crate::space::{CardDeck, ColorGroup, SpaceDescriptor, SpaceFeature};

/// Points awarded for passing start.
pub const PASS_START_BONUS: i32 = 200;

const TRANSIT_PRICE: i32 = 200;
const UTILITY_PRICE: i32 = 150;

fn property(index: u32, name: &str, color: ColorGroup, price: i32) -> SpaceDescriptor {
    SpaceDescriptor::new(index, name, SpaceFeature::Property { color, price })
}

fn card(index: u32, name: &str, deck: CardDeck) -> SpaceDescriptor {
    SpaceDescriptor::new(index, name, SpaceFeature::CardDraw { deck })
}

fn transit(index: u32, name: &str) -> SpaceDescriptor {
    SpaceDescriptor::new(
        index,
        name,
        SpaceFeature::TransitWay {
            price: TRANSIT_PRICE,
        },
    )
}

fn utility(index: u32, name: &str) -> SpaceDescriptor {
    SpaceDescriptor::new(
        index,
        name,
        SpaceFeature::UtilityAction {
            price: UTILITY_PRICE,
        },
    )
}

fn tax(index: u32, name: &str, fee: i32) -> SpaceDescriptor {
    SpaceDescriptor::new(index, name, SpaceFeature::TaxOrFee { fee })
}

/// Descriptors of the standard board, in index order.
///
/// Travel runs from start along the bottom edge (1–9), up the left edge
/// (11–19), along the top (21–29) and down the right edge (31–39).
pub fn standard_spaces() -> Vec<SpaceDescriptor> {
    use CardDeck::*;
    use ColorGroup::*;

    vec![
        SpaceDescriptor::new(
            0,
            "First Swipe Right",
            SpaceFeature::Start {
                pass_bonus: PASS_START_BONUS,
            },
        )
        .with_description("Starting space - collect 200 relationship points when passing or landing"),
        // Bottom edge
        property(1, "Dark Aesthetic Dive", Purple, 60),
        card(2, "Intimate Confession", Intimate),
        property(3, "Emo Phase Apartment", Purple, 60),
        tax(4, "Black Nail Polish Tax", 200),
        transit(5, "Warped Tour Memories"),
        property(6, "Thrift Store Fashion", LightBlue, 100),
        card(7, "Passion Rising", Passion),
        property(8, "Band Tee Collection", LightBlue, 100),
        property(9, "Choker Boutique", LightBlue, 120),
        SpaceDescriptor::new(10, "Tarot Reading Corner", SpaceFeature::DetentionCorner)
            .with_description("Just visiting - no penalty unless sent here"),
        // Left edge
        property(11, "Fishnet Fashion", Pink, 140),
        utility(12, "Crystal Energy Co."),
        property(13, "Platform Boot Emporium", Pink, 140),
        property(14, "Vinyl Record Store", Pink, 160),
        transit(15, "Hot Topic Nostalgia"),
        property(16, "Goth Club", Orange, 180),
        card(17, "Steamy Secrets", Steamy),
        property(18, "Tattoo Parlor", Orange, 180),
        property(19, "Piercing Studio", Orange, 200),
        SpaceDescriptor::new(20, "Mercury Retrograde Parking", SpaceFeature::SafeCorner)
            .with_description("Free parking - a safe space"),
        // Top edge
        property(21, "Occult Library", Red, 220),
        card(22, "Voyeur Vision", Voyeur),
        property(23, "Witchy Apothecary", Red, 220),
        property(24, "Spell Components Shop", Red, 240),
        transit(25, "Slam Poetry Night"),
        property(26, "Candlelit Sanctuary", Yellow, 260),
        property(27, "Astrology Readings", Yellow, 260),
        utility(28, "Incense & Vibes"),
        property(29, "Graveyard Picnic Spot", Yellow, 280),
        SpaceDescriptor::new(30, "Shadow Realm", SpaceFeature::SendToDetentionCorner)
            .with_description("Go directly to the Tarot Reading Corner; do not pass start"),
        // Right edge
        property(31, "Haunted Manor", Green, 300),
        property(32, "Black Rose Garden", Green, 300),
        card(33, "Special Connection", Special),
        property(34, "Moonlit Altar", Green, 320),
        transit(35, "Underground Shows"),
        card(36, "Passionate Embrace", Passion),
        property(37, "Punk Concert Venue", DarkBlue, 350),
        tax(38, "Full Moon Ritual Fee", 100),
        property(39, "Coven Headquarters", DarkBlue, 400),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::SpaceKind;

    #[test]
    fn forty_spaces_in_order() {
        let spaces = standard_spaces();
        assert_eq!(spaces.len(), emono_core::BOARD_SIZE);
        for (i, s) in spaces.iter().enumerate() {
            assert_eq!(s.index.as_usize(), i, "{s}");
        }
    }

    #[test]
    fn corners_at_fixed_indices() {
        let spaces = standard_spaces();
        assert_eq!(spaces[0].kind(), SpaceKind::Start);
        assert_eq!(spaces[10].kind(), SpaceKind::DetentionCorner);
        assert_eq!(spaces[20].kind(), SpaceKind::SafeCorner);
        assert_eq!(spaces[30].kind(), SpaceKind::SendToDetentionCorner);
    }

    #[test]
    fn each_color_group_is_a_set_of_two_or_three() {
        let spaces = standard_spaces();
        for color in ColorGroup::ALL {
            let n = spaces
                .iter()
                .filter(|s| s.color_group() == Some(color))
                .count();
            assert!((2..=3).contains(&n), "{color:?} has {n} properties");
        }
    }

    #[test]
    fn start_bonus_is_point_value_of_start() {
        assert_eq!(standard_spaces()[0].point_value(), Some(PASS_START_BONUS));
    }
}
