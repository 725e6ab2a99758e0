//! Space descriptors and their tagged kinds.
//!
//! Each space carries a [`SpaceFeature`] holding only the data meaningful for
//! its kind: a property has a color group and price, a tax has a fee, a card
//! space names its deck, corners carry nothing. [`SpaceKind`] is the
//! fieldless tag used for grouping queries.

use emono_core::{BoardIndex, Corner};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color group of a property. Properties sharing a group form a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorGroup {
    /// First group after start.
    Purple,
    /// Second group.
    LightBlue,
    /// First group after the detention corner.
    Pink,
    /// Fourth group.
    Orange,
    /// First group after the safe corner.
    Red,
    /// Sixth group.
    Yellow,
    /// First group after the send-to-detention corner.
    Green,
    /// Last group before start.
    DarkBlue,
}

impl ColorGroup {
    /// All groups in board order.
    pub const ALL: [ColorGroup; 8] = [
        ColorGroup::Purple,
        ColorGroup::LightBlue,
        ColorGroup::Pink,
        ColorGroup::Orange,
        ColorGroup::Red,
        ColorGroup::Yellow,
        ColorGroup::Green,
        ColorGroup::DarkBlue,
    ];
}

/// Deck drawn from when landing on a card space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardDeck {
    /// Intimate challenges.
    Intimate,
    /// Passion challenges.
    Passion,
    /// Steamy challenges.
    Steamy,
    /// Voyeur challenges.
    Voyeur,
    /// Special challenges of any heat.
    Special,
}

/// What a space is, with the data that kind of space carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpaceFeature {
    /// The start corner. `pass_bonus` is awarded each time a move crosses it.
    Start {
        /// Points awarded for passing or landing on start.
        pass_bonus: i32,
    },
    /// A purchasable property.
    Property {
        /// Set the property belongs to.
        color: ColorGroup,
        /// Purchase price.
        price: i32,
    },
    /// A fee charged on landing.
    TaxOrFee {
        /// Points deducted.
        fee: i32,
    },
    /// A transit venue (railroad equivalent).
    TransitWay {
        /// Purchase price.
        price: i32,
    },
    /// A utility-style action space.
    UtilityAction {
        /// Purchase price.
        price: i32,
    },
    /// Draw a card from `deck`.
    CardDraw {
        /// Deck to draw from.
        deck: CardDeck,
    },
    /// Detention corner; only a penalty when sent here.
    DetentionCorner,
    /// Safe corner; nothing happens.
    SafeCorner,
    /// Sends the player straight to the detention corner.
    SendToDetentionCorner,
}

/// Fieldless tag for a [`SpaceFeature`], used by grouping queries.
///
/// Card spaces keep their deck, so `CardDraw(Passion)` and
/// `CardDraw(Steamy)` are different kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceKind {
    /// See [`SpaceFeature::Start`].
    Start,
    /// See [`SpaceFeature::Property`].
    Property,
    /// See [`SpaceFeature::TaxOrFee`].
    TaxOrFee,
    /// See [`SpaceFeature::TransitWay`].
    TransitWay,
    /// See [`SpaceFeature::UtilityAction`].
    UtilityAction,
    /// See [`SpaceFeature::CardDraw`].
    CardDraw(CardDeck),
    /// See [`SpaceFeature::DetentionCorner`].
    DetentionCorner,
    /// See [`SpaceFeature::SafeCorner`].
    SafeCorner,
    /// See [`SpaceFeature::SendToDetentionCorner`].
    SendToDetentionCorner,
}

impl SpaceKind {
    /// The corner this kind must occupy, if it is a corner kind.
    pub fn corner(self) -> Option<Corner> {
        match self {
            SpaceKind::Start => Some(Corner::Start),
            SpaceKind::DetentionCorner => Some(Corner::Detention),
            SpaceKind::SafeCorner => Some(Corner::Safe),
            SpaceKind::SendToDetentionCorner => Some(Corner::SendToDetention),
            _ => None,
        }
    }

    /// Whether this is a card-draw kind of any deck.
    pub fn is_card_draw(self) -> bool {
        matches!(self, SpaceKind::CardDraw(_))
    }
}

impl SpaceFeature {
    /// The fieldless tag of this feature.
    pub fn kind(&self) -> SpaceKind {
        match self {
            SpaceFeature::Start { .. } => SpaceKind::Start,
            SpaceFeature::Property { .. } => SpaceKind::Property,
            SpaceFeature::TaxOrFee { .. } => SpaceKind::TaxOrFee,
            SpaceFeature::TransitWay { .. } => SpaceKind::TransitWay,
            SpaceFeature::UtilityAction { .. } => SpaceKind::UtilityAction,
            SpaceFeature::CardDraw { deck } => SpaceKind::CardDraw(*deck),
            SpaceFeature::DetentionCorner => SpaceKind::DetentionCorner,
            SpaceFeature::SafeCorner => SpaceKind::SafeCorner,
            SpaceFeature::SendToDetentionCorner => SpaceKind::SendToDetentionCorner,
        }
    }
}

/// One space on the board. Immutable once part of a layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceDescriptor {
    /// Position on the track.
    pub index: BoardIndex,
    /// Display name.
    pub name: String,
    /// Kind and kind-specific data.
    #[serde(flatten)]
    pub feature: SpaceFeature,
    /// Optional flavour text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SpaceDescriptor {
    /// Create a descriptor without description text.
    pub fn new(index: u32, name: impl Into<String>, feature: SpaceFeature) -> Self {
        Self {
            index: BoardIndex::new(index),
            name: name.into(),
            feature,
            description: None,
        }
    }

    /// Attach description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The fieldless kind tag.
    pub fn kind(&self) -> SpaceKind {
        self.feature.kind()
    }

    /// Color group; only properties have one.
    pub fn color_group(&self) -> Option<ColorGroup> {
        match self.feature {
            SpaceFeature::Property { color, .. } => Some(color),
            _ => None,
        }
    }

    /// Signed point value: the start bonus, a purchase price, or a negative fee.
    ///
    /// `None` for card spaces, the three non-start corners, and a fee whose
    /// negation does not fit in `i32`.
    pub fn point_value(&self) -> Option<i32> {
        match self.feature {
            SpaceFeature::Start { pass_bonus } => Some(pass_bonus),
            SpaceFeature::Property { price, .. }
            | SpaceFeature::TransitWay { price }
            | SpaceFeature::UtilityAction { price } => Some(price),
            SpaceFeature::TaxOrFee { fee } => fee.checked_neg(),
            SpaceFeature::CardDraw { .. }
            | SpaceFeature::DetentionCorner
            | SpaceFeature::SafeCorner
            | SpaceFeature::SendToDetentionCorner => None,
        }
    }
}

impl fmt::Display for SpaceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2} {} ({:?})", self.index, self.name, self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(color: ColorGroup) -> SpaceDescriptor {
        SpaceDescriptor::new(1, "Dark Aesthetic Dive", SpaceFeature::Property { color, price: 60 })
    }

    #[test]
    fn only_properties_have_color() {
        assert_eq!(property(ColorGroup::Purple).color_group(), Some(ColorGroup::Purple));
        let tax = SpaceDescriptor::new(4, "Tax", SpaceFeature::TaxOrFee { fee: 200 });
        assert_eq!(tax.color_group(), None);
    }

    #[test]
    fn point_values_by_kind() {
        let start = SpaceDescriptor::new(0, "Start", SpaceFeature::Start { pass_bonus: 200 });
        let tax = SpaceDescriptor::new(4, "Tax", SpaceFeature::TaxOrFee { fee: 200 });
        let card = SpaceDescriptor::new(
            2,
            "Card",
            SpaceFeature::CardDraw {
                deck: CardDeck::Intimate,
            },
        );
        let safe = SpaceDescriptor::new(20, "Safe", SpaceFeature::SafeCorner);
        assert_eq!(start.point_value(), Some(200));
        assert_eq!(property(ColorGroup::Purple).point_value(), Some(60));
        assert_eq!(tax.point_value(), Some(-200));
        assert_eq!(card.point_value(), None);
        assert_eq!(safe.point_value(), None);
    }

    #[test]
    fn unnegatable_fee_has_no_point_value() {
        let tax = SpaceDescriptor::new(4, "Tax", SpaceFeature::TaxOrFee { fee: i32::MIN });
        assert_eq!(tax.point_value(), None);
        let max = SpaceDescriptor::new(4, "Tax", SpaceFeature::TaxOrFee { fee: i32::MAX });
        assert_eq!(max.point_value(), Some(-i32::MAX));
    }

    #[test]
    fn card_kind_keeps_deck() {
        let f = SpaceFeature::CardDraw {
            deck: CardDeck::Voyeur,
        };
        assert_eq!(f.kind(), SpaceKind::CardDraw(CardDeck::Voyeur));
        assert!(f.kind().is_card_draw());
        assert_ne!(f.kind(), SpaceKind::CardDraw(CardDeck::Passion));
    }

    #[test]
    fn corner_kinds_name_their_corner() {
        assert_eq!(SpaceKind::Start.corner(), Some(Corner::Start));
        assert_eq!(SpaceKind::DetentionCorner.corner(), Some(Corner::Detention));
        assert_eq!(SpaceKind::SafeCorner.corner(), Some(Corner::Safe));
        assert_eq!(
            SpaceKind::SendToDetentionCorner.corner(),
            Some(Corner::SendToDetention)
        );
        assert_eq!(SpaceKind::Property.corner(), None);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(property(ColorGroup::LightBlue)).unwrap();
        assert_eq!(json["type"], "property");
        assert_eq!(json["color"], "light_blue");
        assert_eq!(json["index"], 1);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn deserializes_corner_with_description() {
        let json = r#"{"index":20,"name":"Mercury Retrograde Parking","type":"safe_corner","description":"Free Parking"}"#;
        let s: SpaceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(s.kind(), SpaceKind::SafeCorner);
        assert_eq!(s.description.as_deref(), Some("Free Parking"));
    }
}
