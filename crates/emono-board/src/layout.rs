//! The validated, read-only board layout.

use crate::error::LayoutError;
use crate::space::{ColorGroup, SpaceDescriptor, SpaceFeature, SpaceKind};
use crate::standard::standard_spaces;
use emono_core::{BoardError, BoardGeometry, Corner};
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

/// Ordered sequence of spaces with grouping queries.
///
/// Construction validates the corner invariants (start at 0, detention at
/// size/4, safe at size/2, send-to-detention at 3·size/4, each exactly once)
/// that every descriptor's index equals its position, and that no fee is
/// negative. After that the
/// layout is immutable, and all queries return spaces in ascending index
/// order.
///
/// # Examples
///
/// ```
/// use emono_board::{BoardLayout, ColorGroup, SpaceKind};
///
/// let layout = BoardLayout::standard();
/// let greens: Vec<u32> = layout
///     .spaces_of_color(ColorGroup::Green)
///     .iter()
///     .map(|s| s.index.get())
///     .collect();
/// assert_eq!(greens, vec![31, 32, 34]);
///
/// assert!(layout.space_at(-1).is_err());
/// assert!(layout.spaces_of_kind(SpaceKind::Property).len() > 0);
/// ```
#[derive(Clone, Debug)]
pub struct BoardLayout {
    spaces: Vec<SpaceDescriptor>,
    geometry: BoardGeometry,
    by_color: IndexMap<ColorGroup, SmallVec<[usize; 4]>>,
}

impl BoardLayout {
    /// Validate `spaces` and build the layout.
    pub fn new(spaces: Vec<SpaceDescriptor>) -> Result<Self, LayoutError> {
        let geometry = BoardGeometry::new(spaces.len()).inspect_err(|e| {
            log::warn!("rejected board layout: {e}");
        })?;
        validate(&spaces, &geometry).inspect_err(|e| {
            log::warn!("rejected board layout: {e}");
        })?;
        log::debug!(
            "board layout ready: {} spaces on a {}x{} grid",
            geometry.board_size(),
            geometry.grid_side(),
            geometry.grid_side()
        );
        Ok(Self::assemble(spaces, geometry))
    }

    /// The standard 40-space board.
    pub fn standard() -> Self {
        Self::assemble(standard_spaces(), BoardGeometry::standard())
    }

    fn assemble(spaces: Vec<SpaceDescriptor>, geometry: BoardGeometry) -> Self {
        let mut by_color: IndexMap<ColorGroup, SmallVec<[usize; 4]>> = IndexMap::new();
        for (i, space) in spaces.iter().enumerate() {
            if let Some(color) = space.color_group() {
                by_color.entry(color).or_default().push(i);
            }
        }
        Self {
            spaces,
            geometry,
            by_color,
        }
    }

    /// Number of spaces. All modulo arithmetic must use this value.
    pub fn size(&self) -> usize {
        self.spaces.len()
    }

    /// Geometry implied by the board size.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// All spaces in index order.
    pub fn spaces(&self) -> &[SpaceDescriptor] {
        &self.spaces
    }

    /// Iterate spaces in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, SpaceDescriptor> {
        self.spaces.iter()
    }

    /// The space at `index`.
    ///
    /// Returns `Err(BoardError::OutOfRange)` when `index < 0` or
    /// `index >= size()`; never clamps.
    pub fn space_at(&self, index: impl Into<i64>) -> Result<&SpaceDescriptor, BoardError> {
        let index = self.geometry.index(index)?;
        Ok(&self.spaces[index.as_usize()])
    }

    /// Spaces of exactly `kind`, ascending. Empty when nothing matches.
    pub fn spaces_of_kind(&self, kind: SpaceKind) -> Vec<&SpaceDescriptor> {
        self.spaces.iter().filter(|s| s.kind() == kind).collect()
    }

    /// Properties in `color`, ascending. Empty for an unused group.
    pub fn spaces_of_color(&self, color: ColorGroup) -> Vec<&SpaceDescriptor> {
        self.by_color
            .get(&color)
            .map(|positions| positions.iter().map(|&i| &self.spaces[i]).collect())
            .unwrap_or_default()
    }

    /// Card-draw spaces of every deck, ascending.
    pub fn card_draw_spaces(&self) -> Vec<&SpaceDescriptor> {
        self.spaces
            .iter()
            .filter(|s| s.kind().is_card_draw())
            .collect()
    }

    /// The four corner spaces, ascending.
    pub fn corner_spaces(&self) -> Vec<&SpaceDescriptor> {
        self.geometry
            .corner_indices()
            .iter()
            .map(|i| &self.spaces[i.as_usize()])
            .collect()
    }

    /// Distinct kinds present, in order of first appearance.
    pub fn kinds(&self) -> Vec<SpaceKind> {
        self.spaces
            .iter()
            .map(SpaceDescriptor::kind)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct color groups present, in order of first appearance.
    pub fn color_groups(&self) -> Vec<ColorGroup> {
        self.by_color.keys().copied().collect()
    }
}

impl<'a> IntoIterator for &'a BoardLayout {
    type Item = &'a SpaceDescriptor;
    type IntoIter = std::slice::Iter<'a, SpaceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.spaces.iter()
    }
}

fn validate(spaces: &[SpaceDescriptor], geometry: &BoardGeometry) -> Result<(), LayoutError> {
    for (position, space) in spaces.iter().enumerate() {
        if space.index.as_usize() != position {
            return Err(LayoutError::IndexMismatch {
                position,
                found: space.index.get(),
            });
        }
        if let SpaceFeature::TaxOrFee { fee } = space.feature {
            if fee < 0 {
                return Err(LayoutError::NegativeFee { position, fee });
            }
        }
        if let Some(corner) = space.kind().corner() {
            if geometry.corner_index(corner).as_usize() != position {
                return Err(LayoutError::MisplacedCorner { corner, position });
            }
        }
    }
    for corner in Corner::ALL {
        let expected_at = geometry.corner_index(corner).as_usize();
        if spaces[expected_at].kind().corner() != Some(corner) {
            return Err(LayoutError::MissingCorner {
                corner,
                expected_at,
            });
        }
    }
    Ok(())
}
