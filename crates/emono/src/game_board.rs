//! The layout and perimeter map bundled for engine use.

use crate::dice::DiceRoll;
use emono_board::{BoardLayout, SpaceDescriptor};
use emono_core::{BoardError, BoardGeometry, GridCoord};
use emono_space::{MoveResult, PerimeterMap};
use rand::Rng;
use serde::Serialize;

/// Everything an engine needs after a move: where the token went, what is
/// there, and where to draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Landing<'a> {
    /// The movement outcome, including the passed-start flag.
    pub movement: MoveResult,
    /// Descriptor of the space landed on.
    pub space: &'a SpaceDescriptor,
    /// Render-grid cell of the space landed on.
    pub coord: GridCoord,
}

/// A [`BoardLayout`] and the [`PerimeterMap`] of the same geometry.
///
/// Construct once and share by reference; nothing here mutates.
#[derive(Clone, Debug)]
pub struct Board {
    layout: BoardLayout,
    perimeter: PerimeterMap,
}

impl Board {
    /// The standard 40-space board.
    pub fn standard() -> Self {
        Self::new(BoardLayout::standard())
    }

    /// Pair `layout` with a perimeter map built from its geometry.
    pub fn new(layout: BoardLayout) -> Self {
        let perimeter = PerimeterMap::new(layout.geometry());
        Self { layout, perimeter }
    }

    /// The space layout.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// The index ⇄ grid mapping.
    pub fn perimeter(&self) -> &PerimeterMap {
        &self.perimeter
    }

    /// Shared geometry of both halves.
    pub fn geometry(&self) -> BoardGeometry {
        self.layout.geometry()
    }

    /// Number of spaces.
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Move `steps` forward from `current` and look up the destination.
    pub fn land(&self, current: impl Into<i64>, steps: u32) -> Result<Landing<'_>, BoardError> {
        let movement = self.perimeter.advance(current, steps)?;
        self.landing(movement)
    }

    /// Roll two dice with `rng`, then [`land`](Self::land) on the total.
    pub fn roll_and_land<R: Rng>(
        &self,
        current: impl Into<i64>,
        rng: &mut R,
    ) -> Result<(DiceRoll, Landing<'_>), BoardError> {
        let roll = DiceRoll::roll(rng);
        let landing = self.land(current, roll.total())?;
        log::debug!(
            "rolled {roll} -> {} ({})",
            landing.movement.new_index,
            landing.space.name
        );
        Ok((roll, landing))
    }

    /// Describe an already computed move, such as a
    /// [`relocate`](PerimeterMap::relocate) to the detention corner.
    pub fn landing(&self, movement: MoveResult) -> Result<Landing<'_>, BoardError> {
        let space = self.layout.space_at(movement.new_index)?;
        let coord = self.perimeter.coordinates_of(movement.new_index)?;
        Ok(Landing {
            movement,
            space,
            coord,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emono_board::SpaceKind;
    use emono_core::{BoardIndex, Corner};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn halves_share_geometry() {
        let board = Board::standard();
        assert_eq!(board.layout().geometry(), board.perimeter().geometry());
        assert_eq!(board.size(), 40);
    }

    #[test]
    fn land_resolves_space_and_cell() {
        let board = Board::standard();
        let landing = board.land(5, 3).unwrap();
        assert_eq!(landing.movement.new_index, BoardIndex::new(8));
        assert!(!landing.movement.passed_start);
        assert_eq!(landing.space.name, "Band Tee Collection");
        assert_eq!(landing.coord, GridCoord::new(10, 2));
    }

    #[test]
    fn land_rejects_off_board() {
        let board = Board::standard();
        assert_eq!(
            board.land(-3, 4).unwrap_err(),
            BoardError::OutOfRange { index: -3, size: 40 }
        );
    }

    #[test]
    fn send_to_detention_redirect() {
        let board = Board::standard();
        let landing = board.land(26, 4).unwrap();
        assert_eq!(landing.space.kind(), SpaceKind::SendToDetentionCorner);

        let detention = board.geometry().corner_index(Corner::Detention);
        let redirected = board
            .landing(board.perimeter().relocate(detention).unwrap())
            .unwrap();
        assert_eq!(redirected.space.kind(), SpaceKind::DetentionCorner);
        assert_eq!(redirected.coord, GridCoord::new(10, 0));
        assert!(!redirected.movement.passed_start);
    }

    #[test]
    fn roll_and_land_is_deterministic_for_a_seed() {
        let board = Board::standard();
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for current in 0..40 {
            let (ra, la) = board.roll_and_land(current, &mut a).unwrap();
            let (rb, lb) = board.roll_and_land(current, &mut b).unwrap();
            assert_eq!(ra, rb);
            assert_eq!(la, lb);
            assert_eq!(la.movement, board.perimeter().advance(current, ra.total()).unwrap());
        }
    }
}
