//! Two six-sided dice.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Faces of a six-sided die.
pub const FACES: u8 = 6;

/// One roll of two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    dice: [u8; 2],
}

impl DiceRoll {
    /// Roll both dice with `rng`.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        Self {
            dice: [rng.random_range(1..=FACES), rng.random_range(1..=FACES)],
        }
    }

    /// A specific roll. `None` unless both faces are in `1..=6`.
    pub fn new(first: u8, second: u8) -> Option<Self> {
        let face = 1..=FACES;
        (face.contains(&first) && face.contains(&second)).then_some(Self {
            dice: [first, second],
        })
    }

    /// The two faces.
    pub fn dice(&self) -> [u8; 2] {
        self.dice
    }

    /// Sum of both faces, 2–12.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|&d| u32::from(d)).sum()
    }

    /// Whether both dice show the same face.
    pub fn is_doubles(&self) -> bool {
        self.dice[0] == self.dice[1]
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.dice[0], self.dice[1])
    }
}
