//! Dice pool with per-die hold flags.
//!
//! A [`DiceSet`] always holds exactly [`DICE_COUNT`] dice and every face is
//! confined to 1..=6. Faces change only through [`DiceSet::roll`], which
//! skips held dice, so a snapshot of `values()` is stable between rolls.

use rand::Rng;

use crate::error::{GameError, Result};

/// Number of dice on the table.
pub const DICE_COUNT: usize = 5;

/// Smallest and largest legal face.
pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;

/// A single die: a face value plus a hold flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Die {
    value: u8,
    held: bool,
}

impl Die {
    fn rolled(rng: &mut impl Rng) -> Self {
        Self {
            value: rng.gen_range(MIN_FACE..=MAX_FACE),
            held: false,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// The five table dice, in display order.
///
/// Ordering matters only for display and for the 1-based hold indices the
/// player types; scoring treats the faces as a multiset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiceSet {
    dice: [Die; DICE_COUNT],
}

impl DiceSet {
    /// Creates a set with every die freshly rolled and nothing held.
    pub fn roll_new(rng: &mut impl Rng) -> Self {
        Self {
            dice: std::array::from_fn(|_| Die::rolled(rng)),
        }
    }

    /// Rebuilds a set from raw face values, e.g. when restoring a save.
    ///
    /// Fails with [`GameError::InvalidFace`] if any value falls outside
    /// 1..=6; no partially built set is ever produced.
    pub fn from_values(values: [u8; DICE_COUNT]) -> Result<Self> {
        for &value in &values {
            if !(MIN_FACE..=MAX_FACE).contains(&value) {
                return Err(GameError::InvalidFace { value });
            }
        }
        Ok(Self {
            dice: values.map(|value| Die { value, held: false }),
        })
    }

    /// Re-randomizes every non-held die. Held dice keep their face.
    pub fn roll(&mut self, rng: &mut impl Rng) {
        for die in &mut self.dice {
            if !die.held {
                die.value = rng.gen_range(MIN_FACE..=MAX_FACE);
            }
        }
    }

    /// Flips the hold flag of the die at `index` (1-based, 1..=5).
    ///
    /// Out-of-range indices are rejected without touching any die.
    pub fn toggle_hold(&mut self, index: usize) -> Result<()> {
        if index == 0 || index > DICE_COUNT {
            return Err(GameError::InvalidDieIndex { index });
        }
        self.dice[index - 1].held = !self.dice[index - 1].held;
        Ok(())
    }

    /// Clears every hold flag. Used at the turn boundary; does not reroll.
    pub fn clear_holds(&mut self) {
        for die in &mut self.dice {
            die.held = false;
        }
    }

    /// The five faces in display order.
    pub fn values(&self) -> [u8; DICE_COUNT] {
        self.dice.map(|die| die.value)
    }

    /// Faces of the currently held dice, in display order.
    pub fn held_values(&self) -> Vec<u8> {
        self.dice
            .iter()
            .filter(|die| die.held)
            .map(|die| die.value)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }
}
