//! Player identity, dice, and scorecard.

use rand::Rng;
use strum::IntoEnumIterator;

use crate::category::{self, CATEGORY_COUNT, Category, ScoreOption};
use crate::dice::DiceSet;
use crate::error::{GameError, Result};

/// Names longer than this are truncated at creation time.
pub const MAX_NAME_LEN: usize = 10;

/// Bonus added to the total once the upper section reaches the threshold.
pub const UPPER_BONUS: u16 = 35;
pub const UPPER_BONUS_THRESHOLD: u16 = 63;

/// One participant: a display name, their dice, and their scorecard.
///
/// A scorecard slot is `None` until the category is applied; once filled it
/// never changes for the rest of the game. Totals are derived on demand, so
/// there is no stored aggregate to drift out of sync.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    pub dice: DiceSet,
    scores: [Option<u16>; CATEGORY_COUNT],
}

impl Player {
    /// Creates a player with a fresh opening roll and an empty scorecard.
    pub fn new(name: &str, rng: &mut impl Rng) -> Self {
        Self {
            name: truncate_name(name),
            dice: DiceSet::roll_new(rng),
            scores: [None; CATEGORY_COUNT],
        }
    }

    /// Rebuilds a player from restored parts. The name passes through the
    /// same truncation as creation, and every filled slot must fit its
    /// category's maximum, so tampered saves can smuggle in neither an
    /// oversized name nor a score no roll can produce.
    pub fn from_parts(
        name: &str,
        dice: DiceSet,
        scores: [Option<u16>; CATEGORY_COUNT],
    ) -> Result<Self> {
        for (category, slot) in Category::iter().zip(&scores) {
            if let Some(score) = *slot
                && score > category.max_score()
            {
                return Err(GameError::ScoreOutOfRange {
                    category,
                    score,
                    max: category.max_score(),
                });
            }
        }
        Ok(Self {
            name: truncate_name(name),
            dice,
            scores,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every open category paired with its score for the current faces.
    pub fn options(&self) -> Vec<ScoreOption> {
        category::available_options(&self.dice.values(), &self.used_flags())
    }

    /// Writes `score` into `category`'s slot.
    ///
    /// Rejected with [`GameError::CategoryUsed`] if the slot is already
    /// filled; nothing is mutated on failure.
    pub fn apply_option(&mut self, category: Category, score: u16) -> Result<()> {
        let slot = &mut self.scores[category.index()];
        if slot.is_some() {
            return Err(GameError::CategoryUsed { category });
        }
        *slot = Some(score);
        Ok(())
    }

    /// Releases every held die. Called at the turn boundary; does not reroll.
    pub fn reset_dice(&mut self) {
        self.dice.clear_holds();
    }

    pub fn score(&self, category: Category) -> Option<u16> {
        self.scores[category.index()]
    }

    pub fn used(&self, category: Category) -> bool {
        self.scores[category.index()].is_some()
    }

    /// The scorecard slots in declaration order.
    pub fn scorecard(&self) -> [Option<u16>; CATEGORY_COUNT] {
        self.scores
    }

    fn used_flags(&self) -> [bool; CATEGORY_COUNT] {
        self.scores.map(|slot| slot.is_some())
    }

    /// Sum of the filled upper-section slots (Ones..Sixes).
    pub fn upper_total(&self) -> u16 {
        self.scores[..6].iter().flatten().sum()
    }

    pub fn has_upper_bonus(&self) -> bool {
        self.upper_total() >= UPPER_BONUS_THRESHOLD
    }

    /// Sum of all filled slots plus the upper bonus when earned.
    pub fn total_score(&self) -> u16 {
        let base: u16 = self.scores.iter().flatten().sum();
        if self.has_upper_bonus() {
            base + UPPER_BONUS
        } else {
            base
        }
    }

    /// True once every category has been scored.
    pub fn is_finished(&self) -> bool {
        self.scores.iter().all(|slot| slot.is_some())
    }
}

fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}
