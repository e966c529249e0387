//! Scoring categories and their rules.
//!
//! The thirteen categories are declared in the order the player sees them,
//! and that order is load-bearing: it numbers the selection menu and fixes
//! the array layout of saved games. [`SCORING_TABLE`] binds each category to
//! its scoring function by position; [`validate_scoring_table`] checks the
//! alignment once at startup so a drifted table aborts before any turn runs.

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::dice::DICE_COUNT;
use crate::error::{GameError, Result};

/// Number of scoring categories on the card.
pub const CATEGORY_COUNT: usize = 13;

/// Fixed awards for the pattern categories.
pub const FULL_HOUSE_SCORE: u16 = 25;
pub const SMALL_STRAIGHT_SCORE: u16 = 30;
pub const LARGE_STRAIGHT_SCORE: u16 = 40;
pub const YAHTZEE_SCORE: u16 = 50;

/// A scoring category. Each is usable at most once per player per game.
///
/// Declaration order is the menu order and the snapshot array order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    /// Position in declaration order, 0..13.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Category::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Category::iter().nth(index)
    }

    /// True for Ones..Sixes, the section that feeds the upper bonus.
    pub fn is_upper(self) -> bool {
        self.index() < 6
    }

    /// Largest score the category can produce from legal faces. Restored
    /// snapshots are bounded against this; no live roll can exceed it.
    pub fn max_score(self) -> u16 {
        match self {
            Category::Ones => 5,
            Category::Twos => 10,
            Category::Threes => 15,
            Category::Fours => 20,
            Category::Fives => 25,
            Category::Sixes => 30,
            // Sum of all five dice, capped by five sixes.
            Category::ThreeOfAKind | Category::FourOfAKind | Category::Chance => 30,
            Category::FullHouse => FULL_HOUSE_SCORE,
            Category::SmallStraight => SMALL_STRAIGHT_SCORE,
            Category::LargeStraight => LARGE_STRAIGHT_SCORE,
            Category::Yahtzee => YAHTZEE_SCORE,
        }
    }

    /// Display name shown on the scorecard and in the selection menu.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A category paired with the score the current dice would earn in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreOption {
    pub category: Category,
    pub score: u16,
}

/// Pure scoring function over the five faces.
pub type ScoreFn = fn(&[u8; DICE_COUNT]) -> u16;

/// One slot of the rule table: a category and its scoring function.
pub struct ScoringRule {
    pub category: Category,
    pub score: ScoreFn,
}

/// Index-aligned rule table: slot `i` must describe the category whose
/// declaration position is `i`.
pub static SCORING_TABLE: [ScoringRule; CATEGORY_COUNT] = [
    ScoringRule {
        category: Category::Ones,
        score: |faces| face_total(faces, 1),
    },
    ScoringRule {
        category: Category::Twos,
        score: |faces| face_total(faces, 2),
    },
    ScoringRule {
        category: Category::Threes,
        score: |faces| face_total(faces, 3),
    },
    ScoringRule {
        category: Category::Fours,
        score: |faces| face_total(faces, 4),
    },
    ScoringRule {
        category: Category::Fives,
        score: |faces| face_total(faces, 5),
    },
    ScoringRule {
        category: Category::Sixes,
        score: |faces| face_total(faces, 6),
    },
    ScoringRule {
        category: Category::ThreeOfAKind,
        score: |faces| n_of_a_kind(faces, 3),
    },
    ScoringRule {
        category: Category::FourOfAKind,
        score: |faces| n_of_a_kind(faces, 4),
    },
    ScoringRule {
        category: Category::FullHouse,
        score: full_house,
    },
    ScoringRule {
        category: Category::SmallStraight,
        score: small_straight,
    },
    ScoringRule {
        category: Category::LargeStraight,
        score: large_straight,
    },
    ScoringRule {
        category: Category::Yahtzee,
        score: yahtzee,
    },
    ScoringRule {
        category: Category::Chance,
        score: |faces| dice_total(faces),
    },
];

/// Confirms that [`SCORING_TABLE`] covers every category exactly once, in
/// declaration order. Run once at startup; a failure means the binary is
/// miswired and must not reach play.
pub fn validate_scoring_table() -> Result<()> {
    for (slot, expected) in Category::iter().enumerate() {
        let found = SCORING_TABLE[slot].category;
        if found != expected {
            return Err(GameError::TableMisaligned {
                slot,
                expected,
                found,
            });
        }
    }
    Ok(())
}

/// Scores `faces` in `category`. Pure; faces must already be in 1..=6.
pub fn score_for(category: Category, faces: &[u8; DICE_COUNT]) -> u16 {
    (SCORING_TABLE[category.index()].score)(faces)
}

/// Every still-open category paired with its score for `faces`, in
/// declaration order. The 1-based positions in this list are the menu
/// numbering the selection step validates against.
pub fn available_options(
    faces: &[u8; DICE_COUNT],
    used: &[bool; CATEGORY_COUNT],
) -> Vec<ScoreOption> {
    Category::iter()
        .filter(|category| !used[category.index()])
        .map(|category| ScoreOption {
            category,
            score: score_for(category, faces),
        })
        .collect()
}

/// Count of each face, indexed by `face - 1`.
fn face_counts(faces: &[u8; DICE_COUNT]) -> [u8; 6] {
    let mut counts = [0u8; 6];
    for &face in faces {
        counts[(face - 1) as usize] += 1;
    }
    counts
}

fn dice_total(faces: &[u8; DICE_COUNT]) -> u16 {
    faces.iter().map(|&face| u16::from(face)).sum()
}

fn face_total(faces: &[u8; DICE_COUNT], face: u8) -> u16 {
    u16::from(face) * u16::from(face_counts(faces)[(face - 1) as usize])
}

fn n_of_a_kind(faces: &[u8; DICE_COUNT], n: u8) -> u16 {
    if face_counts(faces).iter().any(|&count| count >= n) {
        dice_total(faces)
    } else {
        0
    }
}

/// Exactly a triple plus a pair of two distinct faces. Five of a kind does
/// not qualify.
fn full_house(faces: &[u8; DICE_COUNT]) -> u16 {
    let counts = face_counts(faces);
    if counts.contains(&3) && counts.contains(&2) {
        FULL_HOUSE_SCORE
    } else {
        0
    }
}

fn has_run(counts: &[u8; 6], start: u8, length: u8) -> bool {
    (start..start + length).all(|face| counts[(face - 1) as usize] >= 1)
}

fn small_straight(faces: &[u8; DICE_COUNT]) -> u16 {
    let counts = face_counts(faces);
    if (1..=3).any(|start| has_run(&counts, start, 4)) {
        SMALL_STRAIGHT_SCORE
    } else {
        0
    }
}

fn large_straight(faces: &[u8; DICE_COUNT]) -> u16 {
    let counts = face_counts(faces);
    if (1..=2).any(|start| has_run(&counts, start, 5)) {
        LARGE_STRAIGHT_SCORE
    } else {
        0
    }
}

fn yahtzee(faces: &[u8; DICE_COUNT]) -> u16 {
    if face_counts(faces).contains(&5) {
        YAHTZEE_SCORE
    } else {
        0
    }
}
