//! Error types for rule violations and configuration faults.

use thiserror::Error;

use crate::category::Category;
use crate::state::Phase;

/// Errors surfaced by dice, scorecard, and turn operations.
///
/// Every variant names the guard that rejected the request; the state is
/// left untouched whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("die index {index} is out of range (valid: 1-5)")]
    InvalidDieIndex { index: usize },

    #[error("die face {value} is outside 1-6")]
    InvalidFace { value: u8 },

    #[error("category {category} has already been scored")]
    CategoryUsed { category: Category },

    #[error("score {score} for {category} exceeds its maximum of {max}")]
    ScoreOutOfRange {
        category: Category,
        score: u16,
        max: u16,
    },

    #[error("selection {position} is out of range (valid: 1-{available})")]
    SelectionOutOfRange { position: usize, available: usize },

    #[error("no rerolls left this turn")]
    OutOfRerolls,

    #[error("{event} is not allowed while the game is in {phase:?}")]
    WrongPhase { event: &'static str, phase: Phase },

    #[error("reroll count {count} exceeds the per-turn budget")]
    InvalidRerollCount { count: u8 },

    #[error("active player index {index} is out of range")]
    InvalidActivePlayer { index: usize },

    #[error("scoring table slot {slot} is bound to {found}, expected {expected}")]
    TableMisaligned {
        slot: usize,
        expected: Category,
        found: Category,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
