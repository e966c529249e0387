//! Rules engine for a two-player dice duel.
//!
//! `kniffel-core` defines the canonical game rules: dice, scoring
//! categories, scorecards, and the turn state machine. All state mutation
//! flows through [`engine::TurnEngine`], randomness is injected through
//! `rand::Rng`, and nothing in here performs I/O, so the crate behaves the
//! same under test harnesses and the terminal frontend alike.
pub mod category;
pub mod dice;
pub mod engine;
pub mod error;
pub mod player;
pub mod state;

pub use category::{
    CATEGORY_COUNT, Category, SCORING_TABLE, ScoreOption, ScoringRule, available_options,
    score_for, validate_scoring_table,
};
pub use dice::{DICE_COUNT, DiceSet, Die, MAX_FACE, MIN_FACE};
pub use engine::{TurnEngine, TurnEvent, TurnReport};
pub use error::{GameError, Result};
pub use player::{MAX_NAME_LEN, Player, UPPER_BONUS, UPPER_BONUS_THRESHOLD};
pub use state::{GameState, MatchOutcome, PLAYER_COUNT, Phase, REROLLS_PER_TURN};
