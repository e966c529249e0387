//! On-disk snapshot schema and conversions to and from [`GameState`].
//!
//! The record is deliberately dumb: camelCase fields, category arrays laid
//! out in declaration order, and a score cell that is meaningful only where
//! the matching used flag is set. All interpretation happens in
//! [`SaveGame::into_state`], which funnels every structural violation into
//! [`StorageError::Corrupted`] so callers can treat a tampered file exactly
//! like an unreadable one.

use serde::{Deserialize, Serialize};

use kniffel_core::{CATEGORY_COUNT, DICE_COUNT, DiceSet, GameState, PLAYER_COUNT, Player};

use crate::error::{Result, StorageError};

/// Serialized form of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGame {
    pub rerolls_remaining: u8,
    pub players: [PlayerRecord; PLAYER_COUNT],
}

/// Serialized form of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub dice_values: [u8; DICE_COUNT],
    pub used_flags: [bool; CATEGORY_COUNT],
    /// Score per category; read only where `used_flags` is true.
    pub scores: [u16; CATEGORY_COUNT],
    pub active: bool,
}

impl SaveGame {
    /// Captures the parts of `state` that survive a restart. The phase is
    /// not recorded: saves only happen at turn boundaries or on quit, so a
    /// restored game always resumes awaiting a roll.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            rerolls_remaining: state.rerolls_remaining,
            players: std::array::from_fn(|i| {
                PlayerRecord::from_player(&state.players[i], i == state.active)
            }),
        }
    }

    /// Rebuilds the live state, validating structure along the way: faces
    /// in 1..=6, the reroll budget within bounds, exactly one active
    /// player, and every used score cell within its category's maximum.
    /// Each violation is reported as [`StorageError::Corrupted`]; nothing
    /// partial is ever returned.
    pub fn into_state(self) -> Result<GameState> {
        let active_count = self.players.iter().filter(|p| p.active).count();
        if active_count != 1 {
            return Err(StorageError::Corrupted(format!(
                "expected exactly one active player, found {active_count}"
            )));
        }
        let active = self
            .players
            .iter()
            .position(|p| p.active)
            .ok_or_else(|| StorageError::Corrupted("no active player".into()))?;

        let [first, second] = self.players;
        let players = [restore_player(first)?, restore_player(second)?];

        GameState::from_parts(players, active, self.rerolls_remaining)
            .map_err(|err| StorageError::Corrupted(err.to_string()))
    }
}

impl PlayerRecord {
    fn from_player(player: &Player, active: bool) -> Self {
        let scorecard = player.scorecard();
        Self {
            name: player.name().to_string(),
            dice_values: player.dice.values(),
            used_flags: scorecard.map(|slot| slot.is_some()),
            scores: scorecard.map(|slot| slot.unwrap_or(0)),
            active,
        }
    }
}

fn restore_player(record: PlayerRecord) -> Result<Player> {
    let dice = DiceSet::from_values(record.dice_values)
        .map_err(|err| StorageError::Corrupted(err.to_string()))?;
    let scores = std::array::from_fn(|i| {
        if record.used_flags[i] {
            Some(record.scores[i])
        } else {
            None
        }
    });
    Player::from_parts(&record.name, dice, scores)
        .map_err(|err| StorageError::Corrupted(err.to_string()))
}
