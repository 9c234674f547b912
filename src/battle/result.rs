//! Battle results.
//!
//! A `BattleResult` is built once by the orchestrator and never mutated:
//! fields are private and only readable through accessors. The history
//! store keeps results as opaque byte records via `encode`/`decode`.

use serde::{Deserialize, Serialize};

use super::reason::RoundReason;
use super::resolver::Side;
use crate::cards::CardId;
use crate::environment::DungeonId;

/// Errors from the result record codec.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// The record could not be encoded or decoded.
    #[error("battle record codec failed: {0}")]
    Codec(#[from] bincode::Error),

    /// Stored tallies or verdict disagree with the stored rounds.
    #[error("battle record tallies do not match its rounds")]
    InconsistentTallies,
}

/// Outcome of one round of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRoundResult {
    /// 1-based round number.
    pub round: usize,

    /// Deck entry used this round. `None` if the deck ran out.
    pub player_card_id: Option<CardId>,

    /// Dungeon lineup entry for this round.
    pub dungeon_card_id: CardId,

    /// Side that took the round.
    pub winner: Side,

    /// Why.
    pub reason: RoundReason,
}

/// Complete, immutable record of a battle.
///
/// Deserializing re-derives the tallies and verdict from the rounds and
/// rejects records whose stored values disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BattleRecord", into = "BattleRecord")]
pub struct BattleResult {
    dungeon_id: DungeonId,
    player_wins: usize,
    dungeon_wins: usize,
    rounds: Vec<BattleRoundResult>,
    player_victory: bool,
    timestamp_ms: u64,
}

/// Stored form of a battle result.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BattleRecord {
    dungeon_id: DungeonId,
    player_wins: usize,
    dungeon_wins: usize,
    rounds: Vec<BattleRoundResult>,
    player_victory: bool,
    timestamp_ms: u64,
}

impl TryFrom<BattleRecord> for BattleResult {
    type Error = HistoryError;

    fn try_from(record: BattleRecord) -> Result<Self, Self::Error> {
        let result =
            BattleResult::from_rounds(record.dungeon_id, record.rounds, record.timestamp_ms);
        if (result.player_wins, result.dungeon_wins, result.player_victory)
            != (record.player_wins, record.dungeon_wins, record.player_victory)
        {
            return Err(HistoryError::InconsistentTallies);
        }
        Ok(result)
    }
}

impl From<BattleResult> for BattleRecord {
    fn from(result: BattleResult) -> Self {
        Self {
            dungeon_id: result.dungeon_id,
            player_wins: result.player_wins,
            dungeon_wins: result.dungeon_wins,
            rounds: result.rounds,
            player_victory: result.player_victory,
            timestamp_ms: result.timestamp_ms,
        }
    }
}

impl BattleResult {
    /// Assemble a result from resolved rounds.
    ///
    /// Tallies are derived from `rounds`, so they always sum to the round
    /// count. A tie counts as a player victory.
    pub(crate) fn from_rounds(
        dungeon_id: DungeonId,
        rounds: Vec<BattleRoundResult>,
        timestamp_ms: u64,
    ) -> Self {
        let player_wins = rounds.iter().filter(|r| r.winner == Side::Player).count();
        let dungeon_wins = rounds.len() - player_wins;

        Self {
            dungeon_id,
            player_wins,
            dungeon_wins,
            rounds,
            player_victory: player_wins >= dungeon_wins,
            timestamp_ms,
        }
    }

    /// Dungeon that was fought.
    #[must_use]
    pub fn dungeon_id(&self) -> &DungeonId {
        &self.dungeon_id
    }

    /// Rounds won by the player.
    #[must_use]
    pub fn player_wins(&self) -> usize {
        self.player_wins
    }

    /// Rounds won by the dungeon.
    #[must_use]
    pub fn dungeon_wins(&self) -> usize {
        self.dungeon_wins
    }

    /// Rounds in fight order.
    #[must_use]
    pub fn rounds(&self) -> &[BattleRoundResult] {
        &self.rounds
    }

    /// Whether the player won the battle.
    #[must_use]
    pub fn player_victory(&self) -> bool {
        self.player_victory
    }

    /// Completion time, milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// Encode as a compact binary history record.
    pub fn encode(&self) -> Result<Vec<u8>, HistoryError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a history record produced by [`BattleResult::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, HistoryError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
