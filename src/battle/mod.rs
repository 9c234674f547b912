//! Battle engine: round resolution, orchestration and rewards.
//!
//! ## Flow
//!
//! 1. [`run_battle`] pairs deck slot `i` with dungeon card `i` for every card
//!    in the dungeon lineup.
//! 2. [`resolve_round`] decides each pair from effective stats and elements.
//! 3. The [`BattleResult`] tallies rounds; ties go to the player.
//! 4. On victory the caller applies [`apply_reward`] to one chosen card.
//!
//! Everything here is synchronous and pure. Functions take their full input
//! by reference and return new values, so battles for different players can
//! run concurrently without coordination.

pub mod orchestrator;
pub mod reason;
pub mod resolver;
pub mod result;
pub mod reward;

pub use orchestrator::{run_battle, run_battle_at};
pub use reason::{ReasonCategory, ReasonParam, RoundReason};
pub use resolver::{resolve_round, ResolvedCard, RoundOutcome, Side};
pub use result::{BattleResult, BattleRoundResult, HistoryError};
pub use reward::{apply_reward, apply_reward_with, reward_for};
