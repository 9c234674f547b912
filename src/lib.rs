//! # dungeon-ccg
//!
//! Deterministic battle engine for a collectible-card dungeon game.
//!
//! Players build a deck from their card collection and send it against a
//! dungeon: a fixed, ordered lineup of opposing cards. The engine pairs the
//! two round by round, decides each round from stats and elements, and
//! returns a complete battle log with a verdict. Winning a battle lets the
//! player grow one card's stats permanently.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Same inputs, same result. No randomness, no I/O, no hidden
//!    state between calls.
//!
//! 2. **Never fails mid-battle**: Unresolvable card references become
//!    scored losses for the affected round, not errors.
//!
//! 3. **Structured output**: Round reasons are tagged data. Turning them into
//!    localized text is the caller's job.
//!
//! ## Modules
//!
//! - `core`: Elements, card kinds, dungeon types, reward configuration
//! - `cards`: Card definitions, leader derivation and the catalog
//! - `collection`: Owned cards and their bonuses
//! - `deck`: Ordered decks and caller-side deck checks
//! - `environment`: Dungeons, environments, JSON loading, starter data
//! - `battle`: Round resolution, battle orchestration, rewards

pub mod core;
pub mod cards;
pub mod collection;
pub mod deck;
pub mod environment;
pub mod battle;

// Re-export commonly used types
pub use crate::core::{BonusStat, CardKind, DungeonType, Element, Reward, RewardTable};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, CatalogError, LeaderBoost};

pub use crate::collection::{Collection, CollectionError, OwnedCard};

pub use crate::deck::{Deck, DeckError};

pub use crate::environment::{Dungeon, DungeonId, Environment, EnvironmentError};

pub use crate::battle::{
    apply_reward, apply_reward_with, resolve_round, reward_for, run_battle, run_battle_at,
    BattleResult, BattleRoundResult, HistoryError, ReasonCategory, ReasonParam, ResolvedCard,
    RoundOutcome, RoundReason, Side,
};
