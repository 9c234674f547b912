//! Core engine types: elements, card kinds, dungeon types, configuration.
//!
//! These are the small value types every other module builds on.

pub mod config;
pub mod element;
pub mod kinds;

pub use config::{BonusStat, Reward, RewardTable};
pub use element::Element;
pub use kinds::{CardKind, DungeonType};
