//! Card kinds and dungeon types.

use serde::{Deserialize, Serialize};

/// Card kind.
///
/// Leaders are derived from a standard card with one stat doubled. The
/// battle engine treats both kinds identically.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CardKind {
    #[default]
    Standard,
    Leader,
}

/// Dungeon type. Determines lineup length and the victory reward.
///
/// `Unknown` absorbs any type name this crate does not recognize, both when
/// deserializing and when parsing with [`DungeonType::from_name`]. Unknown
/// dungeons grant no reward and have no prescribed lineup length. The
/// authored name itself is kept by [`Dungeon`](crate::environment::Dungeon).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DungeonType {
    /// Single-card fight.
    Encounter,
    /// Four-card lineup.
    Minor,
    /// Six-card lineup.
    Major,
    #[serde(other)]
    Unknown,
}

impl DungeonType {
    /// Parse a type name, falling back to `Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(DungeonType::Unknown)
    }

    /// Number of cards in a dungeon lineup of this type.
    ///
    /// Enforced by the authoring tool, not the battle engine.
    #[must_use]
    pub const fn lineup_size(self) -> Option<usize> {
        match self {
            DungeonType::Encounter => Some(1),
            DungeonType::Minor => Some(4),
            DungeonType::Major => Some(6),
            DungeonType::Unknown => None,
        }
    }
}
