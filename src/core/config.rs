//! Engine configuration types.
//!
//! - `BonusStat` / `Reward`: a single permanent stat increase
//! - `RewardTable`: which reward each dungeon type grants on victory
//!
//! The default table is the one the game ships with:
//!
//! | dungeon   | reward      |
//! |-----------|-------------|
//! | encounter | +1 damage   |
//! | minor     | +2 health   |
//! | major     | +3 damage   |

use serde::{Deserialize, Serialize};

use super::kinds::DungeonType;

/// Which owned-card bonus a reward increases.
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
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BonusStat {
    Damage,
    Health,
}

/// A permanent additive bonus granted for a dungeon victory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reward {
    /// Stat that grows.
    pub stat: BonusStat,
    /// Amount added to the bonus.
    pub amount: i64,
}

impl Reward {
    /// Damage bonus reward.
    #[must_use]
    pub const fn damage(amount: i64) -> Self {
        Self {
            stat: BonusStat::Damage,
            amount,
        }
    }

    /// Health bonus reward.
    #[must_use]
    pub const fn health(amount: i64) -> Self {
        Self {
            stat: BonusStat::Health,
            amount,
        }
    }
}

impl std::fmt::Display for Reward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+} {}", self.amount, self.stat)
    }
}

/// Victory rewards per dungeon type.
///
/// A type with no entry grants nothing. `DungeonType::Unknown` never has an
/// entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTable {
    /// Reward for clearing an encounter.
    pub encounter: Option<Reward>,
    /// Reward for clearing a minor dungeon.
    pub minor: Option<Reward>,
    /// Reward for clearing a major dungeon.
    pub major: Option<Reward>,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            encounter: Some(Reward::damage(1)),
            minor: Some(Reward::health(2)),
            major: Some(Reward::damage(3)),
        }
    }
}

impl RewardTable {
    /// A table that grants nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            encounter: None,
            minor: None,
            major: None,
        }
    }

    /// Set the reward for a dungeon type.
    ///
    /// Setting a reward for `DungeonType::Unknown` has no effect.
    #[must_use]
    pub fn with_reward(mut self, dungeon_type: DungeonType, reward: Reward) -> Self {
        match dungeon_type {
            DungeonType::Encounter => self.encounter = Some(reward),
            DungeonType::Minor => self.minor = Some(reward),
            DungeonType::Major => self.major = Some(reward),
            DungeonType::Unknown => {}
        }
        self
    }

    /// Reward granted for beating a dungeon of the given type.
    #[must_use]
    pub fn reward_for(&self, dungeon_type: DungeonType) -> Option<Reward> {
        match dungeon_type {
            DungeonType::Encounter => self.encounter,
            DungeonType::Minor => self.minor,
            DungeonType::Major => self.major,
            DungeonType::Unknown => None,
        }
    }
}
