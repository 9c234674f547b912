//! Round resolution.
//!
//! A round pits one resolved player card against one resolved dungeon card.
//! The outcome comes from an ordered decision list; the first rule that
//! matches decides the round:
//!
//! 1. both sides deal lethal damage: player wins (decisive strike)
//! 2. player damage exceeds dungeon health: player wins
//! 3. dungeon damage exceeds player health: dungeon wins
//! 4. player element beats dungeon element: player wins
//! 5. dungeon element beats player element: dungeon wins
//! 6. otherwise: dungeon wins (stalemate)
//!
//! Rule 1 gives simultaneous kills to the player, who holds the initiative.
//! Rule 6 gives undecided rounds to the defender. Both asymmetries are part
//! of the game rules; so is the aggregate rule in
//! [`run_battle`](super::run_battle) that awards tied battles to the player.
//!
//! Rounds are independent. Cards fight at full strength every round; no
//! damage carries over.

use serde::{Deserialize, Serialize};

use super::reason::RoundReason;
use crate::cards::CardDefinition;
use crate::collection::OwnedCard;
use crate::core::Element;

/// Which side took a round.
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
pub enum Side {
    Player,
    Dungeon,
}

/// Effective stats of a card for one round.
///
/// The resolver does no lookups; callers build these from the catalog and
/// the player's bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedCard<'a> {
    /// Display name.
    pub name: &'a str,
    /// Effective damage.
    pub damage: i64,
    /// Effective health.
    pub health: i64,
    /// Element.
    pub element: Element,
}

impl<'a> ResolvedCard<'a> {
    /// Create a resolved card from raw values.
    #[must_use]
    pub fn new(name: &'a str, damage: i64, health: i64, element: Element) -> Self {
        Self {
            name,
            damage,
            health,
            element,
        }
    }

    /// Base stats only. Used for dungeon cards.
    #[must_use]
    pub fn base(definition: &'a CardDefinition) -> Self {
        Self::new(
            &definition.name,
            definition.damage,
            definition.health,
            definition.element,
        )
    }

    /// Base stats plus the owner's bonuses. Used for player cards.
    #[must_use]
    pub fn with_bonus(definition: &'a CardDefinition, owned: &OwnedCard) -> Self {
        Self::new(
            &definition.name,
            definition.damage.saturating_add(owned.damage_bonus),
            definition.health.saturating_add(owned.health_bonus),
            definition.element,
        )
    }
}

/// Result of a single round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Side that took the round.
    pub winner: Side,
    /// Why.
    pub reason: RoundReason,
}

impl RoundOutcome {
    /// Automatic dungeon win for a round with unresolvable cards.
    #[must_use]
    pub fn missing_card() -> Self {
        Self {
            winner: Side::Dungeon,
            reason: RoundReason::MissingCard,
        }
    }
}

/// Resolve one round.
///
/// ```
/// use dungeon_ccg::battle::{resolve_round, ResolvedCard, Side};
/// use dungeon_ccg::core::Element;
///
/// let player = ResolvedCard::new("Eldarion", 3, 6, Element::Earth);
/// let dungeon = ResolvedCard::new("Melian", 2, 3, Element::Water);
///
/// // Neither side is lethal; earth beats water.
/// assert_eq!(resolve_round(&player, &dungeon).winner, Side::Player);
/// ```
#[must_use]
pub fn resolve_round(player: &ResolvedCard<'_>, dungeon: &ResolvedCard<'_>) -> RoundOutcome {
    let player_lethal = player.damage > dungeon.health;
    let dungeon_lethal = dungeon.damage > player.health;

    let (winner, reason) = if player_lethal && dungeon_lethal {
        (
            Side::Player,
            RoundReason::DecisiveStrike {
                player_name: player.name.to_string(),
                dungeon_name: dungeon.name.to_string(),
            },
        )
    } else if player_lethal {
        (
            Side::Player,
            RoundReason::PlayerDamageOverflow {
                player_name: player.name.to_string(),
                player_damage: player.damage,
                dungeon_name: dungeon.name.to_string(),
                dungeon_health: dungeon.health,
            },
        )
    } else if dungeon_lethal {
        (
            Side::Dungeon,
            RoundReason::DungeonDamageOverflow {
                dungeon_name: dungeon.name.to_string(),
                dungeon_damage: dungeon.damage,
                player_name: player.name.to_string(),
                player_health: player.health,
            },
        )
    } else if player.element.beats(dungeon.element) {
        (
            Side::Player,
            RoundReason::PlayerElementAdvantage {
                player_name: player.name.to_string(),
                player_element: player.element,
                dungeon_name: dungeon.name.to_string(),
                dungeon_element: dungeon.element,
            },
        )
    } else if dungeon.element.beats(player.element) {
        (
            Side::Dungeon,
            RoundReason::DungeonElementAdvantage {
                player_name: player.name.to_string(),
                player_element: player.element,
                dungeon_name: dungeon.name.to_string(),
                dungeon_element: dungeon.element,
            },
        )
    } else {
        (
            Side::Dungeon,
            RoundReason::Stalemate {
                dungeon_name: dungeon.name.to_string(),
            },
        )
    };

    RoundOutcome { winner, reason }
}
