//! Structured round reasons.
//!
//! Resolution never produces display text. Each outcome carries a
//! `RoundReason`: a category plus the values a presentation layer needs to
//! fill in a localized message. `key()` gives the message key,
//! `params()` the named substitution values in a stable order.

use serde::{Deserialize, Serialize};

use crate::core::Element;

/// Reason category, one per decision rule plus missing data.
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
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ReasonCategory {
    DecisiveStrike,
    PlayerDamageOverflow,
    DungeonDamageOverflow,
    PlayerElementAdvantage,
    DungeonElementAdvantage,
    Stalemate,
    MissingCard,
}

/// A substitution value for a reason message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReasonParam {
    Text(String),
    Number(i64),
    Element(Element),
}

impl std::fmt::Display for ReasonParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReasonParam::Text(text) => f.write_str(text),
            ReasonParam::Number(n) => write!(f, "{n}"),
            ReasonParam::Element(e) => write!(f, "{e}"),
        }
    }
}

/// Why a round went the way it did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RoundReason {
    /// Both sides could kill; the player strikes first.
    DecisiveStrike {
        player_name: String,
        dungeon_name: String,
    },
    /// Player damage exceeds dungeon health.
    PlayerDamageOverflow {
        player_name: String,
        player_damage: i64,
        dungeon_name: String,
        dungeon_health: i64,
    },
    /// Dungeon damage exceeds player health.
    DungeonDamageOverflow {
        dungeon_name: String,
        dungeon_damage: i64,
        player_name: String,
        player_health: i64,
    },
    /// Player element beats dungeon element.
    PlayerElementAdvantage {
        player_name: String,
        player_element: Element,
        dungeon_name: String,
        dungeon_element: Element,
    },
    /// Dungeon element beats player element.
    DungeonElementAdvantage {
        player_name: String,
        player_element: Element,
        dungeon_name: String,
        dungeon_element: Element,
    },
    /// Nothing decided the round; the dungeon holds.
    Stalemate { dungeon_name: String },
    /// A card for this round could not be resolved.
    MissingCard,
}

impl RoundReason {
    /// The reason category.
    #[must_use]
    pub fn category(&self) -> ReasonCategory {
        match self {
            RoundReason::DecisiveStrike { .. } => ReasonCategory::DecisiveStrike,
            RoundReason::PlayerDamageOverflow { .. } => ReasonCategory::PlayerDamageOverflow,
            RoundReason::DungeonDamageOverflow { .. } => ReasonCategory::DungeonDamageOverflow,
            RoundReason::PlayerElementAdvantage { .. } => ReasonCategory::PlayerElementAdvantage,
            RoundReason::DungeonElementAdvantage { .. } => ReasonCategory::DungeonElementAdvantage,
            RoundReason::Stalemate { .. } => ReasonCategory::Stalemate,
            RoundReason::MissingCard => ReasonCategory::MissingCard,
        }
    }

    /// Localization key, e.g. `battle.reasons.decisiveStrike`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("battle.reasons.{}", self.category())
    }

    /// Named substitution parameters in message order.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, ReasonParam)> {
        use ReasonParam::{Element as El, Number, Text};

        match self {
            RoundReason::DecisiveStrike {
                player_name,
                dungeon_name,
            } => vec![
                ("playerName", Text(player_name.clone())),
                ("dungeonName", Text(dungeon_name.clone())),
            ],
            RoundReason::PlayerDamageOverflow {
                player_name,
                player_damage,
                dungeon_name,
                dungeon_health,
            } => vec![
                ("playerName", Text(player_name.clone())),
                ("playerDamage", Number(*player_damage)),
                ("dungeonName", Text(dungeon_name.clone())),
                ("dungeonHealth", Number(*dungeon_health)),
            ],
            RoundReason::DungeonDamageOverflow {
                dungeon_name,
                dungeon_damage,
                player_name,
                player_health,
            } => vec![
                ("dungeonName", Text(dungeon_name.clone())),
                ("dungeonDamage", Number(*dungeon_damage)),
                ("playerName", Text(player_name.clone())),
                ("playerHealth", Number(*player_health)),
            ],
            RoundReason::PlayerElementAdvantage {
                player_name,
                player_element,
                dungeon_name,
                dungeon_element,
            }
            | RoundReason::DungeonElementAdvantage {
                player_name,
                player_element,
                dungeon_name,
                dungeon_element,
            } => vec![
                ("playerName", Text(player_name.clone())),
                ("playerElement", El(*player_element)),
                ("dungeonName", Text(dungeon_name.clone())),
                ("dungeonElement", El(*dungeon_element)),
            ],
            RoundReason::Stalemate { dungeon_name } => {
                vec![("dungeonName", Text(dungeon_name.clone()))]
            }
            RoundReason::MissingCard => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(RoundReason::MissingCard.key(), "battle.reasons.missingCard");
        let reason = RoundReason::DecisiveStrike {
            player_name: "A".into(),
            dungeon_name: "B".into(),
        };
        assert_eq!(reason.key(), "battle.reasons.decisiveStrike");
    }

    #[test]
    fn test_params_order() {
        let reason = RoundReason::PlayerDamageOverflow {
            player_name: "Durin".into(),
            player_damage: 4,
            dungeon_name: "Melian".into(),
            dungeon_health: 3,
        };

        let names: Vec<_> = reason.params().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["playerName", "playerDamage", "dungeonName", "dungeonHealth"]);
        assert_eq!(reason.params()[1].1, ReasonParam::Number(4));
    }

    #[test]
    fn test_element_params() {
        let reason = RoundReason::DungeonElementAdvantage {
            player_name: "P".into(),
            player_element: Element::Air,
            dungeon_name: "D".into(),
            dungeon_element: Element::Water,
        };

        assert_eq!(reason.category(), ReasonCategory::DungeonElementAdvantage);
        let params = reason.params();
        assert_eq!(params[3], ("dungeonElement", ReasonParam::Element(Element::Water)));
        assert_eq!(params[3].1.to_string(), "water");
    }

    #[test]
    fn test_missing_card_has_no_params() {
        assert!(RoundReason::MissingCard.params().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let reason = RoundReason::Stalemate {
            dungeon_name: "Melian".into(),
        };
        let json = serde_json::to_string(&reason).unwrap();
        assert_eq!(json, r#"{"stalemate":{"dungeonName":"Melian"}}"#);

        let missing = serde_json::to_string(&RoundReason::MissingCard).unwrap();
        assert_eq!(missing, r#""missingCard""#);
    }
}
