//! Dungeon definitions: fixed opposing lineups.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::DungeonType;

/// Unique identifier for a dungeon.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DungeonId(pub String);

impl DungeonId {
    /// Create a new dungeon ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DungeonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dungeon: a named, typed, ordered lineup of catalog cards.
///
/// Card `i` of `card_order` is the opponent in round `i + 1`. The lineup is
/// static data; it never adapts to the player's deck.
///
/// A type name this crate does not recognize loads as
/// [`DungeonType::Unknown`] and is written back verbatim on save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DungeonRecord", into = "DungeonRecord")]
pub struct Dungeon {
    /// Unique identifier.
    pub id: DungeonId,

    /// Display name.
    pub name: String,

    /// Encounter, minor or major.
    pub dungeon_type: DungeonType,

    /// Opposing card for each round, in fight order.
    pub card_order: SmallVec<[CardId; 6]>,

    /// Authored type name when it was not recognized.
    unknown_type: Option<String>,
}

/// Stored form of a dungeon.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DungeonRecord {
    id: DungeonId,
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    card_order: SmallVec<[CardId; 6]>,
}

impl From<DungeonRecord> for Dungeon {
    fn from(record: DungeonRecord) -> Self {
        let dungeon_type = DungeonType::from_name(&record.type_name);
        Self {
            id: record.id,
            name: record.name,
            dungeon_type,
            card_order: record.card_order,
            unknown_type: (dungeon_type == DungeonType::Unknown).then_some(record.type_name),
        }
    }
}

impl From<Dungeon> for DungeonRecord {
    fn from(dungeon: Dungeon) -> Self {
        let type_name = dungeon.type_name().to_owned();
        Self {
            id: dungeon.id,
            name: dungeon.name,
            type_name,
            card_order: dungeon.card_order,
        }
    }
}

impl Dungeon {
    /// Create a dungeon.
    #[must_use]
    pub fn new(
        id: DungeonId,
        name: impl Into<String>,
        dungeon_type: DungeonType,
        card_order: impl IntoIterator<Item = CardId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            dungeon_type,
            card_order: card_order.into_iter().collect(),
            unknown_type: None,
        }
    }

    /// Type name as stored: the authored name for unrecognized types.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match (&self.unknown_type, self.dungeon_type) {
            (Some(name), DungeonType::Unknown) => name,
            _ => self.dungeon_type.as_ref(),
        }
    }

    /// Number of rounds a battle against this dungeon has.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.card_order.len()
    }

    /// Deck length a player must bring.
    #[must_use]
    pub fn required_deck_size(&self) -> usize {
        self.card_order.len()
    }
}
