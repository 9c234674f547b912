//! Environments: a card catalog plus the dungeons built from it.

use serde::{Deserialize, Serialize};

use super::dungeon::{Dungeon, DungeonId};
use crate::cards::{CardCatalog, CardId};

/// Errors raised while loading an environment.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    /// The document is not valid environment JSON.
    #[error("invalid environment document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A named authoring unit: card catalog, starter cards and dungeons.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Card definitions.
    #[serde(rename = "worldCards")]
    pub catalog: CardCatalog,

    /// Cards every new player starts with.
    #[serde(default)]
    pub starter_collection: Vec<CardId>,

    /// Dungeons in authoring order.
    #[serde(default)]
    pub dungeons: Vec<Dungeon>,
}

impl Environment {
    /// Create an empty environment.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse an environment from JSON.
    pub fn from_json(json: &str) -> Result<Self, EnvironmentError> {
        let environment: Environment = serde_json::from_str(json)?;
        tracing::debug!(
            environment = %environment.id,
            cards = environment.catalog.len(),
            dungeons = environment.dungeons.len(),
            "loaded environment"
        );
        Ok(environment)
    }

    /// Serialize the environment to pretty JSON.
    pub fn to_json(&self) -> Result<String, EnvironmentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a dungeon by ID.
    #[must_use]
    pub fn dungeon(&self, id: &DungeonId) -> Option<&Dungeon> {
        self.dungeons.iter().find(|d| &d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DungeonType, Element};

    const DOC: &str = r#"{
        "id": "test-env",
        "name": "Test",
        "worldCards": [
            {"id": "a", "name": "A", "damage": 2, "health": 5, "element": "fire", "kind": "standard"},
            {"id": "b", "name": "B", "damage": 3, "health": 4, "element": "air", "kind": "standard"}
        ],
        "starterCollection": ["a", "b"],
        "dungeons": [
            {"id": "e", "name": "E", "type": "encounter", "cardOrder": ["b"]},
            {"id": "r", "name": "R", "type": "raid", "cardOrder": ["a"]}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let environment = Environment::from_json(DOC).unwrap();

        assert_eq!(environment.id, "test-env");
        assert_eq!(environment.catalog.len(), 2);
        assert_eq!(
            environment.catalog.get(&CardId::new("b")).unwrap().element,
            Element::Air
        );
        assert_eq!(environment.starter_collection.len(), 2);

        let encounter = environment.dungeon(&DungeonId::new("e")).unwrap();
        assert_eq!(encounter.dungeon_type, DungeonType::Encounter);

        let raid = environment.dungeon(&DungeonId::new("r")).unwrap();
        assert_eq!(raid.dungeon_type, DungeonType::Unknown);

        assert!(environment.dungeon(&DungeonId::new("nope")).is_none());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Environment::from_json("{\"id\": 3}").unwrap_err();
        assert!(matches!(err, EnvironmentError::Json(_)));
        assert!(err.to_string().starts_with("invalid environment document"));
    }

    #[test]
    fn test_duplicate_card_ids_rejected() {
        let doc = r#"{"id":"x","name":"X","worldCards":[
            {"id":"a","name":"A","damage":2,"health":2,"element":"fire"},
            {"id":"a","name":"A","damage":2,"health":2,"element":"fire"}
        ]}"#;
        assert!(Environment::from_json(doc).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let environment = Environment::from_json(DOC).unwrap();
        let json = environment.to_json().unwrap();
        let back = Environment::from_json(&json).unwrap();

        assert_eq!(back.catalog.len(), environment.catalog.len());
        assert_eq!(back.dungeons, environment.dungeons);
    }

    #[test]
    fn test_save_keeps_unrecognized_dungeon_type() {
        let json = Environment::from_json(DOC).unwrap().to_json().unwrap();

        assert!(json.contains("\"type\": \"raid\""));
        assert!(!json.contains("\"unknown\""));
    }
}
