//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition of an environment. It
//! keeps authoring order for iteration and an id index for O(1) lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::CardKind;

/// Errors raised while building a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two definitions share an id.
    #[error("card '{0}' is already registered")]
    DuplicateCard(CardId),
}

/// Catalog of card definitions.
///
/// Serializes as a plain list of definitions.
///
/// ## Example
///
/// ```
/// use dungeon_ccg::cards::{CardCatalog, CardDefinition, CardId};
/// use dungeon_ccg::core::Element;
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardDefinition::new(CardId::new("durin"), "Durin", 4, 6, Element::Earth))
///     .unwrap();
///
/// let found = catalog.get(&CardId::new("durin")).unwrap();
/// assert_eq!(found.name, "Durin");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardDefinition>", into = "Vec<CardDefinition>")]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if self.index.contains_key(&card.id) {
            return Err(CatalogError::DuplicateCard(card.id));
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Remove a card definition, returning it if it existed.
    ///
    /// Owned copies of the card are not touched here; see
    /// [`Collection::retain_known`](crate::collection::Collection::retain_known).
    pub fn remove(&mut self, id: &CardId) -> Option<CardDefinition> {
        let position = self.index.remove(id)?;
        let removed = self.cards.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Find cards by kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter().filter(move |c| c.kind == kind)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}

impl TryFrom<Vec<CardDefinition>> for CardCatalog {
    type Error = CatalogError;

    fn try_from(cards: Vec<CardDefinition>) -> Result<Self, Self::Error> {
        let mut catalog = CardCatalog::new();
        for card in cards {
            catalog.register(card)?;
        }
        Ok(catalog)
    }
}

impl FromIterator<CardDefinition> for CardCatalog {
    /// Collects definitions, keeping the first of any repeated id.
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        let mut catalog = CardCatalog::new();
        for card in iter {
            let _ = catalog.register(card);
        }
        catalog
    }
}

impl From<CardCatalog> for Vec<CardDefinition> {
    fn from(catalog: CardCatalog) -> Self {
        catalog.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::LeaderBoost;
    use crate::core::Element;

    fn card(id: &str, damage: i64, health: i64, element: Element) -> CardDefinition {
        CardDefinition::new(CardId::new(id), id.to_uppercase(), damage, health, element)
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(card("aragorn", 2, 5, Element::Fire)).unwrap();

        let found = catalog.get(&CardId::new("aragorn"));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "ARAGORN");

        assert!(catalog.get(&CardId::new("missing")).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = CardCatalog::new();
        catalog.register(card("aragorn", 2, 5, Element::Fire)).unwrap();

        let err = catalog.register(card("aragorn", 9, 9, Element::Air)).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCard(CardId::new("aragorn")));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&CardId::new("aragorn")).unwrap().damage, 2);
    }

    #[test]
    fn test_iteration_keeps_authoring_order() {
        let mut catalog = CardCatalog::new();
        for id in ["c", "a", "b"] {
            catalog.register(card(id, 2, 2, Element::Earth)).unwrap();
        }

        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_remove_reindexes() {
        let mut catalog = CardCatalog::new();
        for id in ["a", "b", "c"] {
            catalog.register(card(id, 2, 2, Element::Earth)).unwrap();
        }

        let removed = catalog.remove(&CardId::new("a"));
        assert_eq!(removed.map(|c| c.id), Some(CardId::new("a")));
        assert!(catalog.remove(&CardId::new("a")).is_none());

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&CardId::new("b")).unwrap().id, CardId::new("b"));
        assert_eq!(catalog.get(&CardId::new("c")).unwrap().id, CardId::new("c"));
    }

    #[test]
    fn test_find_by_kind() {
        let mut catalog = CardCatalog::new();
        let base = card("melian", 2, 3, Element::Water);
        let leader = CardDefinition::derive_leader(
            &base,
            CardId::new("leader"),
            "Leader",
            LeaderBoost::DoubleDamage,
        );
        catalog.register(base).unwrap();
        catalog.register(card("durin", 4, 6, Element::Earth)).unwrap();
        catalog.register(leader).unwrap();

        assert_eq!(catalog.find_by_kind(CardKind::Standard).count(), 2);
        assert_eq!(catalog.find_by_kind(CardKind::Leader).count(), 1);
    }

    #[test]
    fn test_find_with_predicate() {
        let mut catalog = CardCatalog::new();
        catalog.register(card("weak", 2, 1, Element::Air)).unwrap();
        catalog.register(card("strong", 8, 8, Element::Fire)).unwrap();

        let strong: Vec<_> = catalog.find(|c| c.damage > 5).collect();
        assert_eq!(strong.len(), 1);
        assert_eq!(strong[0].id, CardId::new("strong"));
    }

    #[test]
    fn test_serializes_as_list() {
        let mut catalog = CardCatalog::new();
        catalog.register(card("a", 2, 2, Element::Earth)).unwrap();

        let json = serde_json::to_value(&catalog).unwrap();
        assert!(json.is_array());

        let back: CardCatalog = serde_json::from_value(json).unwrap();
        assert!(back.contains(&CardId::new("a")));
    }

    #[test]
    fn test_collect_keeps_first_duplicate() {
        let catalog: CardCatalog =
            vec![card("a", 2, 2, Element::Earth), card("a", 7, 7, Element::Fire)]
                .into_iter()
                .collect();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&CardId::new("a")).unwrap().damage, 2);
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"[
            {"id":"a","name":"A","damage":2,"health":2,"element":"earth"},
            {"id":"a","name":"A2","damage":3,"health":3,"element":"fire"}
        ]"#;
        assert!(serde_json::from_str::<CardCatalog>(json).is_err());
    }
}
