//! Owned card state - a player's per-card bonuses.
//!
//! `OwnedCard` pairs a catalog card with the damage and health bonuses the
//! player has earned for it. Bonuses start at zero when the card enters the
//! collection and only ever grow.
//!
//! `Collection` stores owned cards in an `im::Vector`, so updates return a
//! new collection that shares structure with the old one. Callers keep the
//! previous value untouched, which is what the collection store expects when
//! it swaps in an updated bonus table.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId};
use crate::environment::Environment;

/// Errors raised while loading a collection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// Two records refer to the same card.
    #[error("card '{0}' is owned more than once")]
    DuplicateCard(CardId),
}

/// A card in a player's collection, with earned bonuses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedCard {
    /// Catalog card this record refers to.
    pub card_id: CardId,

    /// Added to the card's base damage.
    pub damage_bonus: i64,

    /// Added to the card's base health.
    pub health_bonus: i64,
}

impl OwnedCard {
    /// Create a freshly acquired card with zero bonuses.
    #[must_use]
    pub fn new(card_id: CardId) -> Self {
        Self {
            card_id,
            damage_bonus: 0,
            health_bonus: 0,
        }
    }

    /// Set both bonuses (builder pattern).
    #[must_use]
    pub fn with_bonus(mut self, damage_bonus: i64, health_bonus: i64) -> Self {
        self.damage_bonus = damage_bonus;
        self.health_bonus = health_bonus;
        self
    }
}

/// A player's owned cards in acquisition order.
///
/// Card ids are unique within a collection. Deserializing a list that
/// repeats an id fails with [`CollectionError::DuplicateCard`].
///
/// ## Example
///
/// ```
/// use dungeon_ccg::cards::CardId;
/// use dungeon_ccg::collection::Collection;
///
/// let empty = Collection::new();
/// let one = empty.acquire(CardId::new("aragorn"));
///
/// assert!(empty.is_empty());
/// assert_eq!(one.get(&CardId::new("aragorn")).unwrap().damage_bonus, 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<OwnedCard>", into = "Vec<OwnedCard>")]
pub struct Collection {
    cards: Vector<OwnedCard>,
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the zero-bonus starting collection of an environment.
    ///
    /// Starter ids that are missing from the catalog are skipped.
    #[must_use]
    pub fn starter(environment: &Environment) -> Self {
        environment
            .starter_collection
            .iter()
            .filter(|id| environment.catalog.contains(id))
            .fold(Collection::new(), |collection, id| collection.acquire(id.clone()))
    }

    /// Add a card at zero bonus, returning the new collection.
    ///
    /// Acquiring a card that is already owned leaves the collection as is.
    #[must_use]
    pub fn acquire(&self, card_id: CardId) -> Self {
        if self.contains(&card_id) {
            return self.clone();
        }
        let mut cards = self.cards.clone();
        cards.push_back(OwnedCard::new(card_id));
        Self { cards }
    }

    /// Get an owned card by ID.
    #[must_use]
    pub fn get(&self, card_id: &CardId) -> Option<&OwnedCard> {
        self.cards.iter().find(|c| &c.card_id == card_id)
    }

    /// Check if a card is owned.
    #[must_use]
    pub fn contains(&self, card_id: &CardId) -> bool {
        self.get(card_id).is_some()
    }

    /// Number of owned cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if nothing is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over owned cards in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = &OwnedCard> {
        self.cards.iter()
    }

    /// Index owned cards by ID.
    ///
    /// Agrees with [`Collection::get`]: the first record of an id wins.
    #[must_use]
    pub fn index(&self) -> FxHashMap<&CardId, &OwnedCard> {
        let mut index = FxHashMap::default();
        for card in &self.cards {
            index.entry(&card.card_id).or_insert(card);
        }
        index
    }

    /// Return a collection where `update` has been applied to one card.
    ///
    /// Every other record is shared with `self` unchanged. If the card is
    /// not owned the result equals `self`.
    #[must_use]
    pub fn update<F>(&self, card_id: &CardId, update: F) -> Self
    where
        F: FnOnce(&mut OwnedCard),
    {
        let mut cards = self.cards.clone();
        if let Some(position) = cards.iter().position(|c| &c.card_id == card_id) {
            if let Some(card) = cards.get_mut(position) {
                update(card);
            }
        }
        Self { cards }
    }

    /// Drop records whose card definition no longer exists.
    #[must_use]
    pub fn retain_known(&self, catalog: &CardCatalog) -> Self {
        let mut cards = self.cards.clone();
        cards.retain(|c| catalog.contains(&c.card_id));
        Self { cards }
    }
}

impl FromIterator<OwnedCard> for Collection {
    fn from_iter<I: IntoIterator<Item = OwnedCard>>(iter: I) -> Self {
        let mut cards: Vector<OwnedCard> = Vector::new();
        for card in iter {
            if cards.iter().any(|c| c.card_id == card.card_id) {
                continue;
            }
            cards.push_back(card);
        }
        Self { cards }
    }
}

impl TryFrom<Vec<OwnedCard>> for Collection {
    type Error = CollectionError;

    fn try_from(records: Vec<OwnedCard>) -> Result<Self, Self::Error> {
        let mut cards: Vector<OwnedCard> = Vector::new();
        for card in records {
            if cards.iter().any(|c| c.card_id == card.card_id) {
                return Err(CollectionError::DuplicateCard(card.card_id));
            }
            cards.push_back(card);
        }
        Ok(Self { cards })
    }
}

impl From<Collection> for Vec<OwnedCard> {
    fn from(collection: Collection) -> Self {
        collection.cards.into_iter().collect()
    }
}
