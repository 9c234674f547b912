//! Ordered decks.
//!
//! A deck is the player's chosen sequence of owned cards. Entry `i` fights
//! the dungeon's card `i`.
//!
//! The battle engine accepts any deck as given. The checks here are for
//! callers that want to refuse a deck before a battle starts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::collection::Collection;
use crate::environment::Dungeon;

/// Reasons a deck is not ready for a dungeon.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// Deck length differs from the dungeon lineup.
    #[error("deck has {actual} cards but the dungeon needs {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The same card appears twice.
    #[error("card '{0}' appears more than once in the deck")]
    DuplicateCard(CardId),

    /// The card is not in the player's collection.
    #[error("card '{0}' is not in the collection")]
    NotOwned(CardId),
}

/// Ordered sequence of card ids.
///
/// `SmallVec` keeps the common case (lineups of at most six) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    entries: SmallVec<[CardId; 6]>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the card id for a 0-based slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&CardId> {
        self.entries.get(slot)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a card is in the deck.
    #[must_use]
    pub fn contains(&self, card_id: &CardId) -> bool {
        self.entries.contains(card_id)
    }

    /// Iterate over entries in fight order.
    pub fn iter(&self) -> impl Iterator<Item = &CardId> {
        self.entries.iter()
    }

    /// Append a card, refusing duplicates.
    pub fn push(&mut self, card_id: CardId) -> Result<(), DeckError> {
        if self.contains(&card_id) {
            return Err(DeckError::DuplicateCard(card_id));
        }
        self.entries.push(card_id);
        Ok(())
    }

    /// Remove the entry at a slot.
    pub fn remove(&mut self, slot: usize) -> Option<CardId> {
        (slot < self.entries.len()).then(|| self.entries.remove(slot))
    }

    /// Swap an entry with its predecessor. Returns false at the top.
    pub fn move_up(&mut self, slot: usize) -> bool {
        if slot == 0 || slot >= self.entries.len() {
            return false;
        }
        self.entries.swap(slot, slot - 1);
        true
    }

    /// Swap an entry with its successor. Returns false at the bottom.
    pub fn move_down(&mut self, slot: usize) -> bool {
        if slot + 1 >= self.entries.len() {
            return false;
        }
        self.entries.swap(slot, slot + 1);
        true
    }

    /// Check that the deck can be sent into `dungeon`.
    ///
    /// Verifies, in order: length matches the lineup, no duplicates, every
    /// card is owned. Returns the first problem found.
    pub fn check_for(&self, dungeon: &Dungeon, collection: &Collection) -> Result<(), DeckError> {
        let expected = dungeon.required_deck_size();
        if self.len() != expected {
            return Err(DeckError::LengthMismatch {
                expected,
                actual: self.len(),
            });
        }

        for (i, card_id) in self.entries.iter().enumerate() {
            if self.entries[..i].contains(card_id) {
                return Err(DeckError::DuplicateCard(card_id.clone()));
            }
        }

        if let Some(missing) = self.entries.iter().find(|id| !collection.contains(id)) {
            return Err(DeckError::NotOwned(missing.clone()));
        }

        Ok(())
    }
}

impl FromIterator<CardId> for Deck {
    /// Collects entries as given. Duplicates are kept so callers can build
    /// arbitrary decks for the engine.
    fn from_iter<I: IntoIterator<Item = CardId>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Deck {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(CardId::new).collect()
    }
}
