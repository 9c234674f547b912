//! Decks: the ordered cards a player sends into a dungeon.

pub mod ordering;

pub use ordering::{Deck, DeckError};
