//! Player collections: owned cards and their earned bonuses.

pub mod owned;

pub use owned::{Collection, CollectionError, OwnedCard};
