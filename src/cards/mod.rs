//! Card system: definitions and catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Base stats, element and kind of a card
//! - `LeaderBoost`: Which stat a derived leader doubles
//! - `CardCatalog`: Card definition lookup for one environment

pub mod definition;
pub mod registry;

pub use definition::{CardDefinition, CardId, LeaderBoost, MAX_STAT};
pub use registry::{CardCatalog, CatalogError};
