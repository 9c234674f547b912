//! Card elements and the elemental advantage cycle.
//!
//! Every card belongs to exactly one of four elements. Advantage is cyclic:
//!
//! ```text
//! fire -> earth -> water -> air -> fire
//! ```
//!
//! Read `a -> b` as "a beats b". No element beats itself, and for any pair
//! at most one side holds the advantage.

use serde::{Deserialize, Serialize};

/// One of the four card elements.
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
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Element {
    Earth,
    Water,
    Air,
    Fire,
}

impl Element {
    /// The element this one holds the advantage over.
    ///
    /// ```
    /// use dungeon_ccg::core::Element;
    ///
    /// assert_eq!(Element::Fire.prey(), Element::Earth);
    /// assert_eq!(Element::Air.prey(), Element::Fire);
    /// ```
    #[must_use]
    pub const fn prey(self) -> Self {
        match self {
            Element::Fire => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Air,
            Element::Air => Element::Fire,
        }
    }

    /// Check if this element beats `other`.
    #[must_use]
    pub fn beats(self, other: Element) -> bool {
        self.prey() == other
    }
}
