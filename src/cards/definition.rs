//! Card definitions - static card data.
//!
//! `CardDefinition` holds the catalog properties of a card: its base damage,
//! base health and element. These never change once a card is authored,
//! apart from cosmetic fields the engine never reads.
//!
//! Per-player growth (reward bonuses) is stored separately in
//! [`OwnedCard`](crate::collection::OwnedCard).

use serde::{Deserialize, Serialize};

use crate::core::{CardKind, Element};

/// Upper bound applied when a leader doubles a stat.
pub const MAX_STAT: i64 = 200;

/// Unique identifier for a card definition.
///
/// Catalog ids are short slugs such as `"aragorn"` or `"leader-3f2a"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
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

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which stat a leader card doubles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaderBoost {
    DoubleDamage,
    DoubleHealth,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use dungeon_ccg::cards::{CardDefinition, CardId};
/// use dungeon_ccg::core::Element;
///
/// let durin = CardDefinition::new(CardId::new("durin"), "Durin", 4, 6, Element::Earth);
///
/// assert_eq!(durin.damage, 4);
/// assert!(durin.is_standard());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Base damage.
    pub damage: i64,

    /// Base health.
    pub health: i64,

    /// Element used for advantage checks.
    pub element: Element,

    /// Standard or leader.
    #[serde(default)]
    pub kind: CardKind,

    /// Standard card a leader was derived from. Provenance only.
    #[serde(default)]
    pub source_card_id: Option<CardId>,

    /// Cosmetic background image reference.
    #[serde(default)]
    pub background_image: Option<String>,
}

impl CardDefinition {
    /// Create a standard card definition.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        damage: i64,
        health: i64,
        element: Element,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            damage,
            health,
            element,
            kind: CardKind::Standard,
            source_card_id: None,
            background_image: None,
        }
    }

    /// Derive a leader card from a standard card.
    ///
    /// The boosted stat is doubled and capped at [`MAX_STAT`]. The element
    /// and the other stat are copied from `base`.
    #[must_use]
    pub fn derive_leader(
        base: &CardDefinition,
        id: CardId,
        name: impl Into<String>,
        boost: LeaderBoost,
    ) -> Self {
        let (damage, health) = match boost {
            LeaderBoost::DoubleDamage => (base.damage.saturating_mul(2).min(MAX_STAT), base.health),
            LeaderBoost::DoubleHealth => (base.damage, base.health.saturating_mul(2).min(MAX_STAT)),
        };

        Self {
            id,
            name: name.into(),
            damage,
            health,
            element: base.element,
            kind: CardKind::Leader,
            source_card_id: Some(base.id.clone()),
            background_image: None,
        }
    }

    /// Set the background image (builder pattern).
    #[must_use]
    pub fn with_background_image(mut self, image: impl Into<String>) -> Self {
        self.background_image = Some(image.into());
        self
    }

    /// Check if this is a standard card.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.kind == CardKind::Standard
    }

    /// Check if this is a leader card.
    #[must_use]
    pub fn is_leader(&self) -> bool {
        self.kind == CardKind::Leader
    }
}
