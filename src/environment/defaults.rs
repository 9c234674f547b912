//! Built-in starter environment.
//!
//! Six cards (one of them a leader), four starter cards and one dungeon of
//! each type. Useful for new installs, demos and tests.

use super::dungeon::{Dungeon, DungeonId};
use super::world::Environment;
use crate::cards::{CardDefinition, CardId};
use crate::core::{CardKind, DungeonType, Element};

impl Environment {
    /// The environment the game ships with.
    #[must_use]
    pub fn starter() -> Self {
        let darth = CardDefinition {
            kind: CardKind::Leader,
            source_card_id: Some(CardId::new("melian")),
            ..CardDefinition::new(CardId::new("darth-obiw"), "Darth ObiWan", 4, 2, Element::Fire)
        };

        let catalog = vec![
            CardDefinition::new(CardId::new("aragorn"), "Aragorn", 2, 5, Element::Fire),
            CardDefinition::new(CardId::new("galadriel"), "Galadriel", 3, 4, Element::Air),
            CardDefinition::new(CardId::new("durin"), "Durin", 4, 6, Element::Earth),
            CardDefinition::new(CardId::new("melian"), "Melian", 2, 3, Element::Water),
            CardDefinition::new(CardId::new("eldarion"), "Eldarion", 3, 6, Element::Earth),
            darth,
        ]
        .into_iter()
        .collect();

        let ids = |names: &[&str]| names.iter().map(|n| CardId::new(*n)).collect::<Vec<_>>();

        Self {
            id: "damareen-core".to_string(),
            name: "Damareen Core".to_string(),
            catalog,
            starter_collection: ids(&["aragorn", "galadriel", "melian", "eldarion"]),
            dungeons: vec![
                Dungeon::new(
                    DungeonId::new("enc-embers"),
                    "Ember Wisp",
                    DungeonType::Encounter,
                    ids(&["melian"]),
                ),
                Dungeon::new(
                    DungeonId::new("minor-depths"),
                    "The Crystal Warden",
                    DungeonType::Minor,
                    ids(&["aragorn", "melian", "galadriel", "darth-obiw"]),
                ),
                Dungeon::new(
                    DungeonId::new("major-queen"),
                    "Queen of the Deep",
                    DungeonType::Major,
                    ids(&["durin", "melian", "galadriel", "aragorn", "eldarion", "darth-obiw"]),
                ),
            ],
        }
    }
}
