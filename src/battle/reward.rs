//! Victory rewards.
//!
//! After a won battle the player picks one card from their collection; it
//! receives the reward for the dungeon's type. Rewards are applied as value
//! updates: the input collection is left as it was and a new one is
//! returned, identical except for the chosen card.
//!
//! Rewards accumulate. Each call is a separate reward event.

use crate::cards::CardId;
use crate::collection::Collection;
use crate::core::{BonusStat, DungeonType, Reward, RewardTable};

/// Reward the default table grants for a dungeon type.
#[must_use]
pub fn reward_for(dungeon_type: DungeonType) -> Option<Reward> {
    RewardTable::default().reward_for(dungeon_type)
}

/// Apply the default reward for `dungeon_type` to one owned card.
///
/// ```
/// use dungeon_ccg::battle::apply_reward;
/// use dungeon_ccg::cards::CardId;
/// use dungeon_ccg::collection::Collection;
/// use dungeon_ccg::core::DungeonType;
///
/// let id = CardId::new("aragorn");
/// let before = Collection::new().acquire(id.clone());
/// let after = apply_reward(&before, &id, DungeonType::Minor);
///
/// assert_eq!(after.get(&id).unwrap().health_bonus, 2);
/// assert_eq!(before.get(&id).unwrap().health_bonus, 0);
/// ```
#[must_use]
pub fn apply_reward(
    collection: &Collection,
    card_id: &CardId,
    dungeon_type: DungeonType,
) -> Collection {
    apply_reward_with(&RewardTable::default(), collection, card_id, dungeon_type)
}

/// Apply the reward from a custom table.
///
/// Dungeon types without a reward, and card ids that are not in the
/// collection, pass the collection through unchanged.
#[must_use]
pub fn apply_reward_with(
    table: &RewardTable,
    collection: &Collection,
    card_id: &CardId,
    dungeon_type: DungeonType,
) -> Collection {
    let Some(reward) = table.reward_for(dungeon_type) else {
        tracing::debug!(%dungeon_type, "no reward for dungeon type");
        return collection.clone();
    };

    if !collection.contains(card_id) {
        tracing::warn!(card = %card_id, "reward target not in collection");
        return collection.clone();
    }

    tracing::info!(card = %card_id, %dungeon_type, %reward, "reward applied");

    collection.update(card_id, |card| match reward.stat {
        BonusStat::Damage => card.damage_bonus = card.damage_bonus.saturating_add(reward.amount),
        BonusStat::Health => card.health_bonus = card.health_bonus.saturating_add(reward.amount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::OwnedCard;

    fn collection() -> Collection {
        vec![
            OwnedCard::new(CardId::new("a")),
            OwnedCard::new(CardId::new("b")).with_bonus(1, 4),
        ]
        .into_iter()
        .collect()
    }

    fn bonus(collection: &Collection, id: &str) -> (i64, i64) {
        let card = collection.get(&CardId::new(id)).unwrap();
        (card.damage_bonus, card.health_bonus)
    }

    #[test]
    fn test_encounter_adds_one_damage() {
        let after = apply_reward(&collection(), &CardId::new("a"), DungeonType::Encounter);
        assert_eq!(bonus(&after, "a"), (1, 0));
    }

    #[test]
    fn test_minor_adds_two_health() {
        let after = apply_reward(&collection(), &CardId::new("b"), DungeonType::Minor);
        assert_eq!(bonus(&after, "b"), (1, 6));
    }

    #[test]
    fn test_major_adds_three_damage() {
        let after = apply_reward(&collection(), &CardId::new("a"), DungeonType::Major);
        assert_eq!(bonus(&after, "a"), (3, 0));
    }

    #[test]
    fn test_unknown_type_passes_through() {
        let before = collection();
        let after = apply_reward(&before, &CardId::new("a"), DungeonType::Unknown);
        assert_eq!(before, after);
    }

    #[test]
    fn test_unknown_card_passes_through() {
        let before = collection();
        let after = apply_reward(&before, &CardId::new("zzz"), DungeonType::Major);
        assert_eq!(before, after);
    }

    #[test]
    fn test_custom_table() {
        let table = RewardTable::empty().with_reward(DungeonType::Encounter, Reward::health(5));

        let after =
            apply_reward_with(&table, &collection(), &CardId::new("a"), DungeonType::Encounter);
        assert_eq!(bonus(&after, "a"), (0, 5));

        let untouched =
            apply_reward_with(&table, &collection(), &CardId::new("a"), DungeonType::Major);
        assert_eq!(untouched, collection());
    }

    #[test]
    fn test_reward_for() {
        assert_eq!(
            reward_for(DungeonType::Encounter).map(|r| r.to_string()).as_deref(),
            Some("+1 damage")
        );
        assert_eq!(reward_for(DungeonType::Unknown), None);
    }
}
