//! Battle orchestration.
//!
//! Walks the dungeon lineup, pairs each dungeon card with the deck entry in
//! the same slot, resolves the round and collects the results.
//!
//! The lineup length fixes the number of rounds. Extra deck entries are
//! never looked at; a short deck loses its uncovered rounds. Any card that
//! cannot be resolved (not in the catalog, deck slot empty, not owned)
//! turns the round into an automatic dungeon win with a missing-card
//! reason. Battles never fail.

use std::time::{SystemTime, UNIX_EPOCH};

use super::resolver::{resolve_round, ResolvedCard, RoundOutcome};
use super::result::{BattleResult, BattleRoundResult};
use crate::collection::Collection;
use crate::deck::Deck;
use crate::environment::{Dungeon, Environment};

/// Run a battle, stamped with the current wall-clock time.
///
/// Apart from the timestamp the result depends only on the inputs. Use
/// [`run_battle_at`] when the stamp must be reproducible too.
#[must_use]
pub fn run_battle(
    environment: &Environment,
    deck: &Deck,
    dungeon: &Dungeon,
    collection: &Collection,
) -> BattleResult {
    run_battle_at(environment, deck, dungeon, collection, now_ms())
}

/// Run a battle with a caller-supplied completion timestamp.
#[must_use]
pub fn run_battle_at(
    environment: &Environment,
    deck: &Deck,
    dungeon: &Dungeon,
    collection: &Collection,
    timestamp_ms: u64,
) -> BattleResult {
    let catalog = &environment.catalog;
    let owned = collection.index();
    let mut rounds = Vec::with_capacity(dungeon.card_order.len());

    for (slot, dungeon_card_id) in dungeon.card_order.iter().enumerate() {
        let player_card_id = deck.get(slot);

        let dungeon_card = catalog.get(dungeon_card_id).map(ResolvedCard::base);
        let player_card = player_card_id
            .and_then(|id| owned.get(id))
            .and_then(|owned_card| {
                catalog
                    .get(&owned_card.card_id)
                    .map(|definition| ResolvedCard::with_bonus(definition, owned_card))
            });

        let outcome = match (player_card, dungeon_card) {
            (Some(player), Some(dungeon)) => resolve_round(&player, &dungeon),
            _ => {
                tracing::warn!(
                    round = slot + 1,
                    dungeon_card = %dungeon_card_id,
                    player_card = ?player_card_id.map(|id| id.as_str()),
                    "card data missing, round goes to the dungeon"
                );
                RoundOutcome::missing_card()
            }
        };

        tracing::debug!(
            round = slot + 1,
            winner = %outcome.winner,
            reason = %outcome.reason.category(),
            "round resolved"
        );

        rounds.push(BattleRoundResult {
            round: slot + 1,
            player_card_id: player_card_id.cloned(),
            dungeon_card_id: dungeon_card_id.clone(),
            winner: outcome.winner,
            reason: outcome.reason,
        });
    }

    let result = BattleResult::from_rounds(dungeon.id.clone(), rounds, timestamp_ms);

    tracing::info!(
        dungeon = %dungeon.id,
        player_wins = result.player_wins(),
        dungeon_wins = result.dungeon_wins(),
        victory = result.player_victory(),
        "battle finished"
    );

    result
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
