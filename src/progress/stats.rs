//! PlayStats tracker — passive event listeners that increment global play
//! counters. No game logic changes here; this module is purely
//! observational.

use bevy::prelude::*;

use crate::shared::*;

/// Increments the cooked-dish counters for every `CookingFinishedEvent`.
/// The dish's gold payout also counts toward lifetime income.
pub fn track_cooking_finished(
    mut events: EventReader<CookingFinishedEvent>,
    recipes: Res<RecipeRegistry>,
    mut stats: ResMut<PlayStats>,
) {
    for ev in events.read() {
        stats.dishes_cooked = stats.dishes_cooked.saturating_add(1);
        stats.total_gold_earned = stats.total_gold_earned.saturating_add(ev.gold as u64);

        if let Some(recipe) = recipes.get(ev.recipe_id) {
            let entry = stats.dishes_by_category.entry(recipe.category).or_insert(0);
            *entry = entry.saturating_add(1);
        }

        info!(
            "[Progress] '{}' cooked. {} dishes total",
            ev.recipe_name, stats.dishes_cooked
        );
    }
}

/// Counts abandoned dishes.
pub fn track_cooking_cancelled(
    mut events: EventReader<CookingCancelledEvent>,
    mut stats: ResMut<PlayStats>,
) {
    for _ev in events.read() {
        stats.cooks_cancelled = stats.cooks_cancelled.saturating_add(1);
    }
}

/// Counts market traffic. Sales also count toward lifetime gold income;
/// purchases are spending and do not.
pub fn track_market_transactions(
    mut events: EventReader<MarketTransactionEvent>,
    mut stats: ResMut<PlayStats>,
) {
    for ev in events.read() {
        if ev.is_purchase {
            stats.ingredients_bought = stats.ingredients_bought.saturating_add(ev.quantity as u64);
        } else {
            stats.ingredients_sold = stats.ingredients_sold.saturating_add(ev.quantity as u64);
            stats.total_gold_earned =
                stats.total_gold_earned.saturating_add(ev.total_gold as u64);
        }
    }
}
