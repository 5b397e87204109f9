use bevy::prelude::*;

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────────────────

/// The market stall the player is browsing, with its listings ready for the
/// UI to display. Rebuilt each time the market opens.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveMarket {
    pub listings: Vec<MarketListing>,
    /// Notification line shown after a transaction.
    pub feedback_message: Option<String>,
}

/// A single entry on the market board, enriched with catalog info.
#[derive(Debug, Clone)]
pub struct MarketListing {
    pub ingredient_id: IngredientId,
    pub display_name: String,
    pub buy_price: u32,
    /// What the player receives when selling one back.
    pub sell_price: u32,
    /// Shown as a tag next to seasonal produce.
    pub season: Option<Season>,
    pub can_afford: bool, // cached against gold at open — UI re-reads per frame
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Send to open the market (transitions to GameState::Market).
#[derive(Event, Debug, Clone)]
pub struct OpenMarketEvent;

/// Send to leave the market and return to the hub.
#[derive(Event, Debug, Clone)]
pub struct CloseMarketEvent;

/// Fired by the UI when the player confirms a purchase.
#[derive(Event, Debug, Clone)]
pub struct BuyIngredientEvent {
    pub ingredient_id: IngredientId,
    pub quantity: u32,
}

/// Fired by the UI when the player confirms selling from the pantry.
#[derive(Event, Debug, Clone)]
pub struct SellIngredientEvent {
    pub ingredient_id: IngredientId,
    pub quantity: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Runs in Playing — opens the market and builds the listing set.
pub fn handle_open_market(
    mut events: EventReader<OpenMarketEvent>,
    mut next_state: ResMut<NextState<GameState>>,
    mut market: ResMut<ActiveMarket>,
    ingredients: Res<IngredientRegistry>,
    ledger: Res<PlayerLedger>,
) {
    for _event in events.read() {
        *market = ActiveMarket {
            listings: build_listings(&ingredients, ledger.gold()),
            feedback_message: None,
        };

        info!("[Economy] Market opened with {} listings", market.listings.len());
        next_state.set(GameState::Market);
    }
}

/// Runs in Market — returns to the hub.
pub fn handle_close_market(
    mut events: EventReader<CloseMarketEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if events.read().next().is_some() {
        info!("[Economy] Market closed");
        next_state.set(GameState::Playing);
    }
}

/// Runs in Market — spends gold and stocks the pantry. All-or-nothing: a
/// purchase the player cannot afford changes nothing.
pub fn handle_buy_ingredient(
    mut events: EventReader<BuyIngredientEvent>,
    mut ledger: ResMut<PlayerLedger>,
    ingredients: Res<IngredientRegistry>,
    mut market: ResMut<ActiveMarket>,
    mut tx_events: EventWriter<MarketTransactionEvent>,
) {
    for event in events.read() {
        if event.quantity == 0 {
            continue;
        }

        let Some(def) = ingredients.get(event.ingredient_id) else {
            warn!("buy: ingredient {} not found in catalog", event.ingredient_id);
            continue;
        };

        let total = def.base_price.saturating_mul(event.quantity);
        if !ledger.spend_gold(total) {
            warn!(
                "[Economy] Cannot afford {} x{} ({}g, have {}g)",
                def.name,
                event.quantity,
                total,
                ledger.gold()
            );
            market.feedback_message =
                Some(format!("Not enough gold for {} x{}", def.name, event.quantity));
            continue;
        }

        ledger.add_item(def.id, event.quantity);
        info!(
            "[Economy] Bought {} x{} for {}g. Balance: {}g",
            def.name,
            event.quantity,
            total,
            ledger.gold()
        );
        market.feedback_message = Some(format!("Bought {} x{}", def.name, event.quantity));

        tx_events.send(MarketTransactionEvent {
            ingredient_id: def.id,
            quantity: event.quantity,
            total_gold: total,
            is_purchase: true,
        });
    }
}

/// Runs in Market — sells pantry stock back at half price. Fails without
/// mutating when the pantry holds less than the requested quantity.
pub fn handle_sell_ingredient(
    mut events: EventReader<SellIngredientEvent>,
    mut ledger: ResMut<PlayerLedger>,
    ingredients: Res<IngredientRegistry>,
    mut market: ResMut<ActiveMarket>,
    mut tx_events: EventWriter<MarketTransactionEvent>,
) {
    for event in events.read() {
        if event.quantity == 0 {
            continue;
        }

        let Some(def) = ingredients.get(event.ingredient_id) else {
            warn!("sell: ingredient {} not found in catalog", event.ingredient_id);
            continue;
        };

        if !ledger.remove_item(def.id, event.quantity) {
            warn!(
                "[Economy] Cannot sell {} x{}: only {} in the pantry",
                def.name,
                event.quantity,
                ledger.quantity_of(def.id)
            );
            market.feedback_message =
                Some(format!("Not enough {} to sell", def.name));
            continue;
        }

        let total = sell_price(def.base_price).saturating_mul(event.quantity);
        ledger.add_gold(total);
        info!(
            "[Economy] Sold {} x{} for {}g. Balance: {}g",
            def.name,
            event.quantity,
            total,
            ledger.gold()
        );
        market.feedback_message = Some(format!("Sold {} x{}", def.name, event.quantity));

        tx_events.send(MarketTransactionEvent {
            ingredient_id: def.id,
            quantity: event.quantity,
            total_gold: total,
            is_purchase: false,
        });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Every catalog ingredient as a listing, in catalog load order.
pub fn build_listings(ingredients: &IngredientRegistry, gold: u32) -> Vec<MarketListing> {
    ingredients
        .all()
        .map(|def| MarketListing {
            ingredient_id: def.id,
            display_name: def.name.clone(),
            buy_price: def.base_price,
            sell_price: sell_price(def.base_price),
            season: def.season,
            can_afford: gold >= def.base_price,
        })
        .collect()
}
