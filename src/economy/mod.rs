use bevy::prelude::*;

use crate::shared::*;

mod market;

pub use market::{
    ActiveMarket, BuyIngredientEvent, CloseMarketEvent, MarketListing, OpenMarketEvent,
    SellIngredientEvent,
};

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveMarket>()
            .add_event::<OpenMarketEvent>()
            .add_event::<CloseMarketEvent>()
            .add_event::<BuyIngredientEvent>()
            .add_event::<SellIngredientEvent>()
            .add_systems(
                Update,
                market::handle_open_market.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    market::handle_buy_ingredient,
                    market::handle_sell_ingredient,
                    market::handle_close_market,
                )
                    .run_if(in_state(GameState::Market)),
            );
    }
}
