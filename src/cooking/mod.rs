use bevy::prelude::*;

use crate::shared::*;

mod cook;
mod kitchen;

pub use cook::{AdvanceStepEvent, CancelCookingEvent, StartCookingEvent};
pub use kitchen::{CloseKitchenEvent, KitchenUiState, OpenKitchenEvent};

pub struct CookingPlugin;

impl Plugin for CookingPlugin {
    fn build(&self, app: &mut App) {
        app
            // Cooking-specific resources
            .init_resource::<KitchenUiState>()
            // Cooking-specific events
            .add_event::<OpenKitchenEvent>()
            .add_event::<CloseKitchenEvent>()
            .add_event::<StartCookingEvent>()
            .add_event::<AdvanceStepEvent>()
            .add_event::<CancelCookingEvent>()
            // Open the kitchen from the hub
            .add_systems(
                Update,
                kitchen::handle_open_kitchen.run_if(in_state(GameState::Playing)),
            )
            // Kitchen state systems
            .add_systems(
                Update,
                (
                    cook::handle_start_cooking,
                    cook::handle_advance_step,
                    cook::handle_cancel_cooking,
                    kitchen::handle_close_kitchen,
                )
                    .run_if(in_state(GameState::Kitchen)),
            );
    }
}
