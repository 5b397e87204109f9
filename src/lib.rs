//! Little Gourmet core — the catalog, the player ledger, and the cooking
//! session state machine, packaged as headless Bevy plugins.
//!
//! The UI shell (scenes, menus, rendering) lives elsewhere. It adds
//! [`LittleGourmetPlugin`] to its `App`, reads the shared resources for
//! display, and drives play by sending the domain events. Bevy's
//! `StatesPlugin` must be on the app first (it is part of `DefaultPlugins`;
//! headless apps add it next to `MinimalPlugins`).

pub mod cooking;
pub mod data;
pub mod economy;
pub mod player;
pub mod progress;
pub mod save;
pub mod shared;

use bevy::prelude::*;

use shared::*;

/// Everything the game logic needs on one `App`: the state machine, the
/// shared resources and events, and every domain plugin.
pub struct LittleGourmetPlugin;

impl Plugin for LittleGourmetPlugin {
    fn build(&self, app: &mut App) {
        app
            // Game state
            .init_state::<GameState>()
            // Shared resources
            .init_resource::<IngredientRegistry>()
            .init_resource::<RecipeRegistry>()
            .init_resource::<PlayerLedger>()
            .init_resource::<CookingSession>()
            .init_resource::<PlayStats>()
            .init_resource::<Achievements>()
            // Shared events
            .add_event::<CookingFinishedEvent>()
            .add_event::<CookingCancelledEvent>()
            .add_event::<RecipeUnlockedEvent>()
            .add_event::<LevelUpEvent>()
            .add_event::<MarketTransactionEvent>()
            .add_event::<AchievementUnlockedEvent>()
            // Domain plugins
            .add_plugins(data::DataPlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(cooking::CookingPlugin)
            .add_plugins(economy::EconomyPlugin)
            .add_plugins(progress::ProgressPlugin)
            .add_plugins(save::SavePlugin);
    }
}
