use bevy::prelude::*;

use crate::shared::*;

mod unlock;

pub use unlock::UnlockRecipeEvent;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<UnlockRecipeEvent>()
            // Reconcile ledger unlocks with the catalog's default flags once
            // the player enters the game proper.
            .add_systems(OnEnter(GameState::Playing), unlock::grant_default_unlocks)
            .add_systems(
                Update,
                unlock::handle_unlock_recipe.run_if(
                    in_state(GameState::Playing)
                        .or(in_state(GameState::Kitchen))
                        .or(in_state(GameState::Market)),
                ),
            );
    }
}
