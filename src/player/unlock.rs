use bevy::prelude::*;

use crate::shared::*;

/// Send this event to unlock a recipe for the player. Any domain can send
/// it (a quest reward, a purchased recipe card); the player domain owns the
/// ledger mutation.
#[derive(Event, Debug, Clone)]
pub struct UnlockRecipeEvent {
    pub recipe_id: RecipeId,
}

/// Runs once when entering Playing. Grants every catalog recipe flagged
/// `unlocked_by_default` that the ledger does not already have. Idempotent,
/// so re-entering Playing after a load changes nothing.
pub fn grant_default_unlocks(mut ledger: ResMut<PlayerLedger>, recipes: Res<RecipeRegistry>) {
    let default_ids: Vec<RecipeId> = recipes
        .all()
        .filter(|r| r.unlocked_by_default)
        .map(|r| r.id)
        .collect();

    let mut newly_unlocked = 0usize;
    for id in default_ids {
        if ledger.unlock_recipe(id) {
            newly_unlocked += 1;
        }
    }

    if newly_unlocked > 0 {
        info!(
            "PlayerPlugin: unlocked {} default recipes ({} total)",
            newly_unlocked,
            ledger.unlocked_recipes().len()
        );
    }
}

/// Handles UnlockRecipeEvent — adds the recipe to the player's unlocked set
/// and announces it. Unknown ids are rejected here, so the ledger only
/// accumulates real recipes through this path.
pub fn handle_unlock_recipe(
    mut events: EventReader<UnlockRecipeEvent>,
    mut ledger: ResMut<PlayerLedger>,
    recipes: Res<RecipeRegistry>,
    mut unlocked_events: EventWriter<RecipeUnlockedEvent>,
) {
    for event in events.read() {
        let recipe_id = event.recipe_id;

        if recipes.get(recipe_id).is_none() {
            warn!("UnlockRecipeEvent: recipe {} not found in catalog", recipe_id);
            continue;
        }

        if ledger.unlock_recipe(recipe_id) {
            info!("Unlocked recipe {}", recipe_id);
            unlocked_events.send(RecipeUnlockedEvent { recipe_id });
        }
        // Already unlocked — no-op (not an error)
    }
}
