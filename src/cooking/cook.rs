use bevy::prelude::*;

use super::kitchen::KitchenUiState;
use crate::shared::*;

// ──────────────────────────────────────────────────────────────────────────────
// EVENTS
// ──────────────────────────────────────────────────────────────────────────────

/// Send to begin cooking a recipe. The UI sends this when the player
/// confirms a selection.
#[derive(Event, Debug, Clone)]
pub struct StartCookingEvent {
    pub recipe_id: RecipeId,
}

/// Send when the player finishes the current instruction.
#[derive(Event, Debug, Clone)]
pub struct AdvanceStepEvent;

/// Send to abandon the dish. Consumed ingredients stay consumed.
#[derive(Event, Debug, Clone)]
pub struct CancelCookingEvent;

// ──────────────────────────────────────────────────────────────────────────────
// SYSTEMS
// ──────────────────────────────────────────────────────────────────────────────

/// Runs in Kitchen — starts a session for each StartCookingEvent. On
/// failure the ledger and session are untouched; the reason lands in the
/// log and the kitchen feedback line.
pub fn handle_start_cooking(
    mut events: EventReader<StartCookingEvent>,
    mut session: ResMut<CookingSession>,
    mut ledger: ResMut<PlayerLedger>,
    recipes: Res<RecipeRegistry>,
    ingredients: Res<IngredientRegistry>,
    mut ui_state: ResMut<KitchenUiState>,
) {
    for event in events.read() {
        match session.start(event.recipe_id, &recipes, &mut ledger) {
            Ok(()) => {
                let name = session
                    .active_recipe()
                    .map(|r| r.name.clone())
                    .unwrap_or_default();
                info!("Started cooking {}", name);
                ui_state.set_feedback(format!("Now cooking: {}", name));
            }
            Err(CookingError::AlreadyCooking) => {
                warn!(
                    "start cooking {}: a dish is already in progress",
                    event.recipe_id
                );
                ui_state.set_feedback("Finish or abandon the current dish first");
            }
            Err(CookingError::UnknownRecipe) => {
                warn!("start cooking {}: recipe not found", event.recipe_id);
            }
            Err(CookingError::RecipeLocked) => {
                warn!("start cooking {}: recipe not unlocked", event.recipe_id);
                ui_state.set_feedback("You have not learned that recipe yet");
            }
            Err(CookingError::MissingIngredients) => {
                // The id resolved above, so the lookup cannot miss here.
                if let Some(recipe) = recipes.get(event.recipe_id) {
                    let missing = missing_ingredients_description(recipe, &ledger, &ingredients);
                    warn!("Cannot cook '{}' — missing: {}", recipe.name, missing);
                    ui_state.set_feedback(format!("Missing ingredients: {}", missing));
                }
            }
        }
    }
}

/// Runs in Kitchen — moves the session forward one step per
/// AdvanceStepEvent. Completion pays out through the ledger and is
/// announced with CookingFinishedEvent (plus LevelUpEvent when the
/// experience crossed a threshold).
pub fn handle_advance_step(
    mut events: EventReader<AdvanceStepEvent>,
    mut session: ResMut<CookingSession>,
    mut ledger: ResMut<PlayerLedger>,
    mut ui_state: ResMut<KitchenUiState>,
    mut finished_events: EventWriter<CookingFinishedEvent>,
    mut level_events: EventWriter<LevelUpEvent>,
) {
    for _event in events.read() {
        match session.advance_step(&mut ledger) {
            StepAdvance::NotCooking => {
                warn!("advance step: no dish in progress");
            }
            StepAdvance::MoreSteps => {
                if let Some(step) = session.current_step() {
                    info!(
                        "Step {}/{}: {}",
                        step.step, step.total_steps, step.instruction
                    );
                }
            }
            StepAdvance::Finished { reward } => {
                info!(
                    "Finished cooking {} (+{} xp, +{} gold)",
                    reward.recipe_name, reward.experience, reward.gold
                );
                ui_state.set_feedback(format!(
                    "{} is ready! +{} xp, +{} gold",
                    reward.recipe_name, reward.experience, reward.gold
                ));

                if let Some(new_level) = reward.new_level {
                    info!("Level up! Now level {}", new_level);
                    level_events.send(LevelUpEvent { new_level });
                }

                finished_events.send(CookingFinishedEvent {
                    recipe_id: reward.recipe_id,
                    recipe_name: reward.recipe_name,
                    experience: reward.experience,
                    gold: reward.gold,
                });
            }
        }
    }
}

/// Runs in Kitchen — abandons the dish on CancelCookingEvent.
pub fn handle_cancel_cooking(
    mut events: EventReader<CancelCookingEvent>,
    mut session: ResMut<CookingSession>,
    mut ui_state: ResMut<KitchenUiState>,
    mut cancelled_events: EventWriter<CookingCancelledEvent>,
) {
    for _event in events.read() {
        let Some(recipe_id) = session.active_recipe().map(|r| r.id) else {
            warn!("cancel cooking: no dish in progress");
            continue;
        };

        session.cancel();
        info!("Cooking cancelled");
        ui_state.set_feedback("Dish abandoned");
        cancelled_events.send(CookingCancelledEvent { recipe_id });
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// HELPERS
// ──────────────────────────────────────────────────────────────────────────────

/// Human-readable list of the ingredient lines the pantry cannot cover.
fn missing_ingredients_description(
    recipe: &RecipeDef,
    ledger: &PlayerLedger,
    ingredients: &IngredientRegistry,
) -> String {
    let mut parts = Vec::new();
    for req in &recipe.ingredients {
        let have = ledger.quantity_of(req.ingredient_id);
        if have < req.quantity {
            let name = ingredients
                .get(req.ingredient_id)
                .map(|d| d.name.as_str())
                .unwrap_or("unknown ingredient");
            parts.push(format!("{} (have {}/{})", name, have, req.quantity));
        }
    }
    parts.join(", ")
}
