use bevy::prelude::*;

use crate::shared::*;

// ──────────────────────────────────────────────────────────────────────────────
// KITCHEN UI STATE
// ──────────────────────────────────────────────────────────────────────────────

/// Resource tracking the state of the kitchen screen while in
/// GameState::Kitchen. The UI shell renders from this; the logic here only
/// keeps it coherent.
#[derive(Resource, Debug, Clone, Default)]
pub struct KitchenUiState {
    /// Unlocked recipe ids shown in the selection list, in unlock order.
    pub available_recipes: Vec<RecipeId>,
    /// Index of the currently highlighted recipe.
    pub selected_index: usize,
    /// Notification line shown after an action (e.g. "Fried Egg is ready!").
    pub feedback_message: Option<String>,
}

impl KitchenUiState {
    pub fn selected_recipe_id(&self) -> Option<RecipeId> {
        self.available_recipes.get(self.selected_index).copied()
    }

    pub fn move_selection_up(&mut self) {
        if !self.available_recipes.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.available_recipes.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    pub fn move_selection_down(&mut self) {
        if !self.available_recipes.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.available_recipes.len();
        }
    }

    pub fn set_feedback(&mut self, msg: impl Into<String>) {
        self.feedback_message = Some(msg.into());
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// EVENTS
// ──────────────────────────────────────────────────────────────────────────────

/// Send to open the kitchen (transitions to GameState::Kitchen).
#[derive(Event, Debug, Clone)]
pub struct OpenKitchenEvent;

/// Send to leave the kitchen and return to the hub.
#[derive(Event, Debug, Clone)]
pub struct CloseKitchenEvent;

// ──────────────────────────────────────────────────────────────────────────────
// SYSTEMS
// ──────────────────────────────────────────────────────────────────────────────

/// Runs in Playing — listens for OpenKitchenEvent and transitions to
/// Kitchen. Populates KitchenUiState with the player's unlocked recipes.
pub fn handle_open_kitchen(
    mut events: EventReader<OpenKitchenEvent>,
    mut next_state: ResMut<NextState<GameState>>,
    mut ui_state: ResMut<KitchenUiState>,
    ledger: Res<PlayerLedger>,
    recipes: Res<RecipeRegistry>,
) {
    for _event in events.read() {
        // Unlock order, filtered to ids the catalog actually knows.
        let available: Vec<RecipeId> = ledger
            .unlocked_recipes()
            .iter()
            .copied()
            .filter(|&id| recipes.get(id).is_some())
            .collect();

        *ui_state = KitchenUiState {
            available_recipes: available,
            selected_index: 0,
            feedback_message: None,
        };

        info!(
            "Opening kitchen with {} recipes",
            ui_state.available_recipes.len()
        );

        next_state.set(GameState::Kitchen);
    }
}

/// Runs in Kitchen — CloseKitchenEvent returns to Playing. Leaving the
/// kitchen abandons any dish still on the stove; the consumed ingredients
/// stay consumed.
pub fn handle_close_kitchen(
    mut events: EventReader<CloseKitchenEvent>,
    mut next_state: ResMut<NextState<GameState>>,
    mut session: ResMut<CookingSession>,
    mut cancelled_events: EventWriter<CookingCancelledEvent>,
) {
    if events.read().next().is_none() {
        return;
    }

    if let Some(recipe_id) = session.active_recipe().map(|r| r.id) {
        if session.cancel() {
            info!("Kitchen closed mid-cook; dish abandoned");
            cancelled_events.send(CookingCancelledEvent { recipe_id });
        }
    }

    info!("Closing kitchen");
    next_state.set(GameState::Playing);
}
