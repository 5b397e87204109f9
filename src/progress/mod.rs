use bevy::prelude::*;

use crate::shared::*;

mod achievements;
mod stats;

pub use achievements::{AchievementDef, ACHIEVEMENTS};

pub struct ProgressPlugin;

impl Plugin for ProgressPlugin {
    fn build(&self, app: &mut App) {
        let in_game = in_state(GameState::Playing)
            .or(in_state(GameState::Kitchen))
            .or(in_state(GameState::Market));

        app.add_systems(
            Update,
            (
                stats::track_cooking_finished,
                stats::track_cooking_cancelled,
                stats::track_market_transactions,
                achievements::check_achievements,
            )
                .run_if(in_game),
        );
    }
}
