//! Achievement system for Little Gourmet.
//!
//! Defines the achievement table, checks conditions during play, and fires
//! `AchievementUnlockedEvent` when a new achievement is earned. Earned ids
//! accumulate in the `Achievements` resource and persist with the profile.

use bevy::prelude::*;

use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// ACHIEVEMENT DEFINITIONS
// ═══════════════════════════════════════════════════════════════════════

/// Static description of a single achievement.
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "first_dish",
        name: "Apprentice Cook",
        description: "Cook your first dish",
    },
    AchievementDef {
        id: "home_cook",
        name: "Home Cook",
        description: "Cook 10 dishes",
    },
    AchievementDef {
        id: "kitchen_veteran",
        name: "Kitchen Veteran",
        description: "Cook 50 dishes",
    },
    AchievementDef {
        id: "baking_master",
        name: "Baking Master",
        description: "Cook 5 baked dishes",
    },
    AchievementDef {
        id: "soup_specialist",
        name: "Soup Specialist",
        description: "Cook 5 soups",
    },
    AchievementDef {
        id: "seasoned_chef",
        name: "Seasoned Chef",
        description: "Reach level 5",
    },
    AchievementDef {
        id: "recipe_collector",
        name: "Recipe Collector",
        description: "Unlock every recipe in the book",
    },
    AchievementDef {
        id: "well_stocked",
        name: "Well Stocked",
        description: "Hold 8 different ingredients at once",
    },
    AchievementDef {
        id: "gourmet_fortune",
        name: "Gourmet Fortune",
        description: "Earn 1,000 gold in total",
    },
];

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Checks every locked achievement against the current counters and fires
/// `AchievementUnlockedEvent` once per id.
pub fn check_achievements(
    stats: Res<PlayStats>,
    ledger: Res<PlayerLedger>,
    recipes: Res<RecipeRegistry>,
    mut achievements: ResMut<Achievements>,
    mut events: EventWriter<AchievementUnlockedEvent>,
) {
    for def in ACHIEVEMENTS {
        if achievements.is_unlocked(def.id) {
            continue;
        }
        if condition_met(def.id, &stats, &ledger, &recipes) {
            achievements.unlocked.push(def.id.to_string());
            info!("Achievement unlocked: {} — {}", def.name, def.description);
            events.send(AchievementUnlockedEvent {
                id: def.id,
                name: def.name,
            });
        }
    }
}

fn cooked_in_category(stats: &PlayStats, category: RecipeCategory) -> u32 {
    stats.dishes_by_category.get(&category).copied().unwrap_or(0)
}

fn condition_met(
    id: &str,
    stats: &PlayStats,
    ledger: &PlayerLedger,
    recipes: &RecipeRegistry,
) -> bool {
    match id {
        "first_dish" => stats.dishes_cooked >= 1,
        "home_cook" => stats.dishes_cooked >= 10,
        "kitchen_veteran" => stats.dishes_cooked >= 50,
        "baking_master" => cooked_in_category(stats, RecipeCategory::Baking) >= 5,
        "soup_specialist" => cooked_in_category(stats, RecipeCategory::Soup) >= 5,
        "seasoned_chef" => ledger.level() >= 5,
        "recipe_collector" => {
            !recipes.is_empty() && recipes.all().all(|r| ledger.is_unlocked(r.id))
        }
        "well_stocked" => ledger.summary().pantry_entries >= 8,
        "gourmet_fortune" => stats.total_gold_earned >= 1_000,
        _ => false,
    }
}
