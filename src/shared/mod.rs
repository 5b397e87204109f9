//! Shared types, resources, and events for Little Gourmet.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    MainMenu,
    Playing,
    Kitchen,
    Market,
}

// ═══════════════════════════════════════════════════════════════════════
// CATALOG — immutable reference data, loaded once at startup
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for an ingredient in the catalog.
pub type IngredientId = u32;

/// Unique identifier for a recipe in the catalog.
pub type RecipeId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientCategory {
    Fruit,
    Grain,
    Egg,
    Dairy,
    Vegetable,
    Seasoning,
}

/// A consumable cooking resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientDef {
    pub id: IngredientId,
    pub name: String,
    pub category: IngredientCategory,
    /// How long the ingredient stays fresh after purchase, in hours.
    pub freshness_hours: u32,
    /// Market price per unit, in gold.
    pub base_price: u32,
    /// `None` = available all year.
    pub season: Option<Season>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeCategory {
    Baking,
    QuickDish,
    Soup,
    Dessert,
}

/// One required ingredient line of a recipe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient_id: IngredientId,
    pub quantity: u32,
}

/// A named, multi-step dish with an ingredient cost and a reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDef {
    pub id: RecipeId,
    pub name: String,
    pub category: RecipeCategory,
    pub description: String,
    /// Required ingredients, in the order they are consumed.
    pub ingredients: Vec<RecipeIngredient>,
    /// Instruction text, one entry per cooking step.
    pub steps: Vec<String>,
    pub difficulty: u32,
    /// Nominal preparation time shown on the recipe card, in minutes.
    pub time_required_minutes: u32,
    /// Gold granted when the dish is completed.
    pub base_price: u32,
    pub unlocked_by_default: bool,
}

/// All known ingredients, keyed by id. Read-only after the data plugin
/// has populated it.
#[derive(Resource, Debug, Clone, Default)]
pub struct IngredientRegistry {
    by_id: HashMap<IngredientId, IngredientDef>,
    /// Ids in load order, so listings are deterministic.
    order: Vec<IngredientId>,
}

impl IngredientRegistry {
    pub fn insert(&mut self, def: IngredientDef) {
        if !self.by_id.contains_key(&def.id) {
            self.order.push(def.id);
        }
        self.by_id.insert(def.id, def);
    }

    pub fn get(&self, id: IngredientId) -> Option<&IngredientDef> {
        self.by_id.get(&id)
    }

    /// All ingredients in load order.
    pub fn all(&self) -> impl Iterator<Item = &IngredientDef> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// All known recipes, keyed by id. Read-only after the data plugin has
/// populated it.
#[derive(Resource, Debug, Clone, Default)]
pub struct RecipeRegistry {
    by_id: HashMap<RecipeId, RecipeDef>,
    order: Vec<RecipeId>,
}

impl RecipeRegistry {
    pub fn insert(&mut self, def: RecipeDef) {
        if !self.by_id.contains_key(&def.id) {
            self.order.push(def.id);
        }
        self.by_id.insert(def.id, def);
    }

    pub fn get(&self, id: RecipeId) -> Option<&RecipeDef> {
        self.by_id.get(&id)
    }

    /// First recipe with this exact name, in load order.
    pub fn get_by_name(&self, name: &str) -> Option<&RecipeDef> {
        self.all().find(|r| r.name == name)
    }

    /// All recipes in load order.
    pub fn all(&self) -> impl Iterator<Item = &RecipeDef> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn by_category(&self, category: RecipeCategory) -> impl Iterator<Item = &RecipeDef> {
        self.all().filter(move |r| r.category == category)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER LEDGER — pantry, unlocked recipes, progression
// ═══════════════════════════════════════════════════════════════════════

/// Mutable player state. Fields are private: every mutation goes through
/// the operations below, which uphold the pantry invariant (no entry with
/// quantity 0) and the non-negativity of gold and inventory.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PlayerLedger {
    pantry: HashMap<IngredientId, u32>,
    unlocked: Vec<RecipeId>,
    level: u32,
    experience: u32,
    gold: u32,
}

impl Default for PlayerLedger {
    fn default() -> Self {
        let mut ledger = Self {
            pantry: HashMap::new(),
            unlocked: vec![FRIED_EGG_RECIPE],
            level: 1,
            experience: 0,
            gold: STARTING_GOLD,
        };
        for &(id, quantity) in STARTER_PANTRY {
            ledger.add_item(id, quantity);
        }
        ledger
    }
}

/// Pure projection of the ledger for HUD-style displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    pub level: u32,
    pub experience: u32,
    pub gold: u32,
    pub pantry_entries: usize,
    pub recipes_unlocked: usize,
}

impl PlayerLedger {
    /// Adds `quantity` units of an ingredient, creating the entry if absent.
    /// Adding zero is a no-op so the pantry never holds an empty entry.
    pub fn add_item(&mut self, id: IngredientId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.pantry.entry(id).or_insert(0) += quantity;
    }

    /// Removes `quantity` units. Fails without mutating if the entry is
    /// absent or too small; this is the sole gate keeping quantities from
    /// going negative. An entry drained to exactly 0 is deleted.
    pub fn remove_item(&mut self, id: IngredientId, quantity: u32) -> bool {
        match self.pantry.get_mut(&id) {
            Some(have) if *have >= quantity => {
                *have -= quantity;
                if *have == 0 {
                    self.pantry.remove(&id);
                }
                true
            }
            _ => false,
        }
    }

    pub fn has_enough(&self, id: IngredientId, quantity: u32) -> bool {
        self.quantity_of(id) >= quantity
    }

    /// 0 when the ingredient is not in the pantry.
    pub fn quantity_of(&self, id: IngredientId) -> u32 {
        self.pantry.get(&id).copied().unwrap_or(0)
    }

    pub fn pantry_entries(&self) -> impl Iterator<Item = (IngredientId, u32)> + '_ {
        self.pantry.iter().map(|(&id, &quantity)| (id, quantity))
    }

    /// Adds a recipe to the unlocked set. Returns false (no-op) if it was
    /// already unlocked. The id is not checked against the catalog.
    pub fn unlock_recipe(&mut self, id: RecipeId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.push(id);
        true
    }

    pub fn is_unlocked(&self, id: RecipeId) -> bool {
        self.unlocked.contains(&id)
    }

    /// Unlocked recipe ids in unlock order.
    pub fn unlocked_recipes(&self) -> &[RecipeId] {
        &self.unlocked
    }

    /// Grants experience and applies the level-up rule. Returns true when a
    /// level was gained. A single threshold is checked per call: experience
    /// past two thresholds carries over and resolves on a later gain.
    pub fn add_experience(&mut self, amount: u32) -> bool {
        self.experience = self.experience.saturating_add(amount);
        let needed = experience_for_next_level(self.level);
        if self.experience >= needed {
            self.level += 1;
            self.experience -= needed;
            return true;
        }
        false
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Fails without mutating when the balance is too small.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            level: self.level,
            experience: self.experience,
            gold: self.gold,
            pantry_entries: self.pantry.len(),
            recipes_unlocked: self.unlocked.len(),
        }
    }
}

/// Experience required to advance from `level` to `level + 1`.
pub fn experience_for_next_level(level: u32) -> u32 {
    level * EXPERIENCE_PER_LEVEL
}

// ═══════════════════════════════════════════════════════════════════════
// COOKING SESSION — one in-progress cook
// ═══════════════════════════════════════════════════════════════════════

/// Why a cook could not be started. The failing call leaves the ledger and
/// the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookingError {
    /// A session is already running; it is not replaced.
    AlreadyCooking,
    UnknownRecipe,
    RecipeLocked,
    MissingIngredients,
}

/// View of the step the cook is currently on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInfo {
    /// 1-based for display.
    pub step: u32,
    pub total_steps: u32,
    pub instruction: String,
}

/// What a completed dish paid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookingReward {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    pub experience: u32,
    pub gold: u32,
    /// Set when the experience grant pushed the player over a level.
    pub new_level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAdvance {
    /// No session is running; nothing happened.
    NotCooking,
    /// The step index moved forward and the session is still active.
    MoreSteps,
    /// The last step was completed; rewards were granted and the session
    /// returned to idle.
    Finished { reward: CookingReward },
}

/// The single active cooking process. Holds its own copy of the recipe for
/// the lifetime of the session, so step queries and completion never touch
/// the catalog.
#[derive(Resource, Debug, Clone, Default)]
pub struct CookingSession {
    recipe: Option<RecipeDef>,
    step_index: usize,
}

impl CookingSession {
    pub fn is_active(&self) -> bool {
        self.recipe.is_some()
    }

    pub fn active_recipe(&self) -> Option<&RecipeDef> {
        self.recipe.as_ref()
    }

    /// Starts cooking `recipe_id`. The ingredient check covers the whole
    /// recipe before anything is consumed, so a failure is side-effect free.
    pub fn start(
        &mut self,
        recipe_id: RecipeId,
        recipes: &RecipeRegistry,
        ledger: &mut PlayerLedger,
    ) -> Result<(), CookingError> {
        if self.is_active() {
            return Err(CookingError::AlreadyCooking);
        }
        let recipe = recipes.get(recipe_id).ok_or(CookingError::UnknownRecipe)?;
        if !ledger.is_unlocked(recipe_id) {
            return Err(CookingError::RecipeLocked);
        }
        for req in &recipe.ingredients {
            if !ledger.has_enough(req.ingredient_id, req.quantity) {
                return Err(CookingError::MissingIngredients);
            }
        }
        for req in &recipe.ingredients {
            if !ledger.remove_item(req.ingredient_id, req.quantity) {
                // Unreachable under run-to-completion execution: the loop
                // above checked every entry and nothing ran in between.
                warn!(
                    "pantry changed between check and consume for ingredient {}",
                    req.ingredient_id
                );
            }
        }
        self.recipe = Some(recipe.clone());
        self.step_index = 0;
        Ok(())
    }

    /// `None` while idle.
    pub fn current_step(&self) -> Option<StepInfo> {
        let recipe = self.recipe.as_ref()?;
        let instruction = recipe.steps.get(self.step_index)?.clone();
        Some(StepInfo {
            step: self.step_index as u32 + 1,
            total_steps: recipe.steps.len() as u32,
            instruction,
        })
    }

    /// Moves to the next step. Completing the final step grants the recipe's
    /// rewards to the ledger and resets the session to idle, so an n-step
    /// recipe finishes on the n-th advance.
    pub fn advance_step(&mut self, ledger: &mut PlayerLedger) -> StepAdvance {
        let Some(recipe) = self.recipe.as_ref() else {
            return StepAdvance::NotCooking;
        };
        self.step_index += 1;
        if self.step_index < recipe.steps.len() {
            return StepAdvance::MoreSteps;
        }

        let experience = recipe.difficulty * EXPERIENCE_PER_DIFFICULTY;
        let gold = recipe.base_price;
        let recipe_id = recipe.id;
        let recipe_name = recipe.name.clone();
        let leveled = ledger.add_experience(experience);
        ledger.add_gold(gold);

        self.recipe = None;
        self.step_index = 0;

        StepAdvance::Finished {
            reward: CookingReward {
                recipe_id,
                recipe_name,
                experience,
                gold,
                new_level: leveled.then(|| ledger.level()),
            },
        }
    }

    /// Aborts the session. Consumed ingredients are not returned. Returns
    /// false (no-op) while idle.
    pub fn cancel(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.recipe = None;
        self.step_index = 0;
        true
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PROGRESS — play statistics & achievements
// ═══════════════════════════════════════════════════════════════════════

/// Global play counters. Purely observational — bumped by event listeners
/// in the progress plugin, never consulted by game rules. Persisted in the
/// save profile.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayStats {
    pub dishes_cooked: u64,
    pub dishes_by_category: HashMap<RecipeCategory, u32>,
    pub cooks_cancelled: u64,
    pub ingredients_bought: u64,
    pub ingredients_sold: u64,
    /// Lifetime gold income from dishes and market sales.
    pub total_gold_earned: u64,
}

/// Achievement ids the player has earned, in unlock order. Persisted in
/// the save profile. The achievement definitions themselves are static
/// data in the progress plugin.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Achievements {
    pub unlocked: Vec<String>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|u| u == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// A dish was completed and its rewards were already applied to the ledger.
#[derive(Event, Debug, Clone)]
pub struct CookingFinishedEvent {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    pub experience: u32,
    pub gold: u32,
}

/// An active cook was aborted before its last step.
#[derive(Event, Debug, Clone)]
pub struct CookingCancelledEvent {
    pub recipe_id: RecipeId,
}

/// A recipe was newly added to the player's unlocked set.
#[derive(Event, Debug, Clone)]
pub struct RecipeUnlockedEvent {
    pub recipe_id: RecipeId,
}

#[derive(Event, Debug, Clone)]
pub struct LevelUpEvent {
    pub new_level: u32,
}

/// A completed market purchase or sale. Gold has already moved.
#[derive(Event, Debug, Clone)]
pub struct MarketTransactionEvent {
    pub ingredient_id: IngredientId,
    pub quantity: u32,
    pub total_gold: u32,
    /// true = player bought, false = player sold.
    pub is_purchase: bool,
}

#[derive(Event, Debug, Clone)]
pub struct AchievementUnlockedEvent {
    pub id: &'static str,
    pub name: &'static str,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const STARTING_GOLD: u32 = 100;

/// Experience needed per level step: `level * EXPERIENCE_PER_LEVEL`.
pub const EXPERIENCE_PER_LEVEL: u32 = 100;

/// Experience granted per point of recipe difficulty.
pub const EXPERIENCE_PER_DIFFICULTY: u32 = 10;

// Catalog ids referenced by the starting state. The full id space lives in
// the data assets; only these are needed before the catalog is loaded.
pub const FLOUR: IngredientId = 201;
pub const EGG: IngredientId = 301;
pub const MILK: IngredientId = 401;

pub const FRIED_EGG_RECIPE: RecipeId = 2;

/// Ingredients every new player starts with.
pub const STARTER_PANTRY: &[(IngredientId, u32)] = &[(FLOUR, 5), (EGG, 5), (MILK, 3)];

/// Sell-back price on the market: half the base price, rounded down.
pub fn sell_price(base_price: u32) -> u32 {
    base_price / 2
}
