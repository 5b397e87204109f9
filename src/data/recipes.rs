use crate::shared::*;

const RECIPES_RON: &str = include_str!("assets/recipes.ron");

/// Parses a recipe list from RON source.
pub fn parse_recipes(source: &str) -> Result<Vec<RecipeDef>, ron::error::SpannedError> {
    ron::from_str(source)
}

/// Fills the registry from the embedded data file. A malformed embedded
/// asset is a build defect, so this panics rather than limping on.
pub fn populate_recipes(registry: &mut RecipeRegistry) {
    let defs = parse_recipes(RECIPES_RON).expect("embedded recipe data is malformed");
    for def in defs {
        registry.insert(def);
    }
}
