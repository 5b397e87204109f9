use crate::shared::*;

const INGREDIENTS_RON: &str = include_str!("assets/ingredients.ron");

/// Parses an ingredient list from RON source.
pub fn parse_ingredients(source: &str) -> Result<Vec<IngredientDef>, ron::error::SpannedError> {
    ron::from_str(source)
}

/// Fills the registry from the embedded data file. A malformed embedded
/// asset is a build defect, so this panics rather than limping on.
pub fn populate_ingredients(registry: &mut IngredientRegistry) {
    let defs = parse_ingredients(INGREDIENTS_RON).expect("embedded ingredient data is malformed");
    for def in defs {
        registry.insert(def);
    }
}
