pub mod search;

pub use search::{IngredientMatches, RecipeMatch, search_by_ingredients};
