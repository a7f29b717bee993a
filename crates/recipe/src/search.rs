use std::cmp::Ordering;

use serde::Serialize;

use forkful_shared::Recipe;

/// Recipes without structured ingredients are scored against this assumed
/// count, so a single text hit cannot classify them as a perfect match.
const ASSUMED_INGREDIENT_COUNT: usize = 5;

/// Above this ratio a recipe is a perfect match regardless of absolute
/// match count.
const PERFECT_RATIO: f32 = 0.7;

/// At this many matched ingredients a recipe is a perfect match regardless
/// of ratio.
const PERFECT_MATCH_COUNT: usize = 3;

const PARTIAL_LIMIT: usize = 10;

/// One recipe scored against the user's available ingredients.
#[derive(Clone, Debug, Serialize)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    /// How many of the user's ingredients this recipe uses.
    pub match_count: usize,
    /// `match_count` over the recipe's distinct ingredient count.
    pub ratio: f32,
}

/// Search result, partitioned into the two match tiers.
#[derive(Clone, Debug, Default, Serialize)]
pub struct IngredientMatches {
    pub perfect: Vec<RecipeMatch>,
    pub partial: Vec<RecipeMatch>,
}

/// Find recipes the user can cook from what they have on hand.
///
/// Matching is loose on purpose: a user ingredient counts for a recipe
/// when it substring-matches a stored ingredient name in either direction,
/// or appears anywhere in the recipe's title, description, or
/// instructions. Scales as recipes x user ingredients, which is fine for a
/// personal collection of a few hundred recipes.
///
/// Recipes matching nothing are dropped. The partial tier is capped at the
/// ten best; both tiers come back ratio-descending, original order on
/// ties.
pub fn search_by_ingredients(user_ingredients: &[String], recipes: &[Recipe]) -> IngredientMatches {
    let available: Vec<String> = user_ingredients
        .iter()
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect();

    let mut result = IngredientMatches::default();
    if available.is_empty() {
        return result;
    }

    for recipe in recipes {
        let names: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|i| i.name.to_lowercase())
            .collect();
        let blob = fallback_text(recipe);

        let match_count = available
            .iter()
            .filter(|have| {
                names
                    .iter()
                    .any(|name| name.contains(*have) || have.contains(name.as_str()))
                    || blob.contains(*have)
            })
            .count();
        if match_count == 0 {
            continue;
        }

        let total = distinct_count(&names).max(1);
        let ratio = match_count as f32 / total as f32;

        let scored = RecipeMatch {
            recipe: recipe.clone(),
            match_count,
            ratio,
        };
        if ratio > PERFECT_RATIO || match_count >= PERFECT_MATCH_COUNT {
            result.perfect.push(scored);
        } else {
            result.partial.push(scored);
        }
    }

    sort_by_ratio(&mut result.perfect);
    sort_by_ratio(&mut result.partial);
    result.partial.truncate(PARTIAL_LIMIT);
    result
}

/// Title, description, and instructions flattened into one lower-cased
/// haystack, used when an ingredient is not stored in structured form.
fn fallback_text(recipe: &Recipe) -> String {
    let mut blob = String::new();
    blob.push_str(&recipe.title);
    blob.push(' ');
    if let Some(description) = &recipe.description {
        blob.push_str(description);
        blob.push(' ');
    }
    blob.push_str(&recipe.instructions.join(" "));
    blob.to_lowercase()
}

fn distinct_count(names: &[String]) -> usize {
    if names.is_empty() {
        return ASSUMED_INGREDIENT_COUNT;
    }
    let mut seen: Vec<&str> = names.iter().map(String::as_str).collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

fn sort_by_ratio(matches: &mut [RecipeMatch]) {
    matches.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use forkful_shared::RecipeIngredient;

    fn recipe_with_ingredients(id: &str, names: &[&str]) -> Recipe {
        let mut recipe = Recipe::new(id, format!("Test {id}"));
        recipe.ingredients = names
            .iter()
            .enumerate()
            .map(|(i, name)| RecipeIngredient::new(*name, i as u32))
            .collect();
        recipe
    }

    fn have(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_full_pantry_is_a_perfect_match() {
        let recipes = vec![recipe_with_ingredients(
            "r1",
            &["chicken", "rice", "soy sauce"],
        )];
        let matches =
            search_by_ingredients(&have(&["chicken", "rice", "soy sauce"]), &recipes);

        assert_eq!(matches.perfect.len(), 1);
        assert!(matches.partial.is_empty());
        assert_eq!(matches.perfect[0].match_count, 3);
        assert!((matches.perfect[0].ratio - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_hit_is_partial() {
        let recipes = vec![recipe_with_ingredients(
            "r1",
            &["chicken", "rice", "soy sauce"],
        )];
        let matches = search_by_ingredients(&have(&["chicken"]), &recipes);

        assert!(matches.perfect.is_empty());
        assert_eq!(matches.partial.len(), 1);
        assert_eq!(matches.partial[0].match_count, 1);
    }

    #[test]
    fn test_three_hits_are_perfect_even_at_low_ratio() {
        let recipes = vec![recipe_with_ingredients(
            "stew",
            &["beef", "carrot", "potato", "onion", "celery", "stock", "wine"],
        )];
        let matches = search_by_ingredients(&have(&["beef", "carrot", "potato"]), &recipes);

        // 3/7 is well under the ratio bar, but three absolute hits qualify.
        assert_eq!(matches.perfect.len(), 1);
    }

    #[test]
    fn test_substring_matches_both_directions() {
        let recipes = vec![recipe_with_ingredients("r1", &["boneless chicken thighs"])];
        // User ingredient inside the stored name...
        assert_eq!(
            search_by_ingredients(&have(&["chicken"]), &recipes)
                .partial
                .len(),
            1
        );
        // ...and stored name inside the user ingredient.
        let recipes = vec![recipe_with_ingredients("r2", &["rice"])];
        assert_eq!(
            search_by_ingredients(&have(&["jasmine rice"]), &recipes)
                .partial
                .len(),
            1
        );
    }

    #[test]
    fn test_text_blob_fallback_with_assumed_total() {
        let mut recipe = Recipe::new("r1", "Garlic Butter Pasta");
        recipe.instructions = vec!["Toss the pasta with garlic and butter.".to_string()];
        let matches = search_by_ingredients(&have(&["garlic"]), &[recipe]);

        // One text hit over the assumed five ingredients: partial, not
        // perfect.
        assert!(matches.perfect.is_empty());
        assert_eq!(matches.partial.len(), 1);
        assert!((matches.partial[0].ratio - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_match_recipes_are_dropped() {
        let recipes = vec![recipe_with_ingredients("r1", &["tofu", "broccoli"])];
        let matches = search_by_ingredients(&have(&["lamb"]), &recipes);
        assert!(matches.perfect.is_empty());
        assert!(matches.partial.is_empty());
    }

    #[test]
    fn test_empty_inputs_return_empty() {
        let recipes = vec![recipe_with_ingredients("r1", &["tofu"])];
        assert!(search_by_ingredients(&[], &recipes).partial.is_empty());
        assert!(
            search_by_ingredients(&have(&["  ", ""]), &recipes)
                .partial
                .is_empty()
        );
        assert!(search_by_ingredients(&have(&["tofu"]), &[]).partial.is_empty());
    }

    #[test]
    fn test_partial_tier_truncated_to_ten_best() {
        // 30 recipes each with one hit out of a varying ingredient count,
        // so ratios differ and the cap has to pick the best.
        let recipes: Vec<Recipe> = (0..30u32)
            .map(|i| {
                let mut recipe = recipe_with_ingredients(&format!("r{i}"), &["egg"]);
                for j in 0..(i % 15) + 4 {
                    recipe
                        .ingredients
                        .push(RecipeIngredient::new(format!("filler-{j}"), j + 1));
                }
                recipe
            })
            .collect();

        let matches = search_by_ingredients(&have(&["egg"]), &recipes);
        assert_eq!(matches.partial.len(), 10);
        // Ratio-descending ordering.
        for window in matches.partial.windows(2) {
            assert!(window[0].ratio >= window[1].ratio);
        }
    }

    #[test]
    fn test_tiers_sorted_by_ratio_descending() {
        let recipes = vec![
            recipe_with_ingredients("four", &["chicken", "rice", "soy sauce", "ginger"]),
            recipe_with_ingredients("three", &["chicken", "rice", "soy sauce"]),
        ];
        let matches =
            search_by_ingredients(&have(&["chicken", "rice", "soy sauce"]), &recipes);

        assert_eq!(matches.perfect.len(), 2);
        assert_eq!(matches.perfect[0].recipe.id, "three");
        assert_eq!(matches.perfect[1].recipe.id, "four");
    }
}
