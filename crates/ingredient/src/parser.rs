use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use forkful_shared::RecipeIngredient;

use crate::quantity::{fraction_to_f64, is_ambiguous_quantity, parse_quantity};

/// Recognized measurement units, long forms mapped to their abbreviation.
static UNIT_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("tbsp", "tbsp"),
        ("tablespoon", "tbsp"),
        ("tablespoons", "tbsp"),
        ("tsp", "tsp"),
        ("teaspoon", "tsp"),
        ("teaspoons", "tsp"),
        ("cup", "cup"),
        ("cups", "cup"),
        ("oz", "oz"),
        ("ounce", "oz"),
        ("ounces", "oz"),
        ("lb", "lb"),
        ("lbs", "lb"),
        ("pound", "lb"),
        ("pounds", "lb"),
        ("g", "g"),
        ("gram", "g"),
        ("grams", "g"),
        ("kg", "kg"),
        ("kilogram", "kg"),
        ("kilograms", "kg"),
        ("ml", "ml"),
        ("milliliter", "ml"),
        ("milliliters", "ml"),
        ("millilitre", "ml"),
        ("millilitres", "ml"),
        ("l", "l"),
        ("liter", "l"),
        ("liters", "l"),
        ("litre", "l"),
        ("litres", "l"),
        ("pinch", "pinch"),
        ("pinches", "pinch"),
        ("dash", "dash"),
        ("dashes", "dash"),
        ("clove", "clove"),
        ("cloves", "clove"),
    ])
});

/// Structured reading of a free-text ingredient line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
}

impl ParsedIngredient {
    pub fn into_recipe_ingredient(self, order_index: u32) -> RecipeIngredient {
        RecipeIngredient {
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            preparation: self.preparation,
            is_optional: false,
            order_index,
        }
    }
}

/// Parse a free-text ingredient line like `"2 cups flour, sifted"` into
/// quantity, unit, preparation, and name.
///
/// This is a best-effort heuristic, not a grammar: extraction runs in a
/// fixed order (quantity, then unit, then preparation, then name) with no
/// backtracking, so a unit word that is also a food name resolves as a
/// unit. It never fails; for unrecognizable input the whole line becomes
/// the name.
pub fn parse_ingredient(text: &str) -> ParsedIngredient {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut cursor = 0;

    let quantity = take_quantity(&tokens, &mut cursor);
    if quantity.is_none() && !tokens.is_empty() && is_ambiguous_quantity(text) {
        // "a pinch", "to taste", and friends have no numeric reading; the
        // line flows into the shopping list with its quantity unset so the
        // merge step never invents a number for it.
        debug!(line = %text.trim(), "ambiguous quantity, left unset");
    }
    let unit = take_unit(&tokens, &mut cursor);

    let rest = tokens[cursor..].join(" ");
    let (name_part, preparation) = split_preparation(&rest);
    let name = clean_name(&name_part);

    ParsedIngredient {
        name,
        quantity,
        unit,
        preparation,
    }
}

/// Consume a leading quantity: integer, decimal, `a/b`, or mixed `a b/c`.
fn take_quantity(tokens: &[&str], cursor: &mut usize) -> Option<f64> {
    let first = tokens.first()?;
    if !is_numeric_token(first) {
        return None;
    }

    // Mixed number spans two tokens: a whole part followed by a fraction.
    let is_mixed = first.chars().all(|c| c.is_ascii_digit())
        && tokens
            .get(1)
            .is_some_and(|t| t.contains('/') && is_numeric_token(t));

    let (candidate, consumed) = if is_mixed {
        (format!("{} {}", first, tokens[1]), 2)
    } else {
        ((*first).to_string(), 1)
    };

    match parse_quantity(&candidate) {
        Ok(fraction) => {
            *cursor += consumed;
            Some(fraction_to_f64(&fraction))
        }
        Err(err) => {
            debug!(quantity = %candidate, %err, "ingredient quantity did not parse");
            None
        }
    }
}

fn take_unit(tokens: &[&str], cursor: &mut usize) -> Option<String> {
    let token = tokens.get(*cursor)?;
    let normalized = token.trim_end_matches('.').to_lowercase();
    let abbreviation = UNIT_ALIASES.get(normalized.as_str())?;
    *cursor += 1;
    Some((*abbreviation).to_string())
}

/// Split a trailing parenthetical or comma-suffixed clause off as the
/// preparation: `"flour, sifted"` and `"garlic (minced)"` both yield one.
fn split_preparation(rest: &str) -> (String, Option<String>) {
    let trimmed = rest.trim();

    if trimmed.ends_with(')') {
        if let Some(open) = trimmed.rfind('(') {
            let preparation = trimmed[open + 1..trimmed.len() - 1].trim();
            let name_part = trimmed[..open].trim();
            if !preparation.is_empty() {
                return (name_part.to_string(), Some(preparation.to_string()));
            }
            return (name_part.to_string(), None);
        }
    }

    if let Some((name_part, preparation)) = trimmed.split_once(',') {
        let preparation = preparation.trim();
        if !preparation.is_empty() {
            return (name_part.trim().to_string(), Some(preparation.to_string()));
        }
        return (name_part.trim().to_string(), None);
    }

    (trimmed.to_string(), None)
}

fn clean_name(name: &str) -> String {
    let without_of = name
        .strip_prefix("of ")
        .or_else(|| name.strip_prefix("Of "))
        .unwrap_or(name);
    without_of.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_numeric_token(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_unit_name_and_preparation() {
        let parsed = parse_ingredient("2 cups flour, sifted");
        assert_eq!(parsed.quantity, Some(2.0));
        assert_eq!(parsed.unit.as_deref(), Some("cup"));
        assert_eq!(parsed.name, "flour");
        assert_eq!(parsed.preparation.as_deref(), Some("sifted"));
    }

    #[test]
    fn test_fraction_quantity() {
        let parsed = parse_ingredient("1/2 tsp salt");
        assert_eq!(parsed.quantity, Some(0.5));
        assert_eq!(parsed.unit.as_deref(), Some("tsp"));
        assert_eq!(parsed.name, "salt");
        assert_eq!(parsed.preparation, None);
    }

    #[test]
    fn test_mixed_number_quantity() {
        let parsed = parse_ingredient("1 1/2 cups chicken stock");
        assert_eq!(parsed.quantity, Some(1.5));
        assert_eq!(parsed.unit.as_deref(), Some("cup"));
        assert_eq!(parsed.name, "chicken stock");
    }

    #[test]
    fn test_long_form_unit_is_abbreviated() {
        let parsed = parse_ingredient("3 tablespoons olive oil");
        assert_eq!(parsed.unit.as_deref(), Some("tbsp"));
        assert_eq!(parsed.name, "olive oil");
    }

    #[test]
    fn test_parenthetical_preparation() {
        let parsed = parse_ingredient("2 cloves garlic (minced)");
        assert_eq!(parsed.quantity, Some(2.0));
        assert_eq!(parsed.unit.as_deref(), Some("clove"));
        assert_eq!(parsed.name, "garlic");
        assert_eq!(parsed.preparation.as_deref(), Some("minced"));
    }

    #[test]
    fn test_leading_of_is_stripped() {
        let parsed = parse_ingredient("1 pinch of saffron");
        assert_eq!(parsed.unit.as_deref(), Some("pinch"));
        assert_eq!(parsed.name, "saffron");
    }

    #[test]
    fn test_ambiguous_quantity_phrase_left_unset() {
        let parsed = parse_ingredient("a pinch of saffron");
        assert_eq!(parsed.quantity, None);
        assert_eq!(parsed.unit, None);
        assert_eq!(parsed.name, "a pinch of saffron");
    }

    #[test]
    fn test_bare_name_survives() {
        let parsed = parse_ingredient("salt and pepper to taste");
        assert_eq!(parsed.quantity, None);
        assert_eq!(parsed.unit, None);
        assert_eq!(parsed.name, "salt and pepper to taste");
    }

    #[test]
    fn test_decimal_quantity_without_unit() {
        let parsed = parse_ingredient("0.5 onion");
        assert_eq!(parsed.quantity, Some(0.5));
        assert_eq!(parsed.unit, None);
        assert_eq!(parsed.name, "onion");
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_ingredient("");
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.quantity, None);
        assert_eq!(parsed.unit, None);
        assert_eq!(parsed.preparation, None);
    }

    #[test]
    fn test_unit_word_wins_over_food_reading() {
        // First-match order means "clove" is consumed as a unit even though
        // the cook meant the spice.
        let parsed = parse_ingredient("1 clove");
        assert_eq!(parsed.unit.as_deref(), Some("clove"));
        assert_eq!(parsed.name, "");
    }

    #[test]
    fn test_into_recipe_ingredient() {
        let ingredient = parse_ingredient("2 cups flour").into_recipe_ingredient(3);
        assert_eq!(ingredient.name, "flour");
        assert_eq!(ingredient.quantity, Some(2.0));
        assert_eq!(ingredient.unit.as_deref(), Some("cup"));
        assert_eq!(ingredient.order_index, 3);
        assert!(!ingredient.is_optional);
    }
}
