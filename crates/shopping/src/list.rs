use fraction::Fraction;

use forkful_ingredient::{categorize, format_quantity, round_to_practical_value};
use forkful_shared::{GroceryItem, Recipe};

use crate::merge::merge_items;

/// Build a merged shopping list from a set of planned recipes.
///
/// Optional ingredients are left out; the list is for what the cook
/// actually needs. Each line remembers which recipe introduced it and is
/// tagged with a store aisle for display grouping.
pub fn build_list(recipes: &[Recipe]) -> Vec<GroceryItem> {
    let mut items = Vec::new();
    let mut order_index = 0u32;

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            if ingredient.is_optional {
                continue;
            }
            items.push(GroceryItem {
                name: ingredient.name.clone(),
                quantity: ingredient.quantity,
                unit: ingredient.unit.clone(),
                aisle: Some(categorize(&ingredient.name).to_string()),
                is_checked: false,
                recipe_id: Some(recipe.id.clone()),
                order_index,
            });
            order_index += 1;
        }
    }

    merge_items(items)
}

/// Flip the checked state of one line. Out-of-range indexes are ignored.
pub fn toggle_item(items: &mut [GroceryItem], index: usize) {
    if let Some(item) = items.get_mut(index) {
        item.is_checked = !item.is_checked;
    }
}

/// Drop every checked line, keeping the remaining order.
pub fn clear_checked(items: &mut Vec<GroceryItem>) {
    items.retain(|item| !item.is_checked);
}

/// Human-readable quantity for one line: rounded to a practical cooking
/// value and rendered as a fraction, with the unit when present.
pub fn display_quantity(item: &GroceryItem) -> String {
    let Some(quantity) = item.quantity else {
        return String::new();
    };
    let rounded = round_to_practical_value(Fraction::from(quantity));
    let formatted = format_quantity(rounded);
    match &item.unit {
        Some(unit) => format!("{formatted} {unit}"),
        None => formatted,
    }
}
