use std::collections::HashMap;

use tracing::debug;

use forkful_shared::GroceryItem;

/// Deduplicate a shopping list by summing quantities of matching lines.
///
/// Lines merge when they share a lower-cased, trimmed name and the same
/// unit (a missing unit is its own group). The first line seen for a key
/// is the canonical entry and keeps its original casing and metadata;
/// later lines only contribute their quantity, and only when both sides
/// have one; mixing a numeric line with a quantity-less one keeps the
/// existing number untouched. First-appearance order is preserved.
pub fn merge_items(items: Vec<GroceryItem>) -> Vec<GroceryItem> {
    let mut merged: Vec<GroceryItem> = Vec::new();
    let mut index_by_key: HashMap<(String, String), usize> = HashMap::new();

    for item in items {
        let key = (
            item.name.trim().to_lowercase(),
            item.unit.clone().unwrap_or_default(),
        );

        match index_by_key.get(&key) {
            None => {
                index_by_key.insert(key, merged.len());
                merged.push(item);
            }
            Some(&at) => {
                let existing = &mut merged[at];
                match (existing.quantity, item.quantity) {
                    (Some(current), Some(incoming)) => {
                        existing.quantity = Some(current + incoming);
                    }
                    _ => {
                        // Data-quality degradation, not an error: the list
                        // still shows the line, just without the addition.
                        debug!(
                            name = %existing.name,
                            "skipped merge increment, missing quantity on one side"
                        );
                    }
                }
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: Option<f64>, unit: Option<&str>) -> GroceryItem {
        GroceryItem {
            name: name.to_string(),
            quantity,
            unit: unit.map(str::to_string),
            aisle: None,
            is_checked: false,
            recipe_id: None,
            order_index: 0,
        }
    }

    #[test]
    fn test_case_insensitive_quantities_sum() {
        let merged = merge_items(vec![
            item("flour", Some(1.0), Some("cup")),
            item("Flour", Some(2.0), Some("cup")),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "flour");
        assert_eq!(merged[0].quantity, Some(3.0));
        assert_eq!(merged[0].unit.as_deref(), Some("cup"));
    }

    #[test]
    fn test_different_units_stay_separate() {
        let merged = merge_items(vec![
            item("milk", Some(1.0), Some("cup")),
            item("milk", Some(240.0), Some("ml")),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_missing_unit_is_its_own_group() {
        let merged = merge_items(vec![
            item("onion", Some(1.0), None),
            item("onion", Some(2.0), None),
            item("onion", Some(1.0), Some("cup")),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].quantity, Some(3.0));
    }

    #[test]
    fn test_missing_quantity_keeps_existing_value() {
        let merged = merge_items(vec![
            item("salt", Some(1.0), Some("tsp")),
            item("salt", None, Some("tsp")),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quantity, Some(1.0));

        let merged = merge_items(vec![
            item("salt", None, Some("tsp")),
            item("salt", Some(1.0), Some("tsp")),
        ]);
        assert_eq!(merged[0].quantity, None);
    }

    #[test]
    fn test_first_appearance_order_preserved() {
        let merged = merge_items(vec![
            item("zucchini", Some(1.0), None),
            item("apple", Some(2.0), None),
            item("Zucchini", Some(1.0), None),
            item("milk", Some(1.0), Some("l")),
        ]);
        let names: Vec<&str> = merged.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["zucchini", "apple", "milk"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(merge_items(Vec::new()).is_empty());
    }
}
