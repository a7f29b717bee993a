use serde::{Deserialize, Serialize};

/// One line on a shopping list.
///
/// Created by merging recipe ingredients, mutated by check/uncheck, and
/// destroyed when the list is cleared. `aisle` is a display hint filled in
/// by categorization; it never participates in merge keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aisle: Option<String>,
    #[serde(default)]
    pub is_checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(default)]
    pub order_index: u32,
}

impl GroceryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
            aisle: None,
            is_checked: false,
            recipe_id: None,
            order_index: 0,
        }
    }

    pub fn with_quantity(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.quantity = Some(quantity);
        self.unit = Some(unit.into());
        self
    }
}
