use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::Difficulty;

/// Where a recipe came from. Generated and extracted recipes arrive with
/// free-text ingredient lines that still need normalization.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecipeSource {
    #[default]
    Manual,
    Generated,
    Extracted,
}

/// A structured ingredient line attached to a stored recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub order_index: u32,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, order_index: u32) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
            preparation: None,
            is_optional: false,
            order_index,
        }
    }
}

/// A stored recipe. Owned by the persistence layer; the core only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub source: RecipeSource,
}

impl Recipe {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tags: Vec::new(),
            cuisine: None,
            difficulty: None,
            source: RecipeSource::Manual,
        }
    }
}
