use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Taxonomy of user actions that feed the taste profile.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
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
pub enum InteractionType {
    Save,
    Favorite,
    Unfavorite,
    Cook,
    Skip,
    Generate,
    Rate,
}

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
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// A single user action, immutable once tracked.
///
/// Every field except the interaction type is optional: handlers attach
/// whatever context the triggering screen has, and scoring skips absent
/// fields one by one. The timestamp is assigned by the profile at track
/// time, not by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub interaction: InteractionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Star rating on a 1..=5 scale, only meaningful for `Rate` events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Unix timestamp (seconds), assigned when the event is tracked.
    pub timestamp: i64,
}

impl InteractionEvent {
    pub fn new(interaction: InteractionType) -> Self {
        Self {
            interaction,
            recipe_id: None,
            cuisine: None,
            ingredients: Vec::new(),
            tags: Vec::new(),
            difficulty: None,
            rating: None,
            timestamp: 0,
        }
    }

    pub fn with_recipe_id(mut self, recipe_id: impl Into<String>) -> Self {
        self.recipe_id = Some(recipe_id.into());
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Scalar weight this event contributes to cuisine and ingredient scores.
    ///
    /// Cook is the strongest positive signal, skip and unfavorite are the
    /// negative ones. A rating maps linearly onto -2..=2 around the neutral
    /// 3 stars, clamped to the 1..=5 scale first; a `Rate` event without a
    /// rating is treated as neutral.
    pub fn weight(&self) -> f32 {
        match self.interaction {
            InteractionType::Cook => 5.0,
            InteractionType::Favorite => 3.0,
            InteractionType::Save => 2.0,
            InteractionType::Generate => 1.0,
            InteractionType::Skip => -1.0,
            InteractionType::Unfavorite => -2.0,
            InteractionType::Rate => f32::from(self.rating.unwrap_or(3).clamp(1, 5)) - 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_weights() {
        assert_eq!(InteractionEvent::new(InteractionType::Cook).weight(), 5.0);
        assert_eq!(
            InteractionEvent::new(InteractionType::Favorite).weight(),
            3.0
        );
        assert_eq!(InteractionEvent::new(InteractionType::Save).weight(), 2.0);
        assert_eq!(
            InteractionEvent::new(InteractionType::Generate).weight(),
            1.0
        );
        assert_eq!(InteractionEvent::new(InteractionType::Skip).weight(), -1.0);
        assert_eq!(
            InteractionEvent::new(InteractionType::Unfavorite).weight(),
            -2.0
        );
    }

    #[test]
    fn test_rating_weight_maps_around_neutral() {
        let rate = |stars: u8| {
            InteractionEvent::new(InteractionType::Rate)
                .with_rating(stars)
                .weight()
        };
        assert_eq!(rate(1), -2.0);
        assert_eq!(rate(3), 0.0);
        assert_eq!(rate(5), 2.0);
    }

    #[test]
    fn test_out_of_range_rating_clamps_to_scale() {
        let rate = |stars: u8| {
            InteractionEvent::new(InteractionType::Rate)
                .with_rating(stars)
                .weight()
        };
        assert_eq!(rate(0), -2.0);
        assert_eq!(rate(255), 2.0);
    }

    #[test]
    fn test_missing_rating_is_neutral() {
        assert_eq!(InteractionEvent::new(InteractionType::Rate).weight(), 0.0);
    }

    #[test]
    fn test_event_round_trips_through_json() {
        let event = InteractionEvent::new(InteractionType::Cook)
            .with_recipe_id("r-42")
            .with_cuisine("thai")
            .with_ingredients(["chicken", "basil"])
            .with_difficulty(Difficulty::Hard);

        let json = serde_json::to_string(&event).unwrap();
        let back: InteractionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
