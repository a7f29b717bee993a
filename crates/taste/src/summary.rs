use crate::profile::{ComplexityPreference, TasteProfile};

/// Cold-start text returned until a profile has seen at least three
/// interactions. Guards generation prompts against statistically
/// meaningless preferences.
pub const NEW_USER_SUMMARY: &str =
    "New user, no established taste preferences yet. Suggest broadly appealing recipes.";

const MIN_INTERACTIONS_FOR_SUMMARY: u64 = 3;

impl TasteProfile {
    /// Render the profile as a short natural-language summary for prompt
    /// injection.
    ///
    /// The output is advisory context for a text-generation request, not
    /// telemetry: it carries qualitative language only and never the raw
    /// scores. Pure and idempotent; calling it twice without an
    /// intervening interaction yields the identical string.
    pub fn summary(&self) -> String {
        if self.total_interactions < MIN_INTERACTIONS_FOR_SUMMARY {
            return NEW_USER_SUMMARY.to_string();
        }

        let mut lines = Vec::new();

        let cuisines = self.top_cuisines(3);
        if !cuisines.is_empty() {
            lines.push(format!("Enjoys {} cuisine.", name_list(&cuisines)));
        }

        let ingredients = self.top_ingredients(5);
        if !ingredients.is_empty() {
            lines.push(format!("Often cooks with {}.", name_list(&ingredients)));
        }

        let disliked = self.disliked_ingredients();
        if !disliked.is_empty() {
            lines.push(format!("Avoids {}.", disliked.join(", ")));
        }

        if self.spice_tolerance <= 2.0 {
            lines.push("Prefers mild, gently seasoned dishes.".to_string());
        } else if self.spice_tolerance >= 8.0 {
            lines.push("Loves bold, spicy heat.".to_string());
        }

        match self.complexity_preference {
            ComplexityPreference::Quick => {
                lines.push("Prefers quick, simple recipes.".to_string());
            }
            ComplexityPreference::Elaborate => {
                lines.push("Enjoys elaborate cooking projects.".to_string());
            }
            ComplexityPreference::Balanced => {}
        }

        if !self.dietary_patterns.is_empty() {
            lines.push(format!(
                "Dietary patterns: {}.",
                self.dietary_patterns.join(", ")
            ));
        }

        if self.preferred_servings != 4 {
            lines.push(format!(
                "Usually cooks for {} people.",
                self.preferred_servings
            ));
        }

        lines.join("\n")
    }
}

fn name_list(scored: &[(String, f32)]) -> String {
    scored
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
