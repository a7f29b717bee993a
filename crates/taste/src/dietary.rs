use std::collections::BTreeMap;

/// Pattern labels, in rule evaluation order.
pub const VEGETARIAN_LEANING: &str = "vegetarian-leaning";
pub const DAIRY_FREE_LEANING: &str = "dairy-free-leaning";
pub const HEALTH_CONSCIOUS: &str = "health-conscious";

const MEAT_KEYWORDS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "lamb",
    "turkey",
    "bacon",
    "sausage",
    "steak",
    "ground meat",
];

const DAIRY_KEYWORDS: &[&str] = &["milk", "cheese", "cream", "butter", "yogurt"];

const HEALTHY_KEYWORDS: &[&str] = &[
    "quinoa",
    "kale",
    "avocado",
    "salmon",
    "tofu",
    "lentils",
    "chickpeas",
];

/// Derive dietary pattern labels from the full ingredient score map.
///
/// An ingredient counts as liked above a score of 3 and disliked below -2,
/// so a pattern only emerges from repeated signals, never a single save.
/// Rules are independent and additive; the output preserves rule order.
///
/// Recomputed from scratch on every interaction. Cost is linear in the
/// number of distinct ingredients ever seen, which stays small for a
/// personal profile.
pub fn infer_dietary_patterns(ingredient_scores: &BTreeMap<String, f32>) -> Vec<String> {
    let liked: Vec<&str> = ingredient_scores
        .iter()
        .filter(|(_, score)| **score > 3.0)
        .map(|(name, _)| name.as_str())
        .collect();
    let disliked: Vec<&str> = ingredient_scores
        .iter()
        .filter(|(_, score)| **score < -2.0)
        .map(|(name, _)| name.as_str())
        .collect();

    let mut patterns = Vec::new();

    let meat_disliked = matches_any(&disliked, MEAT_KEYWORDS);
    let meat_liked = matches_any(&liked, MEAT_KEYWORDS);
    if meat_disliked && !meat_liked {
        patterns.push(VEGETARIAN_LEANING.to_string());
    }

    if matches_any(&disliked, DAIRY_KEYWORDS) {
        patterns.push(DAIRY_FREE_LEANING.to_string());
    }

    let healthy_hits = HEALTHY_KEYWORDS
        .iter()
        .filter(|keyword| liked.iter().any(|name| name.contains(*keyword)))
        .count();
    if healthy_hits >= 3 {
        patterns.push(HEALTH_CONSCIOUS.to_string());
    }

    patterns
}

fn matches_any(names: &[&str], keywords: &[&str]) -> bool {
    names
        .iter()
        .any(|name| keywords.iter().any(|keyword| name.contains(keyword)))
}
