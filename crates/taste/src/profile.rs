use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

use forkful_shared::{Difficulty, InteractionEvent, InteractionType};

use crate::dietary::infer_dietary_patterns;

/// How many recent events the profile keeps for inspection and frequency
/// derivation. Oldest events are evicted first once the ring is full.
pub const RECENT_INTERACTIONS_CAPACITY: usize = 200;

/// Spice tolerance is clamped to this inclusive range.
pub const SPICE_TOLERANCE_RANGE: (f32, f32) = (0.0, 10.0);

const SPICE_STEP: f32 = 0.2;
const COMPLEXITY_STEP: f32 = 0.1;
const COMPLEXITY_THRESHOLD: f32 = 0.5;
const FREQUENCY_WINDOW_SECS: i64 = 30 * 24 * 60 * 60;

/// Tags whose presence on a positively-weighted event nudges spice
/// tolerance upward. Matched as case-insensitive substrings.
const SPICY_TAG_KEYWORDS: &[&str] = &[
    "spicy",
    "hot",
    "chili",
    "habanero",
    "jalapeno",
    "sriracha",
    "cayenne",
];

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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ComplexityPreference {
    Quick,
    #[default]
    Balanced,
    Elaborate,
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CookingFrequency {
    Daily,
    #[default]
    SeveralWeekly,
    Weekly,
    Occasional,
}

/// Accumulated taste preferences for one user.
///
/// The profile is a plain owned value with no global state: the host hands
/// it to whichever component needs it, which keeps tests isolated and
/// allows multiple profiles side by side. All mutation happens through
/// [`TasteProfile::track_interaction`], synchronously and in memory;
/// persisting the profile is the caller's concern (see
/// [`crate::store::ProfileStore`]).
///
/// Stored as JSON in the host's key-value store under
/// [`crate::store::PROFILE_STORAGE_KEY`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TasteProfile {
    /// Signed affinity per cuisine. Unbounded keys, can go negative.
    #[serde(default)]
    pub cuisine_scores: BTreeMap<String, f32>,
    /// Signed affinity per ingredient, keyed lower-cased and trimmed.
    #[serde(default)]
    pub ingredient_scores: BTreeMap<String, f32>,
    /// Always within 0..=10.
    #[serde(default = "default_spice_tolerance")]
    pub spice_tolerance: f32,
    /// Continuous accumulator behind `complexity_preference`.
    #[serde(default)]
    pub complexity_signal: f32,
    /// Derived from `complexity_signal`, never set directly.
    #[serde(default)]
    pub complexity_preference: ComplexityPreference,
    /// Recomputed in full from `ingredient_scores` on every interaction.
    #[serde(default)]
    pub dietary_patterns: Vec<String>,
    #[serde(default = "default_servings")]
    pub preferred_servings: u32,
    #[serde(default)]
    pub cooking_frequency: CookingFrequency,
    /// Most recent first, bounded by [`RECENT_INTERACTIONS_CAPACITY`].
    #[serde(default)]
    pub recent_interactions: VecDeque<InteractionEvent>,
    /// Counts every tracked interaction ever, not just the retained ring.
    #[serde(default)]
    pub total_interactions: u64,
    #[serde(default)]
    pub last_updated: i64,
}

fn default_spice_tolerance() -> f32 {
    5.0
}

fn default_servings() -> u32 {
    4
}

impl Default for TasteProfile {
    fn default() -> Self {
        Self {
            cuisine_scores: BTreeMap::new(),
            ingredient_scores: BTreeMap::new(),
            spice_tolerance: default_spice_tolerance(),
            complexity_signal: 0.0,
            complexity_preference: ComplexityPreference::Balanced,
            dietary_patterns: Vec::new(),
            preferred_servings: default_servings(),
            cooking_frequency: CookingFrequency::SeveralWeekly,
            recent_interactions: VecDeque::new(),
            total_interactions: 0,
            last_updated: 0,
        }
    }
}

impl TasteProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a user action into the profile, stamped with the current wall
    /// clock.
    pub fn track_interaction(&mut self, event: InteractionEvent) {
        self.track_interaction_at(event, OffsetDateTime::now_utc().unix_timestamp());
    }

    /// Fold a user action into the profile at an explicit timestamp. Used
    /// when replaying persisted events, and by tests that control time.
    ///
    /// Never fails: every optional field of the event is applied when
    /// present and silently skipped otherwise.
    pub fn track_interaction_at(&mut self, mut event: InteractionEvent, timestamp: i64) {
        event.timestamp = timestamp;
        let weight = event.weight();

        if event.interaction == InteractionType::Rate && event.rating.is_none() {
            tracing::debug!("rate event arrived without a rating, treated as neutral");
        }

        if let Some(cuisine) = &event.cuisine {
            *self.cuisine_scores.entry(cuisine.clone()).or_insert(0.0) += weight;
        }

        for ingredient in &event.ingredients {
            let key = ingredient.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            *self.ingredient_scores.entry(key).or_insert(0.0) += weight;
        }

        if weight > 0.0 && has_spicy_tag(&event.tags) {
            self.nudge_spice_tolerance(SPICE_STEP);
        }

        if let Some(difficulty) = event.difficulty {
            if matches!(
                event.interaction,
                InteractionType::Cook | InteractionType::Save
            ) {
                self.nudge_complexity(difficulty);
            }
        }

        self.dietary_patterns = infer_dietary_patterns(&self.ingredient_scores);

        let is_cook = event.interaction == InteractionType::Cook;
        self.recent_interactions.push_front(event);
        self.recent_interactions
            .truncate(RECENT_INTERACTIONS_CAPACITY);

        if is_cook {
            self.update_cooking_frequency(timestamp);
        }

        self.total_interactions += 1;
        self.last_updated = timestamp;
    }

    fn nudge_spice_tolerance(&mut self, delta: f32) {
        let (min, max) = SPICE_TOLERANCE_RANGE;
        self.spice_tolerance = (self.spice_tolerance + delta).clamp(min, max);
    }

    fn nudge_complexity(&mut self, difficulty: Difficulty) {
        let delta = match difficulty {
            Difficulty::Easy => -COMPLEXITY_STEP,
            Difficulty::Medium => 0.0,
            Difficulty::Hard => COMPLEXITY_STEP,
        };
        self.complexity_signal += delta;
        self.complexity_preference = if self.complexity_signal < -COMPLEXITY_THRESHOLD {
            ComplexityPreference::Quick
        } else if self.complexity_signal > COMPLEXITY_THRESHOLD {
            ComplexityPreference::Elaborate
        } else {
            ComplexityPreference::Balanced
        };
    }

    /// Rederive cooking frequency from cook events in the retained ring.
    ///
    /// Only runs when a cook event arrives; with fewer than three cook
    /// events on record the default is left alone, so a brand-new profile
    /// never flips to `Occasional` off a single data point.
    fn update_cooking_frequency(&mut self, now: i64) {
        let cook_timestamps: Vec<i64> = self
            .recent_interactions
            .iter()
            .filter(|e| e.interaction == InteractionType::Cook)
            .map(|e| e.timestamp)
            .collect();
        if cook_timestamps.len() < 3 {
            return;
        }

        let window_start = now - FREQUENCY_WINDOW_SECS;
        let recent_cooks = cook_timestamps
            .iter()
            .filter(|&&ts| ts >= window_start)
            .count();

        self.cooking_frequency = if recent_cooks >= 20 {
            CookingFrequency::Daily
        } else if recent_cooks >= 6 {
            CookingFrequency::SeveralWeekly
        } else if recent_cooks >= 2 {
            CookingFrequency::Weekly
        } else {
            CookingFrequency::Occasional
        };
    }

    /// Positively-scored cuisines, best first, ties alphabetical.
    pub fn top_cuisines(&self, limit: usize) -> Vec<(String, f32)> {
        top_scores(&self.cuisine_scores, limit)
    }

    /// Positively-scored ingredients, best first, ties alphabetical.
    pub fn top_ingredients(&self, limit: usize) -> Vec<(String, f32)> {
        top_scores(&self.ingredient_scores, limit)
    }

    /// Ingredients the user has pushed below the dislike threshold, most
    /// disliked first.
    pub fn disliked_ingredients(&self) -> Vec<String> {
        let mut disliked: Vec<(&String, f32)> = self
            .ingredient_scores
            .iter()
            .filter(|(_, score)| **score < -2.0)
            .map(|(name, score)| (name, *score))
            .collect();
        disliked.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        disliked.into_iter().map(|(name, _)| name.clone()).collect()
    }

    /// Serialize to JSON for the host's key-value store.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn has_spicy_tag(tags: &[String]) -> bool {
    tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        SPICY_TAG_KEYWORDS
            .iter()
            .any(|keyword| tag.contains(keyword))
    })
}

fn top_scores(scores: &BTreeMap<String, f32>, limit: usize) -> Vec<(String, f32)> {
    let mut ranked: Vec<(String, f32)> = scores
        .iter()
        .filter(|(_, score)| **score > 0.0)
        .map(|(name, score)| (name.clone(), *score))
        .collect();
    // Score descending; BTreeMap iteration already yields names
    // alphabetically, and the sort is stable, so ties stay alphabetical.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(limit);
    ranked
}
