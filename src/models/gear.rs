//! Gear catalog entries and scoring results

use serde::{Deserialize, Serialize};

/// Kind of gear item. The set is open: unknown categories are kept verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GearCategory {
    Rod,
    Reel,
    #[serde(untagged)]
    Other(String),
}

/// A single catalog entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GearItem {
    /// Unique catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Item category
    #[serde(rename = "type")]
    pub category: GearCategory,
    /// Species the item is suited for
    pub best_for: Vec<String>,
    /// Water conditions the item is suited for (freshwater, saltwater, surf, ...)
    pub conditions: Vec<String>,
    /// Recommendation rank, lower is stronger (expected 1-9)
    pub priority: u32,
    /// Price in USD
    pub price: f64,
    /// Product page
    pub url: String,
}

impl GearItem {
    /// Species tags rendered as one lowercase comma-joined string
    #[must_use]
    pub fn species_key(&self) -> String {
        self.best_for.join(",").to_lowercase()
    }

    /// Condition tags rendered as one lowercase comma-joined string
    #[must_use]
    pub fn conditions_key(&self) -> String {
        self.conditions.join(",").to_lowercase()
    }
}

/// A catalog item paired with its score for one request
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGearItem<'a> {
    pub item: &'a GearItem,
    pub score: i32,
}

/// The subset of a trip request that drives gear ranking
#[derive(Debug, Clone, Deserialize)]
pub struct GearProfile {
    pub species: String,
    pub water_type: String,
    /// Accepted but does not affect ranking yet
    pub experience_level: String,
}

/// Ranked gear list as returned to clients
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GearRecommendation {
    pub recommended: Vec<GearItem>,
    pub count: usize,
}

impl GearRecommendation {
    #[must_use]
    pub fn new(recommended: Vec<GearItem>) -> Self {
        let count = recommended.len();
        Self { recommended, count }
    }
}
