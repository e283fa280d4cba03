//! Gear ranking
//!
//! Each catalog item scores the sum of three independent signals:
//! - +10 when the requested species is a substring of the item's species tags
//! - +5 when the requested water type is a substring of the item's condition tags
//! - +(10 - priority), so a lower priority number ranks higher
//!
//! Matching is a case-insensitive substring test over the comma-joined tag list,
//! so "bass" also matches an item tagged "striped bass". Items are sorted by
//! descending score with ties kept in catalog order.

use std::sync::Arc;

use tracing::debug;

use crate::gear::GearCatalog;
use crate::models::{GearItem, GearProfile, GearRecommendation, ScoredGearItem};

pub const SPECIES_MATCH_POINTS: i32 = 10;
pub const WATER_MATCH_POINTS: i32 = 5;
pub const PRIORITY_CEILING: i32 = 10;
pub const MAX_RECOMMENDATIONS: usize = 5;

pub struct GearScorer {
    catalog: Arc<GearCatalog>,
}

impl GearScorer {
    #[must_use]
    pub fn new(catalog: Arc<GearCatalog>) -> Self {
        Self { catalog }
    }

    /// Score a single item against a profile
    #[must_use]
    pub fn score(item: &GearItem, profile: &GearProfile) -> i32 {
        let mut score = 0;
        if item
            .species_key()
            .contains(&profile.species.to_lowercase())
        {
            score += SPECIES_MATCH_POINTS;
        }
        if item
            .conditions_key()
            .contains(&profile.water_type.to_lowercase())
        {
            score += WATER_MATCH_POINTS;
        }
        let priority = i32::try_from(item.priority).unwrap_or(i32::MAX);
        score + PRIORITY_CEILING.saturating_sub(priority)
    }

    /// Every catalog item with its score, best first
    #[must_use]
    pub fn rank(&self, profile: &GearProfile) -> Vec<ScoredGearItem<'_>> {
        let mut scored: Vec<ScoredGearItem<'_>> = self
            .catalog
            .items()
            .iter()
            .map(|item| ScoredGearItem {
                item,
                score: Self::score(item, profile),
            })
            .collect();

        // stable: equal scores keep catalog order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// The top recommendations for a profile
    #[must_use]
    pub fn recommend(&self, profile: &GearProfile) -> GearRecommendation {
        let recommended: Vec<GearItem> = self
            .rank(profile)
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|scored| scored.item.clone())
            .collect();

        debug!(
            species = %profile.species,
            water_type = %profile.water_type,
            experience_level = %profile.experience_level,
            "Recommended {} of {} catalog items",
            recommended.len(),
            self.catalog.len()
        );

        GearRecommendation::new(recommended)
    }
}
