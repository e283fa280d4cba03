//! Open-season lookup keyed by (state, species)

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::models::Season;
use crate::{Result, data};

/// One row of a season table file
#[derive(Debug, Deserialize)]
struct SeasonRecord {
    state: String,
    species: String,
    open: String,
    close: String,
    in_season: bool,
}

/// Read-only season table. State matches exactly, species case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct SeasonTable {
    entries: HashMap<(String, String), Season>,
}

impl SeasonTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any existing one for the same key
    #[must_use]
    pub fn with_entry(mut self, state: &str, species: &str, season: Season) -> Self {
        self.entries
            .insert((state.to_string(), species.to_lowercase()), season);
        self
    }

    /// Load a season table from a JSON array of records
    pub fn from_file(path: &Path) -> Result<Self> {
        let records: Vec<SeasonRecord> = data::load_json(path)?;
        Ok(records.into_iter().fold(Self::new(), |table, r| {
            table.with_entry(&r.state, &r.species, Season::new(r.open, r.close, r.in_season))
        }))
    }

    /// Built-in sample table
    #[must_use]
    pub fn sample() -> Self {
        Self::new()
            .with_entry("Maine", "striped bass", Season::new("May 15", "Oct 1", true))
            .with_entry("Florida", "snook", Season::new("Mar 1", "Apr 30", true))
    }

    /// Season for a state and species; a miss yields [`Season::unknown`]
    #[must_use]
    pub fn lookup(&self, state: &str, species: &str) -> Season {
        let key = (state.to_string(), species.to_lowercase());
        match self.entries.get(&key) {
            Some(season) => season.clone(),
            None => {
                debug!("No season on record for {} / {}", state, species);
                Season::unknown()
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
