//! Reference tables (gear catalog, seasons, licenses) and their JSON loading

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::DataConfig;
use crate::gear::GearCatalog;
use crate::license::LicenseTable;
use crate::season::SeasonTable;
use crate::{FishTripError, Result};

/// The process-wide read-only tables, built once at startup
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub catalog: Arc<GearCatalog>,
    pub seasons: Arc<SeasonTable>,
    pub licenses: Arc<LicenseTable>,
}

impl ReferenceData {
    /// Built-in sample tables
    #[must_use]
    pub fn sample() -> Self {
        Self {
            catalog: Arc::new(GearCatalog::sample()),
            seasons: Arc::new(SeasonTable::sample()),
            licenses: Arc::new(LicenseTable::sample()),
        }
    }

    /// Sample tables, each replaced by its configured file when one is set
    pub fn load(config: &DataConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => GearCatalog::from_file(path)?,
            None => GearCatalog::sample(),
        };
        let seasons = match &config.seasons_path {
            Some(path) => SeasonTable::from_file(path)?,
            None => SeasonTable::sample(),
        };
        let licenses = match &config.licenses_path {
            Some(path) => LicenseTable::from_file(path)?,
            None => LicenseTable::sample(),
        };

        info!(
            "Reference data ready: {} gear items, {} seasons, {} license states",
            catalog.len(),
            seasons.len(),
            licenses.len()
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            seasons: Arc::new(seasons),
            licenses: Arc::new(licenses),
        })
    }
}

/// Read and deserialize a JSON document from disk
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    let value = serde_json::from_str(&contents).map_err(|e| {
        FishTripError::data(format!("Failed to parse {}: {e}", path.display()))
    })?;
    info!("Loaded reference data from {}", path.display());
    Ok(value)
}
