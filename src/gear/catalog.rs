use std::collections::HashSet;
use std::path::Path;

use crate::models::{GearCategory, GearItem};
use crate::{FishTripError, Result, data};

/// Read-only collection of gear items, in catalog order
#[derive(Debug, Clone)]
pub struct GearCatalog {
    items: Vec<GearItem>,
}

impl GearCatalog {
    /// Build a catalog, rejecting duplicate identifiers
    pub fn new(items: Vec<GearItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(FishTripError::data(format!(
                    "Duplicate gear id in catalog: {}",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    /// Load a catalog from a JSON array of items
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::new(data::load_json(path)?)
    }

    /// Built-in sample catalog
    #[must_use]
    pub fn sample() -> Self {
        let items = vec![
            GearItem {
                id: "rod001".into(),
                name: "Falcon Strike 7'2 MH".into(),
                category: GearCategory::Rod,
                best_for: vec!["bass".into(), "pike".into()],
                conditions: vec!["freshwater".into()],
                priority: 1,
                price: 199.0,
                url: "https://example.com/products/rod001".into(),
            },
            GearItem {
                id: "rod002".into(),
                name: "Falcon Surf 10' Medium".into(),
                category: GearCategory::Rod,
                best_for: vec!["striped bass".into()],
                conditions: vec!["saltwater".into(), "surf".into()],
                priority: 1,
                price: 229.0,
                url: "https://example.com/products/rod002".into(),
            },
            GearItem {
                id: "reel001".into(),
                name: "Stealth 3000".into(),
                category: GearCategory::Reel,
                best_for: vec!["bass".into(), "striped bass".into()],
                conditions: vec!["freshwater".into(), "saltwater".into()],
                priority: 1,
                price: 129.0,
                url: "https://example.com/products/reel001".into(),
            },
        ];
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[GearItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog() {
        let catalog = GearCatalog::sample();
        let ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["rod001", "rod002", "reel001"]);
        assert!(GearCatalog::new(catalog.items().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut items = GearCatalog::sample().items().to_vec();
        items.push(items[0].clone());
        let err = GearCatalog::new(items).unwrap_err();
        assert!(err.to_string().contains("rod001"));
    }
}
