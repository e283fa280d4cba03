//! Fishing license fees per state

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::models::{LicenseFee, LicenseInfo};
use crate::{Result, data};

/// Read-only license fee table keyed by exact state name
#[derive(Debug, Clone, Default)]
pub struct LicenseTable {
    fees: HashMap<String, LicenseFee>,
}

impl LicenseTable {
    #[must_use]
    pub fn new(fees: HashMap<String, LicenseFee>) -> Self {
        Self { fees }
    }

    /// Load a fee table from a JSON object of state -> fee
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(data::load_json(path)?))
    }

    /// Built-in sample table
    #[must_use]
    pub fn sample() -> Self {
        let fee = |resident: &str, nonresident: &str, url: &str| LicenseFee {
            resident: resident.to_string(),
            nonresident: nonresident.to_string(),
            url: url.to_string(),
        };
        Self::new(HashMap::from([
            (
                "Maine".to_string(),
                fee(
                    "$25",
                    "$64",
                    "https://www.maine.gov/ifw/licenses-permits/fishing/index.html",
                ),
            ),
            ("Florida".to_string(), fee("$17", "$47", "https://myfwc.com/")),
            (
                "Texas".to_string(),
                fee("$30", "$58", "https://tpwd.texas.gov/"),
            ),
        ]))
    }

    /// Fee record for a state. Residency is accepted but both fees are always returned.
    #[must_use]
    pub fn lookup(&self, state: &str, residency: &str) -> LicenseInfo {
        match self.fees.get(state) {
            Some(fee) => LicenseInfo::Known(fee.clone()),
            None => {
                debug!("No license data for {} ({})", state, residency);
                LicenseInfo::unknown_state()
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }
}
