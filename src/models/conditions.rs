//! Per-request lookup results: season, license, travel and weather
//!
//! Misses and collaborator outages are represented as marker values rather than
//! errors so a trip plan can always be assembled.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TRAVEL_UNKNOWN: &str = "unknown";
pub const MOCK_DISTANCE: &str = "120 miles";
pub const MOCK_DURATION: &str = "2 hours";
pub const LICENSE_UNKNOWN_STATE: &str = "state not in sample DB";

/// Open season for a (state, species) pair
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Season {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
    pub in_season: bool,
}

impl Season {
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>, in_season: bool) -> Self {
        Self {
            open: Some(open.into()),
            close: Some(close.into()),
            in_season,
        }
    }

    /// No entry on record: not in season, dates unknown
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            open: None,
            close: None,
            in_season: false,
        }
    }
}

/// License fees for one state
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LicenseFee {
    pub resident: String,
    pub nonresident: String,
    pub url: String,
}

/// License lookup result. An unrecognised state is a displayable value, not a failure.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum LicenseInfo {
    Known(LicenseFee),
    UnknownState { error: String },
}

impl LicenseInfo {
    #[must_use]
    pub fn unknown_state() -> Self {
        LicenseInfo::UnknownState {
            error: LICENSE_UNKNOWN_STATE.to_string(),
        }
    }
}

/// Distance and duration between two places
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TravelInfo {
    /// Provider answered; either text may be missing from its payload
    Route {
        distance: Option<String>,
        duration: Option<String>,
    },
    /// Origin or destination missing, no call attempted
    NotRequested { distance: String, duration: String },
    /// Provider unconfigured or failed; placeholder values
    Unavailable {
        warning: String,
        mock_distance: String,
        mock_duration: String,
    },
}

impl TravelInfo {
    #[must_use]
    pub fn not_requested() -> Self {
        TravelInfo::NotRequested {
            distance: TRAVEL_UNKNOWN.to_string(),
            duration: TRAVEL_UNKNOWN.to_string(),
        }
    }

    #[must_use]
    pub fn unavailable(warning: impl Into<String>) -> Self {
        TravelInfo::Unavailable {
            warning: warning.into(),
            mock_distance: MOCK_DISTANCE.to_string(),
            mock_duration: MOCK_DURATION.to_string(),
        }
    }
}

/// Weather conditions for a coordinate
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum WeatherInfo {
    /// Provider payload passed through untouched
    Report(Value),
    /// No credential configured
    Unconfigured { warning: String, mock: bool },
    /// Call attempted and failed
    Failed { warning: String },
}

impl WeatherInfo {
    #[must_use]
    pub fn unconfigured(warning: impl Into<String>) -> Self {
        WeatherInfo::Unconfigured {
            warning: warning.into(),
            mock: true,
        }
    }

    #[must_use]
    pub fn failed(warning: impl Into<String>) -> Self {
        WeatherInfo::Failed {
            warning: warning.into(),
        }
    }
}
