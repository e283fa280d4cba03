//! Trip planning request and the aggregated plan

use serde::{Deserialize, Serialize};

use crate::models::{GearProfile, GearRecommendation, LicenseInfo, Season, TravelInfo, WeatherInfo};

pub const DEFAULT_RESIDENCY: &str = "resident";
pub const DEFAULT_EXPERIENCE_LEVEL: &str = "intermediate";
pub const DEFAULT_WATER_TYPE: &str = "freshwater";

/// Trip request as received over the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanTripRequest {
    pub species: String,
    pub state: String,
    pub month: Option<String>,
    pub user_location: Option<String>,
    pub residency: Option<String>,
    pub experience_level: Option<String>,
    pub water_type: Option<String>,
    pub destination_name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Trip request with every default applied
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub species: String,
    pub state: String,
    pub month: Option<String>,
    pub residency: String,
    pub experience_level: String,
    pub water_type: String,
    /// Origin and destination, present only when both were given
    pub route: Option<(String, String)>,
    /// Unvalidated (lat, lon), present only when both were given
    pub lat_lon: Option<(f64, f64)>,
}

/// Treat missing, empty and whitespace-only strings alike
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<PlanTripRequest> for TripRequest {
    fn from(req: PlanTripRequest) -> Self {
        if req.lat.is_some() != req.lon.is_some() {
            tracing::debug!("Only one of lat/lon supplied, weather will be skipped");
        }
        let lat_lon = req.lat.zip(req.lon);
        let route = non_blank(req.user_location).zip(non_blank(req.destination_name));

        Self {
            species: req.species,
            state: req.state,
            month: non_blank(req.month),
            residency: non_blank(req.residency).unwrap_or_else(|| DEFAULT_RESIDENCY.into()),
            experience_level: non_blank(req.experience_level)
                .unwrap_or_else(|| DEFAULT_EXPERIENCE_LEVEL.into()),
            water_type: non_blank(req.water_type).unwrap_or_else(|| DEFAULT_WATER_TYPE.into()),
            route,
            lat_lon,
        }
    }
}

impl TripRequest {
    #[must_use]
    pub fn gear_profile(&self) -> GearProfile {
        GearProfile {
            species: self.species.clone(),
            water_type: self.water_type.clone(),
            experience_level: self.experience_level.clone(),
        }
    }
}

/// The combined result of a planning request. Every field except `weather` is always populated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TripPlan {
    pub species: String,
    pub state: String,
    pub season: Season,
    pub gear: GearRecommendation,
    pub license: LicenseInfo,
    pub travel: TravelInfo,
    pub weather: Option<WeatherInfo>,
}
