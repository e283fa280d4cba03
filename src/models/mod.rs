//! Data models for the FishTrip service
//!
//! This module contains the request-scoped value objects organized by concern:
//! - Gear: catalog entries, scoring profile and ranked results
//! - Location: validated coordinates
//! - Conditions: season, license, travel and weather lookup results
//! - Trip: the planning request and the aggregated plan

pub mod conditions;
pub mod gear;
pub mod location;
pub mod trip;

// Re-export all public types for convenient access
pub use conditions::{LicenseFee, LicenseInfo, Season, TravelInfo, WeatherInfo};
pub use gear::{GearCategory, GearItem, GearProfile, GearRecommendation, ScoredGearItem};
pub use location::Coordinates;
pub use trip::{PlanTripRequest, TripPlan, TripRequest};
