//! `FishTrip` - fishing trip planning service
//!
//! This library combines season rules, gear recommendations, license fees,
//! travel estimates and weather into a single trip plan, degrading to marker
//! values whenever an external collaborator is unconfigured or failing.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod gear;
pub mod http;
pub mod license;
pub mod logging;
pub mod models;
pub mod planner;
pub mod routing;
pub mod season;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use data::ReferenceData;
pub use error::FishTripError;
pub use gear::{GearCatalog, GearScorer};
pub use license::LicenseTable;
pub use models::{TripPlan, TripRequest};
pub use planner::TripPlanner;
pub use routing::{DistanceMatrixClient, TravelProvider};
pub use season::SeasonTable;
pub use weather::{OpenWeatherClient, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, FishTripError>;
