//! HTTP handlers
//!
//! The single-purpose endpoints surface collaborator failures as HTTP 500;
//! `/plan_trip` never does and always answers with a complete plan.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::FishTripError;
use crate::models::{
    Coordinates, GearProfile, GearRecommendation, LicenseInfo, PlanTripRequest, TravelInfo,
    TripPlan, TripRequest, WeatherInfo,
};
use crate::planner::TripPlanner;

type AppState = Arc<TripPlanner>;
type ApiResult<T> = Result<Json<T>, FishTripError>;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct TravelRequest {
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Deserialize)]
pub struct LicenseRequest {
    pub state: String,
    pub residency: String,
}

#[derive(Debug, Deserialize)]
pub struct GearRequest {
    #[serde(flatten)]
    pub profile: GearProfile,
    /// Accepted for client compatibility, not used in ranking
    pub user_location: Option<String>,
}

/// All endpoints, served at the root and again under `/api`
pub fn router(planner: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/weather", get(weather))
        .route("/travel", post(travel))
        .route("/license", post(license))
        .route("/gear", post(gear))
        .route("/plan_trip", post(plan_trip));

    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .with_state(planner)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn weather(
    State(planner): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> ApiResult<WeatherInfo> {
    let coordinates = Coordinates::new(query.lat, query.lon)?;
    Ok(Json(planner.weather(coordinates).await?))
}

async fn travel(
    State(planner): State<AppState>,
    Json(req): Json<TravelRequest>,
) -> ApiResult<TravelInfo> {
    Ok(Json(planner.travel(&req.origin, &req.destination).await?))
}

async fn license(
    State(planner): State<AppState>,
    Json(req): Json<LicenseRequest>,
) -> Json<LicenseInfo> {
    Json(planner.license(&req.state, &req.residency))
}

async fn gear(
    State(planner): State<AppState>,
    Json(req): Json<GearRequest>,
) -> Json<GearRecommendation> {
    if let Some(location) = &req.user_location {
        debug!("Ignoring user_location {:?} for gear ranking", location);
    }
    Json(planner.gear(&req.profile))
}

async fn plan_trip(
    State(planner): State<AppState>,
    Json(req): Json<PlanTripRequest>,
) -> Json<TripPlan> {
    let plan = planner.plan(&TripRequest::from(req)).await;
    info!(
        "Planned trip for {} in {} ({} gear items)",
        plan.species, plan.state, plan.gear.count
    );
    Json(plan)
}
