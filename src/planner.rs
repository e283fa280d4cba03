//! Trip planning orchestrator
//!
//! Combines season, gear, license, travel and weather into one [`TripPlan`].
//! Every sub-resolution handles its own failure: a collaborator error or timeout
//! becomes a warning marker in the plan and never affects the other fields.

use std::sync::Arc;
use std::time::Duration;

use futures::future::OptionFuture;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::data::ReferenceData;
use crate::gear::GearScorer;
use crate::license::LicenseTable;
use crate::models::{
    Coordinates, GearProfile, GearRecommendation, LicenseInfo, Season, TravelInfo, TripPlan,
    TripRequest, WeatherInfo,
};
use crate::routing::{DistanceMatrixClient, TravelProvider};
use crate::season::SeasonTable;
use crate::weather::{OpenWeatherClient, WeatherProvider};
use crate::{FishTripError, Result};

pub const TRAVEL_FAILED_WARNING: &str = "google api failed or key not set";
pub const WEATHER_FAILED_WARNING: &str = "weather failed or key not set";

pub struct TripPlanner {
    scorer: GearScorer,
    seasons: Arc<SeasonTable>,
    licenses: Arc<LicenseTable>,
    weather: Arc<dyn WeatherProvider>,
    travel: Arc<dyn TravelProvider>,
}

impl TripPlanner {
    #[must_use]
    pub fn new(
        data: ReferenceData,
        weather: Arc<dyn WeatherProvider>,
        travel: Arc<dyn TravelProvider>,
    ) -> Self {
        Self {
            scorer: GearScorer::new(data.catalog),
            seasons: data.seasons,
            licenses: data.licenses,
            weather,
            travel,
        }
    }

    /// Build the planner with the configured tables and HTTP collaborators
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let data = ReferenceData::load(&config.data)?;
        let weather = OpenWeatherClient::new(config.weather.clone())?;
        let travel = DistanceMatrixClient::new(config.travel.clone())?;

        info!(
            weather_configured = config.weather.api_key.is_some(),
            travel_configured = config.travel.api_key.is_some(),
            "Trip planner ready"
        );

        Ok(Self::new(data, Arc::new(weather), Arc::new(travel)))
    }

    #[must_use]
    pub fn season(&self, state: &str, species: &str) -> Season {
        self.seasons.lookup(state, species)
    }

    #[must_use]
    pub fn gear(&self, profile: &GearProfile) -> GearRecommendation {
        self.scorer.recommend(profile)
    }

    #[must_use]
    pub fn license(&self, state: &str, residency: &str) -> LicenseInfo {
        self.licenses.lookup(state, residency)
    }

    /// Direct weather lookup; collaborator failures and timeouts are returned to the caller
    pub async fn weather(&self, coordinates: Coordinates) -> Result<WeatherInfo> {
        let limit = self.weather.timeout();
        timeout(limit, self.weather.conditions(coordinates))
            .await
            .map_err(|_| timed_out("weather", limit))?
    }

    /// Direct travel lookup; collaborator failures and timeouts are returned to the caller
    pub async fn travel(&self, origin: &str, destination: &str) -> Result<TravelInfo> {
        let limit = self.travel.timeout();
        timeout(limit, self.travel.distance(origin, destination))
            .await
            .map_err(|_| timed_out("travel", limit))?
    }

    /// Assemble a full plan. Never fails; only `weather` may be absent.
    #[instrument(skip(self, request), fields(species = %request.species, state = %request.state))]
    pub async fn plan(&self, request: &TripRequest) -> TripPlan {
        let season = self.season(&request.state, &request.species);
        let gear = self.gear(&request.gear_profile());
        let license = self.license(&request.state, &request.residency);

        let weather: OptionFuture<_> = request
            .lat_lon
            .map(|(lat, lon)| self.resolve_weather(lat, lon))
            .into();
        let (travel, weather) = tokio::join!(self.resolve_travel(request.route.as_ref()), weather);

        TripPlan {
            species: request.species.clone(),
            state: request.state.clone(),
            season,
            gear,
            license,
            travel,
            weather,
        }
    }

    async fn resolve_travel(&self, route: Option<&(String, String)>) -> TravelInfo {
        let Some((origin, destination)) = route else {
            return TravelInfo::not_requested();
        };

        match timeout(self.travel.timeout(), self.travel.distance(origin, destination)).await {
            Ok(Ok(info)) => info,
            Ok(Err(e)) => {
                warn!("Travel lookup failed, using placeholder: {}", e);
                TravelInfo::unavailable(TRAVEL_FAILED_WARNING)
            }
            Err(_) => {
                warn!(
                    "Travel lookup timed out after {}s, using placeholder",
                    self.travel.timeout().as_secs()
                );
                TravelInfo::unavailable(TRAVEL_FAILED_WARNING)
            }
        }
    }

    async fn resolve_weather(&self, lat: f64, lon: f64) -> WeatherInfo {
        let coordinates = match Coordinates::new(lat, lon) {
            Ok(coordinates) => coordinates,
            Err(e) => {
                warn!("Skipping weather lookup: {}", e);
                return WeatherInfo::failed(WEATHER_FAILED_WARNING);
            }
        };

        match timeout(self.weather.timeout(), self.weather.conditions(coordinates)).await {
            Ok(Ok(info)) => info,
            Ok(Err(e)) => {
                warn!("Weather lookup failed for {}: {}", coordinates.format_coordinates(), e);
                WeatherInfo::failed(WEATHER_FAILED_WARNING)
            }
            Err(_) => {
                warn!(
                    "Weather lookup timed out after {}s",
                    self.weather.timeout().as_secs()
                );
                WeatherInfo::failed(WEATHER_FAILED_WARNING)
            }
        }
    }
}

fn timed_out(provider: &'static str, limit: Duration) -> FishTripError {
    FishTripError::provider(
        provider,
        format!("{provider} lookup timed out after {}s", limit.as_secs()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanTripRequest;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const CALL_TIMEOUT: Duration = Duration::from_secs(10);

    #[derive(Clone, Copy)]
    enum Behavior {
        Succeed,
        Fail,
        Hang,
    }

    struct FakeWeather {
        behavior: Behavior,
        calls: AtomicUsize,
    }

    struct FakeTravel {
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl FakeWeather {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl FakeTravel {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
            })
        }
    }

    async fn hang() {
        tokio::time::sleep(Duration::from_secs(3600)).await;
    }

    #[async_trait]
    impl WeatherProvider for FakeWeather {
        async fn conditions(&self, coordinates: Coordinates) -> Result<WeatherInfo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Succeed => Ok(WeatherInfo::Report(
                    json!({ "lat": coordinates.latitude, "current": { "temp": 58.0 } }),
                )),
                Behavior::Fail => Err(FishTripError::provider("weather", "HTTP status 503")),
                Behavior::Hang => {
                    hang().await;
                    Ok(WeatherInfo::Report(json!({})))
                }
            }
        }

        fn timeout(&self) -> Duration {
            CALL_TIMEOUT
        }
    }

    #[async_trait]
    impl TravelProvider for FakeTravel {
        async fn distance(&self, _origin: &str, _destination: &str) -> Result<TravelInfo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Succeed => Ok(TravelInfo::Route {
                    distance: Some("31.2 mi".into()),
                    duration: Some("42 mins".into()),
                }),
                Behavior::Fail => Err(FishTripError::provider("travel", "network error")),
                Behavior::Hang => {
                    hang().await;
                    Ok(TravelInfo::not_requested())
                }
            }
        }

        fn timeout(&self) -> Duration {
            CALL_TIMEOUT
        }
    }

    fn planner(weather: Arc<FakeWeather>, travel: Arc<FakeTravel>) -> TripPlanner {
        TripPlanner::new(ReferenceData::sample(), weather, travel)
    }

    fn request(req: PlanTripRequest) -> TripRequest {
        TripRequest::from(req)
    }

    fn full_request() -> TripRequest {
        request(PlanTripRequest {
            species: "striped bass".into(),
            state: "Maine".into(),
            user_location: Some("Portland, ME".into()),
            destination_name: Some("Popham Beach".into()),
            lat: Some(43.73),
            lon: Some(-69.79),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_plan_with_all_collaborators_healthy() {
        let weather = FakeWeather::new(Behavior::Succeed);
        let travel = FakeTravel::new(Behavior::Succeed);
        let plan = planner(weather.clone(), travel.clone())
            .plan(&full_request())
            .await;

        assert!(plan.season.in_season);
        assert_eq!(
            plan.travel,
            TravelInfo::Route {
                distance: Some("31.2 mi".into()),
                duration: Some("42 mins".into()),
            }
        );
        assert!(matches!(plan.weather, Some(WeatherInfo::Report(_))));
        assert_eq!(weather.calls.load(Ordering::SeqCst), 1);
        assert_eq!(travel.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failures_degrade_to_markers() {
        let plan = planner(FakeWeather::new(Behavior::Fail), FakeTravel::new(Behavior::Fail))
            .plan(&full_request())
            .await;

        assert_eq!(plan.travel, TravelInfo::unavailable(TRAVEL_FAILED_WARNING));
        assert_eq!(plan.weather, Some(WeatherInfo::failed(WEATHER_FAILED_WARNING)));
        // local fields are unaffected
        assert!(plan.season.in_season);
        assert!(matches!(plan.license, LicenseInfo::Known(_)));
        assert_eq!(plan.gear.count, 3);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_affect_the_other() {
        let plan = planner(FakeWeather::new(Behavior::Fail), FakeTravel::new(Behavior::Succeed))
            .plan(&full_request())
            .await;
        assert!(matches!(plan.travel, TravelInfo::Route { .. }));
        assert_eq!(plan.weather, Some(WeatherInfo::failed(WEATHER_FAILED_WARNING)));

        let plan = planner(FakeWeather::new(Behavior::Succeed), FakeTravel::new(Behavior::Fail))
            .plan(&full_request())
            .await;
        assert_eq!(plan.travel, TravelInfo::unavailable(TRAVEL_FAILED_WARNING));
        assert!(matches!(plan.weather, Some(WeatherInfo::Report(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_collaborators_time_out() {
        let started = tokio::time::Instant::now();
        let plan = planner(FakeWeather::new(Behavior::Hang), FakeTravel::new(Behavior::Hang))
            .plan(&full_request())
            .await;

        assert_eq!(plan.travel, TravelInfo::unavailable(TRAVEL_FAILED_WARNING));
        assert_eq!(plan.weather, Some(WeatherInfo::failed(WEATHER_FAILED_WARNING)));
        // both calls run concurrently, so the plan waits one timeout, not two
        assert!(started.elapsed() < CALL_TIMEOUT * 2);
    }

    #[tokio::test]
    async fn test_travel_not_attempted_without_both_places() {
        let travel = FakeTravel::new(Behavior::Succeed);
        let planner = planner(FakeWeather::new(Behavior::Succeed), travel.clone());

        for (origin, destination) in [
            (Some("Portland, ME"), None),
            (None, Some("Sebago Lake")),
            (Some(""), Some("Sebago Lake")),
            (None, None),
        ] {
            let plan = planner
                .plan(&request(PlanTripRequest {
                    species: "bass".into(),
                    state: "Maine".into(),
                    user_location: origin.map(String::from),
                    destination_name: destination.map(String::from),
                    ..Default::default()
                }))
                .await;
            assert_eq!(plan.travel, TravelInfo::not_requested());
        }
        assert_eq!(travel.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_weather_omitted_without_both_coordinates() {
        let weather = FakeWeather::new(Behavior::Succeed);
        let planner = planner(weather.clone(), FakeTravel::new(Behavior::Succeed));

        for (lat, lon) in [(Some(43.7), None), (None, Some(-69.8)), (None, None)] {
            let plan = planner
                .plan(&request(PlanTripRequest {
                    species: "bass".into(),
                    state: "Maine".into(),
                    lat,
                    lon,
                    ..Default::default()
                }))
                .await;
            assert_eq!(plan.weather, None);
        }
        assert_eq!(weather.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_weather_resolved_at_null_island() {
        let weather = FakeWeather::new(Behavior::Succeed);
        let plan = planner(weather.clone(), FakeTravel::new(Behavior::Succeed))
            .plan(&request(PlanTripRequest {
                species: "tuna".into(),
                state: "Florida".into(),
                lat: Some(0.0),
                lon: Some(0.0),
                ..Default::default()
            }))
            .await;
        assert!(plan.weather.is_some());
        assert_eq!(weather.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_out_of_range_coordinates_degrade_weather() {
        let weather = FakeWeather::new(Behavior::Succeed);
        let plan = planner(weather.clone(), FakeTravel::new(Behavior::Succeed))
            .plan(&request(PlanTripRequest {
                species: "bass".into(),
                state: "Maine".into(),
                lat: Some(95.0),
                lon: Some(10.0),
                ..Default::default()
            }))
            .await;
        assert_eq!(plan.weather, Some(WeatherInfo::failed(WEATHER_FAILED_WARNING)));
        assert_eq!(plan.season, Season::unknown());
        assert_eq!(weather.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_maine_striped_bass_plan() {
        let plan = planner(FakeWeather::new(Behavior::Fail), FakeTravel::new(Behavior::Fail))
            .plan(&request(PlanTripRequest {
                species: "striped bass".into(),
                state: "Maine".into(),
                residency: Some("resident".into()),
                ..Default::default()
            }))
            .await;

        assert_eq!(plan.species, "striped bass");
        assert_eq!(plan.state, "Maine");
        assert_eq!(plan.season, Season::new("May 15", "Oct 1", true));
        let LicenseInfo::Known(fee) = &plan.license else {
            panic!("expected Maine fees");
        };
        assert_eq!((fee.resident.as_str(), fee.nonresident.as_str()), ("$25", "$64"));
        assert_eq!(plan.travel, TravelInfo::not_requested());
        assert_eq!(plan.weather, None);

        let ids: Vec<&str> = plan.gear.recommended.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["reel001", "rod002", "rod001"]);
    }

    #[tokio::test]
    async fn test_unknown_state_and_species() {
        let plan = planner(FakeWeather::new(Behavior::Succeed), FakeTravel::new(Behavior::Succeed))
            .plan(&request(PlanTripRequest {
                species: "marlin".into(),
                state: "Wyoming".into(),
                ..Default::default()
            }))
            .await;
        assert_eq!(plan.season, Season::unknown());
        assert_eq!(plan.license, LicenseInfo::unknown_state());
        assert_eq!(plan.gear.count, 3);
    }

    #[tokio::test]
    async fn test_direct_lookups_propagate_failures() {
        let planner = planner(FakeWeather::new(Behavior::Fail), FakeTravel::new(Behavior::Fail));
        assert!(
            planner
                .weather(Coordinates::new(43.7, -69.8).unwrap())
                .await
                .is_err()
        );
        assert!(planner.travel("Portland, ME", "Sebago Lake").await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_direct_lookups_time_out_as_errors() {
        let planner = planner(FakeWeather::new(Behavior::Hang), FakeTravel::new(Behavior::Hang));

        let err = planner
            .weather(Coordinates::new(43.7, -69.8).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, FishTripError::Provider { provider: "weather", .. }));
        assert!(err.user_message().contains("timed out"));

        let err = planner
            .travel("Portland, ME", "Sebago Lake")
            .await
            .unwrap_err();
        assert!(matches!(err, FishTripError::Provider { provider: "travel", .. }));
    }
}
