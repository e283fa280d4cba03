//! Travel distance/duration collaborator backed by the Google Distance Matrix API

use std::time::Duration;

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::config::TravelConfig;
use crate::models::TravelInfo;
use crate::{FishTripError, Result, http};

pub const PROVIDER: &str = "travel";
pub const UNCONFIGURED_WARNING: &str = "GOOGLE_MAPS_KEY not set";

#[async_trait]
pub trait TravelProvider: Send + Sync {
    /// Distance and duration between two named places
    async fn distance(&self, origin: &str, destination: &str) -> Result<TravelInfo>;

    /// Per-call time budget
    fn timeout(&self) -> Duration;
}

pub struct DistanceMatrixClient {
    client: ClientWithMiddleware,
    config: TravelConfig,
}

impl DistanceMatrixClient {
    pub fn new(config: TravelConfig) -> Result<Self> {
        let client = http::build_client(
            PROVIDER,
            Duration::from_secs(config.timeout_seconds.into()),
            config.max_retries,
        )?;
        Ok(Self { client, config })
    }

    fn matrix_url(&self, origin: &str, destination: &str, api_key: &str) -> String {
        format!(
            "{}?origins={}&destinations={}&key={}&mode={}",
            self.config.base_url,
            urlencoding::encode(origin),
            urlencoding::encode(destination),
            urlencoding::encode(api_key),
            urlencoding::encode(&self.config.mode)
        )
    }
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    rows: Vec<MatrixRow>,
}

/// First element of the first row; either text may be missing
fn parse_matrix(payload: serde_json::Value) -> Result<TravelInfo> {
    let response: MatrixResponse = serde_json::from_value(payload).map_err(|e| {
        FishTripError::provider(PROVIDER, format!("Invalid distance matrix response: {e}"))
    })?;

    let element = response
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next())
        .ok_or_else(|| FishTripError::provider(PROVIDER, "No elements in distance matrix response"))?;

    Ok(TravelInfo::Route {
        distance: element.distance.and_then(|d| d.text),
        duration: element.duration.and_then(|d| d.text),
    })
}

#[async_trait]
impl TravelProvider for DistanceMatrixClient {
    #[instrument(skip(self))]
    async fn distance(&self, origin: &str, destination: &str) -> Result<TravelInfo> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            info!("Travel provider unconfigured, returning mock marker");
            return Ok(TravelInfo::unavailable(UNCONFIGURED_WARNING));
        };

        let url = self.matrix_url(origin, destination, api_key);
        let payload = http::get_json(&self.client, PROVIDER, &url).await?;
        parse_matrix(payload)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds.into())
    }
}
