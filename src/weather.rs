//! Weather collaborator
//!
//! [`WeatherProvider`] is the seam the planner depends on; [`OpenWeatherClient`]
//! is the OpenWeather One Call implementation. Without an API key the client
//! runs in mock mode and answers with a marker instead of calling out.

use std::time::Duration;

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use tracing::{info, instrument};

use crate::config::WeatherConfig;
use crate::models::{Coordinates, WeatherInfo};
use crate::{Result, http};

pub const PROVIDER: &str = "weather";
pub const UNCONFIGURED_WARNING: &str = "OPENWEATHER_KEY not set";

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions and forecast for a coordinate
    async fn conditions(&self, coordinates: Coordinates) -> Result<WeatherInfo>;

    /// Per-call time budget
    fn timeout(&self) -> Duration;
}

pub struct OpenWeatherClient {
    client: ClientWithMiddleware,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = http::build_client(
            PROVIDER,
            Duration::from_secs(config.timeout_seconds.into()),
            config.max_retries,
        )?;
        Ok(Self { client, config })
    }

    fn onecall_url(&self, coordinates: Coordinates, api_key: &str) -> String {
        format!(
            "{}/onecall?lat={}&lon={}&exclude=minutely,hourly&appid={}&units={}",
            self.config.base_url.trim_end_matches('/'),
            coordinates.latitude,
            coordinates.longitude,
            urlencoding::encode(api_key),
            urlencoding::encode(&self.config.units)
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn conditions(&self, coordinates: Coordinates) -> Result<WeatherInfo> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            info!("Weather provider unconfigured, returning mock marker");
            return Ok(WeatherInfo::unconfigured(UNCONFIGURED_WARNING));
        };

        let url = self.onecall_url(coordinates, api_key);
        let payload = http::get_json(&self.client, PROVIDER, &url).await?;
        Ok(WeatherInfo::Report(payload))
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds.into())
    }
}
