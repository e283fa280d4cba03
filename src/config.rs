//! Configuration management for the `FishTrip` service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::FishTripError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "FISHTRIP_CONFIG";
/// Weather provider credential, read when `weather.api_key` is unset
pub const WEATHER_KEY_ENV: &str = "OPENWEATHER_KEY";
/// Maps provider credential, read when `travel.api_key` is unset
pub const TRAVEL_KEY_ENV: &str = "GOOGLE_MAPS_KEY";

/// Root configuration structure for the `FishTrip` service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Travel (distance matrix) provider configuration
    #[serde(default)]
    pub travel: TravelConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Reference data overrides
    #[serde(default)]
    pub data: DataConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on handling a single request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
    /// Maximum accepted request body size
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

/// Weather provider configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API key; absent means mock mode
    pub api_key: Option<String>,
    /// Base URL for weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Unit system requested from the provider
    #[serde(default = "default_weather_units")]
    pub units: String,
    /// Request timeout in seconds
    #[serde(default = "default_call_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for failed requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

/// Travel provider configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelConfig {
    /// API key; absent means mock mode
    pub api_key: Option<String>,
    /// Distance matrix endpoint
    #[serde(default = "default_travel_base_url")]
    pub base_url: String,
    /// Travel mode (driving, walking, ...)
    #[serde(default = "default_travel_mode")]
    pub mode: String,
    /// Request timeout in seconds
    #[serde(default = "default_call_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for failed requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Optional JSON files replacing the built-in sample tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub catalog_path: Option<PathBuf>,
    pub seasons_path: Option<PathBuf>,
    pub licenses_path: Option<PathBuf>,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout() -> u32 {
    30
}

fn default_body_limit() -> usize {
    64 * 1024
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_weather_units() -> String {
    "imperial".to_string()
}

fn default_travel_base_url() -> String {
    "https://maps.googleapis.com/maps/api/distancematrix/json".to_string()
}

fn default_travel_mode() -> String {
    "driving".to_string()
}

fn default_call_timeout() -> u32 {
    10
}

fn default_max_retries() -> u32 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            units: default_weather_units(),
            timeout_seconds: default_call_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_travel_base_url(),
            mode: default_travel_mode(),
            timeout_seconds: default_call_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path
            .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(|| Self::get_config_path().filter(|p| p.exists()))
            .unwrap_or_else(|| PathBuf::from("config.toml"));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. FISHTRIP_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("FISHTRIP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_credential_fallbacks(|name| env::var(name).ok());
        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fishtrip").join("config.toml"))
    }

    /// Fill unset provider keys from the conventional credential variables
    pub fn apply_credential_fallbacks<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.weather.api_key.is_none() {
            self.weather.api_key = lookup(WEATHER_KEY_ENV);
        }
        if self.travel.api_key.is_none() {
            self.travel.api_key = lookup(TRAVEL_KEY_ENV);
        }
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        // a blank credential means mock mode, same as no credential
        for key in [&mut self.weather.api_key, &mut self.travel.api_key] {
            if key.as_deref().is_some_and(|k| k.trim().is_empty()) {
                *key = None;
            }
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.units.is_empty() {
            self.weather.units = default_weather_units();
        }
        if self.travel.base_url.is_empty() {
            self.travel.base_url = default_travel_base_url();
        }
        if self.travel.mode.is_empty() {
            self.travel.mode = default_travel_mode();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_call_timeout();
        }
        if self.travel.timeout_seconds == 0 {
            self.travel.timeout_seconds = default_call_timeout();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(FishTripError::config("Server port cannot be 0").into());
        }

        if self.server.request_timeout_seconds > 300 {
            return Err(
                FishTripError::config("Request timeout cannot exceed 300 seconds").into(),
            );
        }

        for (name, timeout, retries) in [
            (
                "Weather",
                self.weather.timeout_seconds,
                self.weather.max_retries,
            ),
            ("Travel", self.travel.timeout_seconds, self.travel.max_retries),
        ] {
            if timeout > 300 {
                return Err(FishTripError::config(format!(
                    "{name} API timeout cannot exceed 300 seconds"
                ))
                .into());
            }

            if timeout >= self.server.request_timeout_seconds {
                return Err(FishTripError::config(format!(
                    "{name} API timeout must be shorter than the request timeout ({}s)",
                    self.server.request_timeout_seconds
                ))
                .into());
            }

            if retries > 10 {
                return Err(
                    FishTripError::config(format!("{name} API max retries cannot exceed 10"))
                        .into(),
                );
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(FishTripError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(FishTripError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Weather", &self.weather.base_url),
            ("Travel", &self.travel.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(FishTripError::config(format!(
                    "{name} API base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
