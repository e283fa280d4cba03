//! Tracing subscriber setup

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins over the configured level
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},fishtrip={level},tower_http={level}",
            level = config.level
        ))
    })
}

/// Install the global subscriber. Must be called once at startup.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let builder = fmt().with_env_filter(env_filter(config)).with_target(true);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialise logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_level() {
        let config = LoggingConfig {
            level: "debug".into(),
            format: "pretty".into(),
        };
        if std::env::var_os("RUST_LOG").is_none() {
            let filter = env_filter(&config).to_string();
            assert!(filter.contains("fishtrip=debug"));
        }
    }
}
