use anyhow::{Context, Result};
use fishtrip::{AppConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging)?;

    tracing::info!(
        "Starting fishtrip {} on {}:{}",
        fishtrip::VERSION,
        config.server.host,
        config.server.port
    );

    web::run(config).await
}
