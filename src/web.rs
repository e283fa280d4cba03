use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::{AppConfig, ServerConfig};
use crate::planner::TripPlanner;

/// The full application: routes plus tracing, CORS, timeout and body limit
pub fn app(planner: Arc<TripPlanner>, server: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(planner).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(server.request_timeout_seconds.into()),
            ))
            .layer(DefaultBodyLimit::max(server.body_limit_bytes)),
    )
}

pub async fn run(config: AppConfig) -> Result<()> {
    let planner = Arc::new(
        TripPlanner::from_config(&config).context("Failed to initialise trip planner")?,
    );
    let app = app(planner, &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);
    axum::serve(listener, app)
        .await
        .context("Web server terminated")?;
    Ok(())
}
