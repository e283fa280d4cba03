//! Outbound HTTP plumbing shared by the collaborator clients
//!
//! Each collaborator gets its own client with a per-call timeout and
//! transient-error retries with exponential backoff.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{FishTripError, Result, VERSION};

const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// Build a retrying HTTP client
pub fn build_client(
    provider: &'static str,
    timeout: Duration,
    max_retries: u32,
) -> Result<ClientWithMiddleware> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("fishtrip/{VERSION}"))
        .build()
        .map_err(|e| {
            FishTripError::config(format!("Failed to create {provider} HTTP client: {e}"))
        })?;

    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);

    Ok(ClientBuilder::new(client)
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build())
}

/// Strip the query string so credentials never reach the logs
fn redact(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Map a non-success status to a provider error
fn status_error(provider: &'static str, status: StatusCode) -> FishTripError {
    let message = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            format!("{provider} API rejected the configured credential ({status})")
        }
        StatusCode::NOT_FOUND => format!("{provider} API resource not found ({status})"),
        StatusCode::TOO_MANY_REQUESTS => format!("{provider} API rate limit exceeded ({status})"),
        _ => format!(
            "{provider} API request failed with status: {} - {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error")
        ),
    };
    FishTripError::provider(provider, message)
}

/// GET a URL and decode the JSON body
pub async fn get_json(
    client: &ClientWithMiddleware,
    provider: &'static str,
    url: &str,
) -> Result<Value> {
    let start_time = Instant::now();
    debug!("{} API request: {}", provider, redact(url));

    let response = client.get(url).send().await.map_err(|e| {
        warn!("{} API network error: {}", provider, e);
        FishTripError::provider(provider, format!("{provider} API network error: {e}"))
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("{} API returned {}", provider, status);
        return Err(status_error(provider, status));
    }

    let body: Value = response.json().await.map_err(|e| {
        FishTripError::provider(provider, format!("Invalid {provider} API response: {e}"))
    })?;

    let elapsed = start_time.elapsed();
    if elapsed > SLOW_RESPONSE {
        warn!(
            "Slow {} API response: {:.3}s",
            provider,
            elapsed.as_secs_f64()
        );
    } else {
        info!(
            "{} API request succeeded in {:.3}s",
            provider,
            elapsed.as_secs_f64()
        );
    }

    Ok(body)
}
