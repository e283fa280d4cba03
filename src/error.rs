//! Error types and handling for the `FishTrip` service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the `FishTrip` service
#[derive(Error, Debug)]
pub enum FishTripError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A collaborator (weather or travel provider) call failed
    #[error("{provider} error: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Static table could not be loaded
    #[error("Data error: {message}")]
    Data { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl FishTripError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new collaborator error
    pub fn provider<S: Into<String>>(provider: &'static str, message: S) -> Self {
        Self::Provider {
            provider,
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new data error
    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            FishTripError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            FishTripError::Provider { message, .. } => message.clone(),
            FishTripError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            FishTripError::Data { .. } => {
                "Reference data could not be loaded. Please check the data files.".to_string()
            }
            FishTripError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }

    /// HTTP status reported when this error escapes a handler
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            FishTripError::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FishTripError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(json!({ "detail": self.user_message() }))).into_response()
    }
}
