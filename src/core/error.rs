//! Error taxonomy - startup errors, persistence errors and the HTTP-facing `AppError`

use axum::{http::StatusCode, response::IntoResponse};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, warn};

/// Failures while loading the startup configuration. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Failures while opening the database pool at startup. Always fatal.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("unable to connect to the database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("database liveness check failed: {0}")]
    Ping(#[source] sqlx::Error),
}

/// Any failure of a statement executed through the gateway.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("query error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("database call exceeded {0:?}")]
    Timeout(Duration),
}

/// A request body that is not valid JSON for the expected payload.
#[derive(Debug, Error)]
#[error("malformed request body: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

/// Error returned by handlers and middleware. The message is the plain-text
/// response body; details are only logged.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "method not supported")
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl From<PersistenceError> for AppError {
    fn from(err: PersistenceError) -> Self {
        Self::internal_server_error("sql error").with_details(err.to_string())
    }
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        Self::internal_server_error("decode error").with_details(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let details = self.details.as_deref().unwrap_or("-");
        if self.status.is_server_error() {
            error!(status = %self.status, details, "{}", self.message);
        } else {
            warn!(status = %self.status, details, "{}", self.message);
        }
        (self.status, self.message).into_response()
    }
}
