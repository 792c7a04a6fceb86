//! Common error types for the greeter and caller services.
//!
//! This crate provides unified error handling across both services.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code this error is reported with.
    ///
    /// Every variant maps to a 5xx: none of them is the client's fault.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Discovery(_) => 503,
            AppError::Upstream(UpstreamError::Timeout(_)) => 504,
            AppError::Upstream(_) => 502,
            AppError::Config(_) | AppError::Internal(_) => 500,
        }
    }
}

/// Configuration errors. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required setting {0} is not set")]
    Missing(String),

    #[error("Setting {0} must not be empty")]
    Empty(String),

    #[error("Setting {key} is invalid: {reason}")]
    Invalid { key: String, reason: String },
}

/// Service name resolution errors.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("No instance registered for service {0:?}")]
    NotRegistered(String),

    #[error("Invalid registry entry {entry:?}: {reason}")]
    InvalidEntry { entry: String, reason: String },
}

/// Errors calling another service over HTTP.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Connection to {0} failed")]
    Connect(String),

    #[error("Request to {0} timed out")]
    Timeout(String),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Request failed: {0}")]
    Request(String),
}

/// Error response for API clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<&ConfigError> for ErrorResponse {
    fn from(err: &ConfigError) -> Self {
        let code = match err {
            ConfigError::Missing(_) => "CONFIG_MISSING",
            ConfigError::Empty(_) => "CONFIG_EMPTY",
            ConfigError::Invalid { .. } => "CONFIG_INVALID",
        };
        Self::new(code, "Service is misconfigured").with_details(err.to_string())
    }
}

impl From<&DiscoveryError> for ErrorResponse {
    fn from(err: &DiscoveryError) -> Self {
        let code = match err {
            DiscoveryError::NotRegistered(_) => "DISCOVERY_NOT_REGISTERED",
            DiscoveryError::InvalidEntry { .. } => "DISCOVERY_INVALID_ENTRY",
        };
        Self::new(code, "Downstream service could not be resolved").with_details(err.to_string())
    }
}

impl From<&UpstreamError> for ErrorResponse {
    fn from(err: &UpstreamError) -> Self {
        let (code, message) = match err {
            UpstreamError::Connect(_) => ("UPSTREAM_CONNECT", "Downstream service is unreachable"),
            UpstreamError::Timeout(_) => ("UPSTREAM_TIMEOUT", "Downstream service timed out"),
            UpstreamError::Status { .. } => ("UPSTREAM_STATUS", "Downstream service returned an error"),
            UpstreamError::Request(_) => ("UPSTREAM_REQUEST", "Downstream request failed"),
        };
        Self::new(code, message).with_details(err.to_string())
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Config(e) => e.into(),
            AppError::Discovery(e) => e.into(),
            AppError::Upstream(e) => e.into(),
            AppError::Internal(msg) => Self::new("INTERNAL", "Internal error").with_details(msg.clone()),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
