//! HTTP request handlers
//!
//! `GET /` answers with the configured greeting; `GET /health` reports the
//! service as up. Neither consumes any request input.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::config::GreeterConfig;

/// Handler state: the greeting, fixed at startup.
#[derive(Clone)]
pub struct GreeterState {
    message: Arc<str>,
    version: Arc<str>,
}

impl GreeterState {
    pub fn new(config: &GreeterConfig) -> Self {
        Self {
            message: Arc::from(config.message.as_str()),
            version: Arc::from(config.version.as_str()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Health check body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub service: String,
    pub version: String,
}

/// Build the service router.
pub fn create_router(state: GreeterState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Root endpoint - the configured greeting as plain text
pub async fn hello(State(state): State<GreeterState>) -> String {
    state.message().to_string()
}

pub async fn health(State(state): State<GreeterState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        service: "greeter-service".to_string(),
        version: state.version.to_string(),
    })
}
