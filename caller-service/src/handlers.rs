//! HTTP request handlers
//!
//! `GET /` fetches the greeting and prefixes the local time. Any failure on
//! the way (resolution, connection, timeout, upstream status) becomes a 5xx
//! with a JSON `ErrorResponse` body.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use error::{AppError, ErrorResponse};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::router::ServiceRouter;
use crate::timestamp::{local_now, stamp, Clock};

/// Handler state. Built once at startup; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct CallerState {
    router: Arc<ServiceRouter>,
    clock: Clock,
    version: Arc<str>,
}

impl CallerState {
    pub fn new(router: ServiceRouter, version: &str) -> Self {
        Self {
            router: Arc::new(router),
            clock: local_now,
            version: Arc::from(version),
        }
    }

    /// Replace the wall clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

/// Health check body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub service: String,
    pub version: String,
}

/// `AppError` as an HTTP response.
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

/// Build the service router.
pub fn create_router(state: CallerState) -> Router {
    Router::new()
        .route("/", get(intercept))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Root endpoint - `"<HH:mm:ss>: <greeting>"` as plain text
pub async fn intercept(State(state): State<CallerState>) -> Result<String, ApiError> {
    let greeting = state.router.get_greeting().await.map_err(|e| {
        tracing::warn!(service = state.router.greeter_service(), "Greeting call failed: {}", e);
        e
    })?;

    Ok(stamp((state.clock)(), &greeting))
}

pub async fn health(State(state): State<CallerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        service: "caller-service".to_string(),
        version: state.version.to_string(),
    })
}
