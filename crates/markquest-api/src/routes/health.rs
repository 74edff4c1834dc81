//! Health check endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;
use crate::telemetry::SERVICE_NAME;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name, as reported to the trace collector.
    pub service: &'static str,
    /// Service version.
    pub version: String,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Returns the health check router. Does not touch the game store.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
