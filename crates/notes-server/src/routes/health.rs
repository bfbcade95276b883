//! Liveness and readiness probes.
//!
//! Liveness only says the process is serving requests. Readiness reflects
//! live connectivity to the document store, so a deployment can keep the
//! pod alive while routing traffic away until the database is reachable.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

use notes_store::ConnectionState;

use crate::state::AppState;

/// Response for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status, always "healthy" while the process runs.
    pub status: String,
    /// Time the probe was answered.
    pub timestamp: DateTime<Utc>,
}

/// Response for GET /health/ready.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// "ready" or "not ready".
    pub status: String,
    /// Store connection state ("connected", "connecting", ...).
    pub mongodb: String,
    /// Time the probe was answered.
    pub timestamp: DateTime<Utc>,
}

/// GET /health - Liveness probe. Always 200 while the process runs,
/// regardless of database connectivity.
async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// GET /health/ready - Readiness probe.
///
/// # Response
///
/// - 200 OK: `{ "status": "ready", "mongodb": "connected", "timestamp": "..." }`
/// - 503 Service Unavailable: any connection state other than connected
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let connection = state.store().connection_state().await;
    let (status, body) = readiness_response(connection);
    (status, Json(body))
}

/// Shape the readiness response for a given connection state.
fn readiness_response(connection: ConnectionState) -> (StatusCode, ReadinessResponse) {
    let ready = connection == ConnectionState::Connected;

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = ReadinessResponse {
        status: if ready { "ready" } else { "not ready" }.to_string(),
        mongodb: connection.as_str().to_string(),
        timestamp: Utc::now(),
    };

    (status, body)
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(liveness))
        .route("/health/ready", get(readiness))
}
