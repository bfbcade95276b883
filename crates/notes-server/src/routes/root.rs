//! Service descriptor at the root path.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Human-readable service name.
    pub message: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Well-known endpoints.
    pub endpoints: Endpoints,
}

/// Endpoint listing within the service descriptor.
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub readiness: &'static str,
    pub notes: &'static str,
}

/// GET / - Service descriptor.
async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Notes API backed by MongoDB",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            health: "/health",
            readiness: "/health/ready",
            notes: "/api/notes",
        },
    })
}

/// Build the root route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(service_info))
}
