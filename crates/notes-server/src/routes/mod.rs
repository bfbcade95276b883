//! Route definitions for the HTTP API.

pub mod health;
pub mod notes;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(root::routes())
        .merge(health::routes())
        .merge(notes::routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use notes_store::{NoteStore, StoreConfig};

    use crate::config::ServerConfig;

    /// Router over a store handle that never reaches a live database.
    /// Only routes that do not touch the store are exercised here.
    async fn test_router() -> Router {
        let store = NoteStore::connect(StoreConfig {
            uri: "mongodb://localhost:27017/notes_test".to_string(),
            ..StoreConfig::default()
        })
        .await
        .expect("client builds without a live server");

        let config = ServerConfig {
            port: 0,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
        };

        build_router(AppState::new(store, config))
    }

    #[tokio::test]
    async fn test_root_descriptor_route() {
        let response = test_router()
            .await
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["endpoints"]["notes"], "/api/notes");
    }

    #[tokio::test]
    async fn test_liveness_route_ignores_database() {
        let response = test_router()
            .await
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = test_router()
            .await
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
