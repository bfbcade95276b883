//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - REST endpoints for listing, creating, fetching and deleting notes
//! - Liveness and readiness probes
//! - A service descriptor at the root path
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! Handlers are stateless; the shared [`state::AppState`] carries the
//! store handle and configuration, both owned by the bootstrap in `main`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export the storage crate
pub use notes_store;
