//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::NoteStore;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// The store's lifecycle is owned by the bootstrap: constructed once at
/// startup, released via `close()` after the server exits.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle.
    store: Arc<NoteStore>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: NoteStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the document store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
