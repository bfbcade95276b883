//! notes-store: MongoDB storage layer for the notes service
//!
//! This crate provides:
//! - A `NoteStore` handle wrapping a MongoDB client
//! - Connection-state tracking for the readiness probe
//! - Typed CRUD operations over a single `notes` collection
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{NoteStore, StoreConfig};
//!
//! let config = StoreConfig::from_env();
//! let store = NoteStore::connect(config).await?;
//!
//! // Insert a note
//! let note = store.create_note(NewNote::default()).await?;
//!
//! // Fetch it back
//! let fetched = store.get_note(&note.id).await?;
//! ```

pub mod error;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{NewNote, Note, NoteDocument};
pub use store::{ConnectionState, NoteStore, StoreConfig};
