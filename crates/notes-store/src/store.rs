//! Store handle and connection management.
//!
//! `NoteStore` wraps a `mongodb::Client` plus a shared connection-state cell.
//! Connecting never blocks the caller on database availability: the initial
//! ping runs in a background task and only the state cell records the
//! outcome, so the HTTP listener can start while the database is down.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use crate::error::{StoreError, StoreResult};
use crate::models::{NewNote, Note, NoteDocument};

/// Default connection string, pointing at a local document store.
pub const DEFAULT_URI: &str = "mongodb://mongodb:27017/devsecops";

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE: &str = "devsecops";

/// Collection holding note documents.
pub const NOTES_COLLECTION: &str = "notes";

/// Bound on server selection so the readiness probe answers promptly when
/// the database is unreachable.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(2);

/// Configuration for connecting to the database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string.
    pub uri: String,
    /// Database name, used when the connection string does not carry one.
    pub database: String,
    /// Collection name for note documents.
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: NOTES_COLLECTION.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `MONGODB_URI` - Optional, defaults to `mongodb://mongodb:27017/devsecops`
    pub fn from_env() -> Self {
        let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());

        Self {
            uri,
            ..Self::default()
        }
    }
}

/// Connection state of the store, as observed by the readiness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    /// No reachable server.
    Disconnected = 0,
    /// Last contact with the server succeeded.
    Connected = 1,
    /// Initial ping still in flight.
    Connecting = 2,
    /// Shutdown in progress.
    Disconnecting = 3,
}

impl ConnectionState {
    /// Lowercase string form used in readiness bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connected => "connected",
            Self::Connecting => "connecting",
            Self::Disconnecting => "disconnecting",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Connected,
            2 => Self::Connecting,
            3 => Self::Disconnecting,
            _ => Self::Disconnected,
        }
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to the notes collection.
///
/// Cloneable; all clones share the same client and connection-state cell.
#[derive(Debug, Clone)]
pub struct NoteStore {
    client: Client,
    database: Database,
    collection: Collection<NoteDocument>,
    state: Arc<AtomicU8>,
}

impl NoteStore {
    /// Connect to the database with the given configuration.
    ///
    /// The only failure here is a malformed connection string. Database
    /// unavailability is not an error: a background ping records the
    /// outcome in the connection state and logs it, while the returned
    /// store is usable immediately (operations surface their own errors).
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        if options.server_selection_timeout.is_none() {
            options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        }

        let database_name = options
            .default_database
            .clone()
            .unwrap_or_else(|| config.database.clone());

        let client = Client::with_options(options)?;
        let database = client.database(&database_name);
        let collection = database.collection::<NoteDocument>(&config.collection);

        let store = Self {
            client,
            database,
            collection,
            state: Arc::new(AtomicU8::new(ConnectionState::Connecting as u8)),
        };

        let probe = store.clone();
        tokio::spawn(async move {
            match probe.ping().await {
                Ok(()) => {
                    probe.set_state(ConnectionState::Connected);
                    tracing::info!("MongoDB connected successfully");
                }
                Err(e) => {
                    probe.set_state(ConnectionState::Disconnected);
                    tracing::error!(error = %e, "MongoDB connection error");
                }
            }
        });

        Ok(store)
    }

    /// Current connection state.
    ///
    /// While a transition is in flight (initial ping, shutdown) the cached
    /// state is returned as-is; otherwise the server is pinged so the
    /// readiness probe reflects live connectivity.
    pub async fn connection_state(&self) -> ConnectionState {
        match self.cached_state() {
            state @ (ConnectionState::Connecting | ConnectionState::Disconnecting) => state,
            _ => match self.ping().await {
                Ok(()) => {
                    self.set_state(ConnectionState::Connected);
                    ConnectionState::Connected
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Readiness ping failed");
                    self.set_state(ConnectionState::Disconnected);
                    ConnectionState::Disconnected
                }
            },
        }
    }

    /// Return every stored note. No ordering guarantee, no pagination.
    pub async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let documents: Vec<NoteDocument> = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(Note::from).collect())
    }

    /// Insert a new note, assigning its id and creation timestamp.
    pub async fn create_note(&self, fields: NewNote) -> StoreResult<Note> {
        let document = NoteDocument::new(fields);

        self.collection
            .insert_one(&document)
            .await
            .map_err(classify_write_error)?;

        Ok(Note::from(document))
    }

    /// Fetch a note by id.
    ///
    /// An id that is not valid ObjectId hex maps to `NotFound` without
    /// touching the database, matching a lookup for an absent document.
    pub async fn get_note(&self, id: &str) -> StoreResult<Note> {
        let oid = parse_object_id(id)?;

        match self.collection.find_one(doc! { "_id": oid }).await? {
            Some(document) => Ok(Note::from(document)),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Delete a note by id. `NotFound` when the id is malformed or no
    /// document matched.
    pub async fn delete_note(&self, id: &str) -> StoreResult<()> {
        let oid = parse_object_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Shut the client down and release its connections.
    pub async fn close(&self) {
        self.set_state(ConnectionState::Disconnecting);
        self.client.clone().shutdown().await;
        self.set_state(ConnectionState::Disconnected);
        tracing::info!("MongoDB connection closed");
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn cached_state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::SeqCst))
    }

    fn set_state(&self, state: ConnectionState) {
        self.state.store(state as u8, Ordering::SeqCst);
    }
}

/// Parse an ObjectId, treating malformed input as a missing note.
fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::NotFound(id.to_string()))
}

/// Map insert failures: server-side document rejection is a validation
/// error, everything else stays a database error.
fn classify_write_error(e: mongodb::error::Error) -> StoreError {
    use mongodb::error::ErrorKind;

    let rejected = matches!(
        e.kind.as_ref(),
        ErrorKind::Write(_) | ErrorKind::InvalidArgument { .. }
    );

    if rejected {
        StoreError::Validation(e.to_string())
    } else {
        StoreError::Database(e)
    }
}
