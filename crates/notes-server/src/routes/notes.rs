//! Note CRUD routes.
//!
//! This module implements the note-related HTTP endpoints:
//! - GET /api/notes - List all notes
//! - POST /api/notes - Create a note
//! - GET /api/notes/{id} - Fetch one note
//! - DELETE /api/notes/{id} - Delete one note

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Serialize;

use notes_store::{NewNote, Note, StoreError};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Response for DELETE /api/notes/{id}.
#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    /// Confirmation message.
    pub message: String,
}

/// GET /api/notes - List all notes.
///
/// No ordering guarantee and no pagination; the response is the full
/// collection.
///
/// # Response
///
/// - 200 OK: array of Note
/// - 500 Internal Server Error: `{ "error": "Failed to fetch notes" }`
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    let notes = state.store().list_notes().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch notes");
        ApiError::Internal("Failed to fetch notes".to_string())
    })?;

    tracing::debug!(count = notes.len(), "Listed notes");

    Ok(Json(notes))
}

/// POST /api/notes - Create a note from the request body.
///
/// All fields are optional, and so is the body itself: an empty body
/// creates a note with only the auto-assigned id and timestamp. The raw
/// bytes are parsed here so a missing body is not rejected before the
/// handler runs.
///
/// # Request
///
/// Body: `{ "title": "...", "content": "..." }` (both optional)
///
/// # Response
///
/// - 201 Created: the stored Note including its assigned id
/// - 400 Bad Request: `{ "error": "Failed to create note" }`
async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let fields: NewNote = if body.is_empty() {
        NewNote::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|_| ApiError::BadRequest("Failed to create note".to_string()))?
    };

    let note = state.store().create_note(fields).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to create note");
        ApiError::BadRequest("Failed to create note".to_string())
    })?;

    tracing::info!(id = %note.id, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/notes/{id} - Fetch one note.
///
/// # Response
///
/// - 200 OK: the Note
/// - 404 Not Found: `{ "error": "Note not found" }` (absent or malformed id)
/// - 500 Internal Server Error: `{ "error": "Failed to fetch note" }`
async fn get_note(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Note>> {
    let note = state.store().get_note(&id).await.map_err(|e| match e {
        StoreError::NotFound(_) => ApiError::NotFound("Note not found".to_string()),
        other => {
            tracing::error!(error = %other, id = %id, "Failed to fetch note");
            ApiError::Internal("Failed to fetch note".to_string())
        }
    })?;

    Ok(Json(note))
}

/// DELETE /api/notes/{id} - Delete one note.
///
/// # Response
///
/// - 200 OK: `{ "message": "Note deleted successfully" }`
/// - 404 Not Found: `{ "error": "Note not found" }` (absent or malformed id)
/// - 500 Internal Server Error: `{ "error": "Failed to delete note" }`
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteNoteResponse>> {
    state.store().delete_note(&id).await.map_err(|e| match e {
        StoreError::NotFound(_) => ApiError::NotFound("Note not found".to_string()),
        other => {
            tracing::error!(error = %other, id = %id, "Failed to delete note");
            ApiError::Internal("Failed to delete note".to_string())
        }
    })?;

    tracing::info!(id = %id, "Note deleted");

    Ok(Json(DeleteNoteResponse {
        message: "Note deleted successfully".to_string(),
    }))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", get(get_note).delete(delete_note))
}
