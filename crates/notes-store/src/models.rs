//! Document and domain types for notes.
//!
//! `NoteDocument` is the BSON shape stored in the collection; `Note` is the
//! domain representation handed to application code, with the ObjectId
//! rendered as hex and the timestamp as a `chrono` datetime.

use chrono::{DateTime, Utc};
use mongodb::bson;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Caller-supplied fields for a new note. Everything is optional; an empty
/// payload produces a note with only the auto-assigned id and timestamp.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewNote {
    /// Optional note title.
    pub title: Option<String>,
    /// Optional note body.
    pub content: Option<String>,
}

/// A note as stored in the `notes` collection.
///
/// Absent optional fields are omitted from the document rather than stored
/// as nulls, so partial documents round-trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDocument {
    /// Document id, assigned at creation.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Optional note title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional note body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: bson::DateTime,
}

impl NoteDocument {
    /// Build a fresh document from caller-supplied fields, assigning the id
    /// and creation timestamp.
    pub fn new(fields: NewNote) -> Self {
        Self {
            id: Some(ObjectId::new()),
            title: fields.title,
            content: fields.content,
            created_at: bson::DateTime::now(),
        }
    }
}

/// A note as returned to application code.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    /// Hex form of the stored ObjectId.
    pub id: String,

    /// Optional note title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional note body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Creation timestamp (RFC 3339 in JSON).
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<NoteDocument> for Note {
    fn from(document: NoteDocument) -> Self {
        Self {
            id: document.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: document.title,
            content: document.content,
            created_at: DateTime::from_timestamp_millis(document.created_at.timestamp_millis())
                .unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_assigns_id_and_timestamp() {
        let document = NoteDocument::new(NewNote::default());
        assert!(document.id.is_some());
        assert!(document.title.is_none());
        assert!(document.content.is_none());
    }

    #[test]
    fn test_partial_document_omits_absent_fields() {
        let document = NoteDocument::new(NewNote {
            title: Some("t".to_string()),
            content: None,
        });

        let bson_doc = bson::to_document(&document).unwrap();
        assert!(bson_doc.contains_key("_id"));
        assert!(bson_doc.contains_key("title"));
        assert!(!bson_doc.contains_key("content"));
        assert!(bson_doc.contains_key("createdAt"));
    }

    #[test]
    fn test_document_missing_optionals_deserializes() {
        let bson_doc = bson::doc! {
            "_id": ObjectId::new(),
            "createdAt": bson::DateTime::now(),
        };

        let document: NoteDocument = bson::from_document(bson_doc).unwrap();
        assert!(document.title.is_none());
        assert!(document.content.is_none());
    }

    #[test]
    fn test_note_from_document() {
        let oid = ObjectId::new();
        let document = NoteDocument {
            id: Some(oid),
            title: Some("t".to_string()),
            content: Some("c".to_string()),
            created_at: bson::DateTime::now(),
        };

        let note = Note::from(document);
        assert_eq!(note.id, oid.to_hex());
        assert_eq!(note.id.len(), 24);
        assert_eq!(note.title.as_deref(), Some("t"));
        assert_eq!(note.content.as_deref(), Some("c"));
    }

    #[test]
    fn test_note_json_shape() {
        let note = Note {
            id: "0123456789abcdef01234567".to_string(),
            title: None,
            content: Some("c".to_string()),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], "0123456789abcdef01234567");
        assert!(json.get("title").is_none());
        assert_eq!(json["content"], "c");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_new_note_from_empty_json() {
        let fields: NewNote = serde_json::from_str("{}").unwrap();
        assert!(fields.title.is_none());
        assert!(fields.content.is_none());
    }
}
