//! CRUD tests against a real MongoDB instance.
//!
//! Run with a local server available:
//!
//! ```text
//! MONGODB_URI=mongodb://localhost:27017/notes_test \
//!     cargo test -p notes-store --features integration-tests
//! ```

#![cfg(feature = "integration-tests")]

use notes_store::{NewNote, NoteStore, StoreConfig};

async fn test_store(collection: &str) -> NoteStore {
    let config = StoreConfig {
        uri: std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/notes_test".to_string()),
        collection: collection.to_string(),
        ..StoreConfig::default()
    };

    NoteStore::connect(config).await.expect("store connects")
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let store = test_store("crud_create_get").await;

    let created = store
        .create_note(NewNote {
            title: Some("t".to_string()),
            content: Some("c".to_string()),
        })
        .await
        .expect("create succeeds");

    assert_eq!(created.id.len(), 24);

    let fetched = store.get_note(&created.id).await.expect("get succeeds");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title.as_deref(), Some("t"));
    assert_eq!(fetched.content.as_deref(), Some("c"));

    store.delete_note(&created.id).await.expect("cleanup");
}

#[tokio::test]
async fn empty_fields_still_create() {
    let store = test_store("crud_empty_fields").await;

    let created = store
        .create_note(NewNote::default())
        .await
        .expect("create succeeds");

    assert!(!created.id.is_empty());
    assert!(created.title.is_none());
    assert!(created.content.is_none());

    store.delete_note(&created.id).await.expect("cleanup");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let store = test_store("crud_delete_get").await;

    let created = store
        .create_note(NewNote::default())
        .await
        .expect("create succeeds");

    store.delete_note(&created.id).await.expect("delete succeeds");

    let err = store.get_note(&created.id).await.unwrap_err();
    assert!(err.is_not_found());

    let err = store.delete_note(&created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_contains_created_notes() {
    let store = test_store("crud_list").await;

    let mut ids = Vec::new();
    for i in 0..3 {
        let created = store
            .create_note(NewNote {
                title: Some(format!("note {i}")),
                content: None,
            })
            .await
            .expect("create succeeds");
        ids.push(created.id);
    }

    let notes = store.list_notes().await.expect("list succeeds");
    assert!(notes.len() >= ids.len());
    for id in &ids {
        assert!(notes.iter().any(|n| &n.id == id));
    }

    for id in &ids {
        store.delete_note(id).await.expect("cleanup");
    }
}
