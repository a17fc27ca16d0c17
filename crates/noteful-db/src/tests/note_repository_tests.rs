//! Note repository behavior against in-memory SQLite.

use std::time::Duration;

use crate::test_fixtures::{seed_folder, seed_note, TestDatabase};
use crate::{ContainsFilter, NoteFields, NoteRepository, ObjectId};

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let db = TestDatabase::new().await.db;

    let note = seed_note(&db, "Cats", None, None).await;

    assert!(ObjectId::is_valid(&note.id.to_hex()));
    assert_eq!(note.created_at, note.updated_at);
    assert_eq!(note.content, None);
    assert_eq!(note.folder_id, None);
}

#[tokio::test]
async fn test_create_then_find_round_trips() {
    let db = TestDatabase::new().await.db;

    let created = seed_note(&db, "Cats", Some("ten things"), None).await;
    let fetched = db.notes.find_by_id(created.id).await.unwrap();

    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_find_by_id_absent_is_none() {
    let db = TestDatabase::new().await.db;

    let id = ObjectId::parse_str("ffffffffffffffffffffffff").unwrap();
    assert_eq!(db.notes.find_by_id(id).await.unwrap(), None);
}

#[tokio::test]
async fn test_find_many_returns_all_in_stable_order() {
    let db = TestDatabase::new().await.db;

    let a = seed_note(&db, "first", None, None).await;
    let b = seed_note(&db, "second", None, None).await;
    let c = seed_note(&db, "third", None, None).await;

    let once = db.notes.find_many(&ContainsFilter::all()).await.unwrap();
    let twice = db.notes.find_many(&ContainsFilter::all()).await.unwrap();

    assert_eq!(once.len(), 3);
    assert_eq!(once, twice);

    let ids: Vec<_> = once.iter().map(|n| n.id).collect();
    assert!(ids.contains(&a.id) && ids.contains(&b.id) && ids.contains(&c.id));
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let db = TestDatabase::new().await.db;

    seed_note(&db, "Concerts", Some("Lady Gaga tickets"), None).await;
    seed_note(&db, "Groceries", Some("milk and eggs"), None).await;

    let hits = db
        .notes
        .find_many(&ContainsFilter::new(Some("gaga")))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Concerts");

    let hits = db
        .notes
        .find_many(&ContainsFilter::new(Some("GROCER")))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Groceries");

    let hits = db
        .notes
        .find_many(&ContainsFilter::new(Some("dogs")))
        .await
        .unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_search_matches_title_or_content() {
    let db = TestDatabase::new().await.db;

    seed_note(&db, "gaga in title", None, None).await;
    seed_note(&db, "other", Some("gaga in content"), None).await;
    seed_note(&db, "neither", Some("nothing"), None).await;

    let hits = db
        .notes
        .find_many(&ContainsFilter::new(Some("gaga")))
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let db = TestDatabase::new().await.db;

    seed_note(&db, "a_c", None, None).await;
    seed_note(&db, "abc", None, None).await;
    seed_note(&db, "100% done", None, None).await;

    // `_` must not act as a single-character wildcard.
    let hits = db
        .notes
        .find_many(&ContainsFilter::new(Some("a_c")))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "a_c");

    // `%` must not act as a multi-character wildcard.
    let hits = db
        .notes
        .find_many(&ContainsFilter::new(Some("100%")))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "100% done");
}

#[tokio::test]
async fn test_update_overwrites_fields_and_refreshes_updated_at() {
    let db = TestDatabase::new().await.db;

    let folder = seed_folder(&db, "Work").await;
    let note = seed_note(&db, "old title", Some("old content"), Some(folder.id)).await;

    tokio::time::sleep(Duration::from_millis(5)).await;

    let updated = db
        .notes
        .update_by_id(
            note.id,
            NoteFields {
                title: "new title".to_string(),
                content: None,
                folder_id: None,
            },
        )
        .await
        .unwrap()
        .expect("note should exist");

    assert_eq!(updated.id, note.id);
    assert_eq!(updated.title, "new title");
    // Full overwrite: omitted fields are cleared, not preserved.
    assert_eq!(updated.content, None);
    assert_eq!(updated.folder_id, None);
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.updated_at > note.updated_at);
}

#[tokio::test]
async fn test_update_absent_id_is_none_not_upsert() {
    let db = TestDatabase::new().await.db;

    let id = ObjectId::parse_str("ffffffffffffffffffffffff").unwrap();
    let updated = db
        .notes
        .update_by_id(
            id,
            NoteFields {
                title: "ghost".to_string(),
                content: None,
                folder_id: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated, None);
    // Nothing was created behind the scenes.
    let all = db.notes.find_many(&ContainsFilter::all()).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let db = TestDatabase::new().await.db;

    let note = seed_note(&db, "Cats", None, None).await;

    db.notes.delete_by_id(note.id).await.unwrap();
    assert_eq!(db.notes.find_by_id(note.id).await.unwrap(), None);

    // Second delete of the same id is still Ok.
    db.notes.delete_by_id(note.id).await.unwrap();
}

#[tokio::test]
async fn test_detach_folder_clears_only_matching_notes() {
    let db = TestDatabase::new().await.db;

    let work = seed_folder(&db, "Work").await;
    let home = seed_folder(&db, "Home").await;
    let filed_a = seed_note(&db, "a", None, Some(work.id)).await;
    let filed_b = seed_note(&db, "b", None, Some(work.id)).await;
    let other = seed_note(&db, "c", None, Some(home.id)).await;

    let detached = db.notes.detach_folder(work.id).await.unwrap();
    assert_eq!(detached, 2);

    for id in [filed_a.id, filed_b.id] {
        let note = db.notes.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(note.folder_id, None);
    }
    let untouched = db.notes.find_by_id(other.id).await.unwrap().unwrap();
    assert_eq!(untouched.folder_id, Some(home.id));
}

#[tokio::test]
async fn test_detach_folder_with_no_dependents_is_zero() {
    let db = TestDatabase::new().await.db;

    let folder = seed_folder(&db, "Empty").await;
    assert_eq!(db.notes.detach_folder(folder.id).await.unwrap(), 0);
}
