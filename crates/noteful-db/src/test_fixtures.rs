//! Test fixtures for database integration tests.
//!
//! Provides an in-memory SQLite database with the schema applied, plus small
//! seed helpers. No external service is required.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use noteful_db::test_fixtures::TestDatabase;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let db = TestDatabase::new().await.db;
//!     // Run your tests...
//! }
//! ```

use sqlx::sqlite::SqlitePoolOptions;

use crate::{Database, Folder, FolderFields, FolderRepository, Note, NoteFields, NoteRepository};
use noteful_core::ObjectId;

/// Test database over in-memory SQLite with migrations applied.
///
/// The pool is capped at one connection: every connection to `:memory:` is a
/// distinct database, so a single shared connection is required.
pub struct TestDatabase {
    pub db: Database,
}

impl TestDatabase {
    /// Create a fresh, empty test database.
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        let db = Database::new(pool);
        db.migrate().await.expect("Failed to run migrations");

        Self { db }
    }
}

/// Create a folder with the given name.
pub async fn seed_folder(db: &Database, name: &str) -> Folder {
    db.folders
        .create(FolderFields {
            name: name.to_string(),
        })
        .await
        .expect("Failed to create test folder")
}

/// Create a note with the given title, content, and folder reference.
pub async fn seed_note(
    db: &Database,
    title: &str,
    content: Option<&str>,
    folder_id: Option<ObjectId>,
) -> Note {
    db.notes
        .create(NoteFields {
            title: title.to_string(),
            content: content.map(str::to_string),
            folder_id,
        })
        .await
        .expect("Failed to create test note")
}
