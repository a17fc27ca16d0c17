//! # noteful-db
//!
//! SQLite storage layer for noteful.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for notes and folders
//! - Embedded schema migrations
//!
//! Queries are plain runtime `sqlx::query` calls, so no database is needed at
//! compile time. Record ids are 24-character hex tokens generated here (the
//! storage layer owns id assignment); timestamps are stored as TEXT.
//!
//! ## Example
//!
//! ```rust,ignore
//! use noteful_db::{Database, NoteFields, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite://noteful.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     let note = db.notes.create(NoteFields {
//!         title: "Hello".to_string(),
//!         content: Some("world".to_string()),
//!         folder_id: None,
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod folders;
pub mod notes;
pub mod pool;

#[cfg(test)]
mod tests;

// Test fixtures for integration tests.
// Note: Always compiled so integration tests (in tests/) can use TestDatabase.
pub mod test_fixtures;

use chrono::{DateTime, Timelike, Utc};

// Re-export core types
pub use noteful_core::*;

pub use folders::SqliteFolderRepository;
pub use notes::SqliteNoteRepository;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};

/// Combined database context with all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::SqlitePool,
    /// Note repository for CRUD operations.
    pub notes: SqliteNoteRepository,
    /// Folder repository for CRUD operations.
    pub folders: SqliteFolderRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self {
            notes: SqliteNoteRepository::new(pool.clone()),
            folders: SqliteFolderRepository::new(pool.clone()),
            pool,
        }
    }

    /// Connect with default pool configuration.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Run pending schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(e.into()))?;
        Ok(())
    }
}

/// Current time truncated to whole milliseconds.
///
/// Timestamps round-trip through TEXT columns; sub-millisecond digits do not
/// survive every path, so they are never produced in the first place.
pub(crate) fn now() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_nanosecond(now.nanosecond() / 1_000_000 * 1_000_000)
        .unwrap_or(now)
}

/// Decode a stored id column, which is always written by [`ObjectId`].
pub(crate) fn read_id(raw: &str, table: &str) -> Result<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|e| Error::Internal(format!("corrupt id in {} table: {}", table, e)))
}
