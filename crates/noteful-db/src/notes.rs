//! Note repository implementation.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use noteful_core::{ContainsFilter, Note, NoteFields, NoteRepository, ObjectId, Result};

use crate::{now, read_id};

const NOTE_COLUMNS: &str = "id, title, content, folder_id, created_at, updated_at";

/// SQLite implementation of NoteRepository.
#[derive(Clone)]
pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    /// Create a new SqliteNoteRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn note_from_row(row: &SqliteRow) -> Result<Note> {
    let folder_id = row
        .get::<Option<String>, _>("folder_id")
        .map(|raw| read_id(&raw, "note"))
        .transpose()?;

    Ok(Note {
        id: read_id(&row.get::<String, _>("id"), "note")?,
        title: row.get("title"),
        content: row.get("content"),
        folder_id,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn find_many(&self, filter: &ContainsFilter) -> Result<Vec<Note>> {
        // Title OR content contains the term, case-insensitively. The bound
        // pattern already has LIKE wildcards escaped; NULL means no filter.
        let rows = sqlx::query(&format!(
            r#"
            SELECT {NOTE_COLUMNS}
            FROM note
            WHERE ?1 IS NULL
               OR title LIKE ?1 ESCAPE '\'
               OR content LIKE ?1 ESCAPE '\'
            ORDER BY created_at, id
            "#
        ))
        .bind(filter.like_pattern())
        .fetch_all(&self.pool)
        .await?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "find_many",
            filtered = filter.term().is_some(),
            result_count = rows.len(),
            "Listed notes"
        );

        rows.iter().map(note_from_row).collect()
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Note>> {
        let row = sqlx::query(&format!(
            "SELECT {NOTE_COLUMNS} FROM note WHERE id = ?1"
        ))
        .bind(id.to_hex())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(note_from_row).transpose()
    }

    async fn create(&self, fields: NoteFields) -> Result<Note> {
        let id = ObjectId::generate();
        let created_at = now();

        sqlx::query(
            "INSERT INTO note (id, title, content, folder_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        )
        .bind(id.to_hex())
        .bind(&fields.title)
        .bind(&fields.content)
        .bind(fields.folder_id.map(ObjectId::to_hex))
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Note {
            id,
            title: fields.title,
            content: fields.content,
            folder_id: fields.folder_id,
            created_at,
            updated_at: created_at,
        })
    }

    async fn update_by_id(&self, id: ObjectId, fields: NoteFields) -> Result<Option<Note>> {
        // Full overwrite of the mutable fields; created_at is untouched.
        // An absent id updates nothing and reports None, never an upsert.
        let row = sqlx::query(&format!(
            "UPDATE note
             SET title = ?1, content = ?2, folder_id = ?3, updated_at = ?4
             WHERE id = ?5
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(&fields.title)
        .bind(&fields.content)
        .bind(fields.folder_id.map(ObjectId::to_hex))
        .bind(now())
        .bind(id.to_hex())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(note_from_row).transpose()
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<()> {
        // Deleting an absent note is a no-op by contract.
        sqlx::query("DELETE FROM note WHERE id = ?1")
            .bind(id.to_hex())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn detach_folder(&self, folder_id: ObjectId) -> Result<u64> {
        let result = sqlx::query("UPDATE note SET folder_id = NULL WHERE folder_id = ?1")
            .bind(folder_id.to_hex())
            .execute(&self.pool)
            .await?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "detach_folder",
            folder_id = %folder_id,
            detached = result.rows_affected(),
            "Cleared folder reference on dependent notes"
        );
        Ok(result.rows_affected())
    }
}
