//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use noteful_core::{
    ContainsFilter, Error, Folder, FolderFields, FolderRepository, ObjectId, Result,
};

use crate::{now, read_id};

const FOLDER_COLUMNS: &str = "id, name, created_at, updated_at";

/// SQLite implementation of FolderRepository.
#[derive(Clone)]
pub struct SqliteFolderRepository {
    pool: SqlitePool,
}

impl SqliteFolderRepository {
    /// Create a new SqliteFolderRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn folder_from_row(row: &SqliteRow) -> Result<Folder> {
    Ok(Folder {
        id: read_id(&row.get::<String, _>("id"), "folder")?,
        name: row.get("name"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}

/// Translate the unique-index failure on `folder.name` into the
/// conflict the callers expect.
fn map_name_conflict(err: sqlx::Error) -> Error {
    if is_unique_violation(&err) {
        Error::Conflict("Folder name already exists".to_string())
    } else {
        Error::Database(err)
    }
}

#[async_trait]
impl FolderRepository for SqliteFolderRepository {
    async fn find_many(&self, filter: &ContainsFilter) -> Result<Vec<Folder>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {FOLDER_COLUMNS}
            FROM folder
            WHERE ?1 IS NULL OR name LIKE ?1 ESCAPE '\'
            ORDER BY name
            "#
        ))
        .bind(filter.like_pattern())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(folder_from_row).collect()
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Folder>> {
        let row = sqlx::query(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folder WHERE id = ?1"
        ))
        .bind(id.to_hex())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(folder_from_row).transpose()
    }

    async fn create(&self, fields: FolderFields) -> Result<Folder> {
        let id = ObjectId::generate();
        let created_at = now();

        sqlx::query(
            "INSERT INTO folder (id, name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)",
        )
        .bind(id.to_hex())
        .bind(&fields.name)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(map_name_conflict)?;

        Ok(Folder {
            id,
            name: fields.name,
            created_at,
            updated_at: created_at,
        })
    }

    async fn update_by_id(&self, id: ObjectId, fields: FolderFields) -> Result<Option<Folder>> {
        let row = sqlx::query(&format!(
            "UPDATE folder
             SET name = ?1, updated_at = ?2
             WHERE id = ?3
             RETURNING {FOLDER_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(now())
        .bind(id.to_hex())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_name_conflict)?;

        row.as_ref().map(folder_from_row).transpose()
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<()> {
        sqlx::query("DELETE FROM folder WHERE id = ?1")
            .bind(id.to_hex())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
