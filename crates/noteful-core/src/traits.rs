//! Core traits for noteful abstractions.
//!
//! These traits are the storage seam: handlers depend on them, and concrete
//! document stores implement them. Ids and timestamps are assigned by the
//! implementation at create time; callers never supply them.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Folder, FolderFields, Note, NoteFields};
use crate::object_id::ObjectId;
use crate::search::ContainsFilter;

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List notes matching the filter (against title and content),
    /// in a deterministic order.
    async fn find_many(&self, filter: &ContainsFilter) -> Result<Vec<Note>>;

    /// Fetch a note by id, or `None` when no record exists.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Note>>;

    /// Persist a new note, assigning id and timestamps.
    async fn create(&self, fields: NoteFields) -> Result<Note>;

    /// Overwrite the mutable fields of a note and refresh `updated_at`.
    /// Returns `None` when no record with the id exists (never creates one).
    async fn update_by_id(&self, id: ObjectId, fields: NoteFields) -> Result<Option<Note>>;

    /// Delete a note. Deleting an absent id is a no-op, not an error.
    async fn delete_by_id(&self, id: ObjectId) -> Result<()>;

    /// Clear `folder_id` on every note filed under the given folder,
    /// returning the number of notes touched. The folder-delete cascade
    /// issues this concurrently with the folder removal.
    async fn detach_folder(&self, folder_id: ObjectId) -> Result<u64>;
}

/// Repository for folder CRUD operations.
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// List folders matching the filter (against name), ordered by name.
    async fn find_many(&self, filter: &ContainsFilter) -> Result<Vec<Folder>>;

    /// Fetch a folder by id, or `None` when no record exists.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Folder>>;

    /// Persist a new folder, assigning id and timestamps.
    /// A duplicate name surfaces as [`crate::Error::Conflict`].
    async fn create(&self, fields: FolderFields) -> Result<Folder>;

    /// Overwrite the mutable fields of a folder and refresh `updated_at`.
    /// Returns `None` for an absent id; duplicate names surface as Conflict.
    async fn update_by_id(&self, id: ObjectId, fields: FolderFields) -> Result<Option<Folder>>;

    /// Delete a folder. Idempotent like note deletion. Dependent notes are
    /// NOT touched here; the cascade is coordinated by the caller.
    async fn delete_by_id(&self, id: ObjectId) -> Result<()>;
}
