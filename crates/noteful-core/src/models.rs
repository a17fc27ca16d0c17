//! Core data models for noteful.
//!
//! These types are shared across all noteful crates and represent the two
//! persisted entities plus the explicit mutable-field sets used for writes.
//! Records always serialize with an `id` field and camelCase keys; storage
//! internals never leak into response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::object_id::ObjectId;

// =============================================================================
// NOTE
// =============================================================================

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: ObjectId,
    pub title: String,
    /// Optional body text; serialized as `null` when absent.
    pub content: Option<String>,
    /// Weak reference to the owning folder; `null` means unfiled.
    pub folder_id: Option<ObjectId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a note.
///
/// Create assigns id and timestamps around these; update overwrites exactly
/// these and refreshes `updated_at`. Enumerating the fields here is what keeps
/// arbitrary payload keys from ever reaching storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteFields {
    pub title: String,
    pub content: Option<String>,
    pub folder_id: Option<ObjectId>,
}

// =============================================================================
// FOLDER
// =============================================================================

/// A persisted folder. Names are unique across all folders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: ObjectId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a folder.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderFields {
    pub name: String,
}
