//! # noteful-core
//!
//! Core types, traits, and abstractions for noteful.
//!
//! This crate provides:
//! - The `Note` and `Folder` domain records
//! - The `ObjectId` identifier type (24-character hex token)
//! - The case-insensitive substring search filter
//! - Repository traits that storage backends implement
//! - The shared error taxonomy
//!
//! No I/O happens here; concrete storage lives in `noteful-db`.

pub mod error;
pub mod models;
pub mod object_id;
pub mod search;
pub mod traits;

pub use error::{Error, Result};
pub use models::{Folder, FolderFields, Note, NoteFields};
pub use object_id::ObjectId;
pub use search::{escape_like, ContainsFilter};
pub use traits::{FolderRepository, NoteRepository};
