//! Handler modules for noteful-api.

pub mod folders;
pub mod notes;

use noteful_core::ObjectId;

use crate::error::ApiError;

/// Parse a path id, treating a malformed id exactly like a missing record:
/// the caller gets 404 and storage is never consulted.
pub(crate) fn parse_path_id(resource: &str, raw: &str) -> Result<ObjectId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("{} {} not found", resource, raw)))
}
