//! Note endpoints.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::Json;
use serde::Deserialize;

use noteful_core::{ContainsFilter, FolderRepository, Note, NoteFields, NoteRepository, ObjectId};

use crate::error::ApiError;
use crate::handlers::parse_path_id;
use crate::AppState;

/// Query parameters for `GET /notes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesQuery {
    pub search_term: Option<String>,
}

/// Request body for note create and update.
///
/// Every field is optional at the wire level so validation can produce the
/// contract's messages instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NoteBody {
    pub title: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<String>,
}

impl NoteBody {
    /// Validate the body into storable fields.
    ///
    /// The folder reference is checked against live folders, so a stale or
    /// malformed `folderId` is rejected before anything is written.
    async fn into_fields(self, state: &AppState) -> Result<NoteFields, ApiError> {
        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                return Err(ApiError::BadRequest(
                    "Missing `title` in request body".to_string(),
                ))
            }
        };

        let folder_id = match self.folder_id {
            Some(raw) => Some(resolve_folder_ref(state, &raw).await?),
            None => None,
        };

        Ok(NoteFields {
            title,
            content: self.content,
            folder_id,
        })
    }
}

/// Resolve a `folderId` string to an existing folder's id.
async fn resolve_folder_ref(state: &AppState, raw: &str) -> Result<ObjectId, ApiError> {
    let invalid = || ApiError::BadRequest("The `folderId` is not valid".to_string());

    let id = ObjectId::parse_str(raw).map_err(|_| invalid())?;
    match state.db.folders.find_by_id(id).await? {
        Some(folder) => Ok(folder.id),
        None => Err(invalid()),
    }
}

/// `GET /notes`
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<ListNotesQuery>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let filter = ContainsFilter::new(query.search_term.as_deref());
    let notes = state.db.notes.find_many(&filter).await?;
    Ok(Json(notes))
}

/// `GET /notes/:id`
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_path_id("Note", &id)?;
    let note = state
        .db
        .notes
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Note {} not found", id)))?;
    Ok(Json(note))
}

/// `POST /notes`
pub async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<NoteBody>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let fields = body.into_fields(&state).await?;
    let note = state.db.notes.create(fields).await?;

    tracing::debug!(
        subsystem = "api",
        note_id = %note.id,
        "Created note"
    );

    let location = format!("/notes/{}", note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(note),
    ))
}

/// `PUT /notes/:id`
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<NoteBody>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_path_id("Note", &id)?;
    let fields = body.into_fields(&state).await?;

    let note = state
        .db
        .notes
        .update_by_id(id, fields)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Note {} not found", id)))?;
    Ok(Json(note))
}

/// `DELETE /notes/:id`
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_path_id("Note", &id)?;
    state.db.notes.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
