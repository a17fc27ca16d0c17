//! Folder endpoints.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::Json;
use serde::Deserialize;

use noteful_core::{ContainsFilter, Folder, FolderFields, FolderRepository, NoteRepository};

use crate::error::ApiError;
use crate::handlers::parse_path_id;
use crate::AppState;

/// Query parameters for `GET /folders`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFoldersQuery {
    pub search_term: Option<String>,
}

/// Request body for folder create and update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FolderBody {
    pub name: Option<String>,
}

impl FolderBody {
    fn into_fields(self) -> Result<FolderFields, ApiError> {
        match self.name {
            Some(name) if !name.trim().is_empty() => Ok(FolderFields { name }),
            _ => Err(ApiError::BadRequest(
                "Missing `name` in request body".to_string(),
            )),
        }
    }
}

/// `GET /folders`
pub async fn list_folders(
    State(state): State<AppState>,
    Query(query): Query<ListFoldersQuery>,
) -> Result<Json<Vec<Folder>>, ApiError> {
    let filter = ContainsFilter::new(query.search_term.as_deref());
    let folders = state.db.folders.find_many(&filter).await?;
    Ok(Json(folders))
}

/// `GET /folders/:id`
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Folder>, ApiError> {
    let id = parse_path_id("Folder", &id)?;
    let folder = state
        .db
        .folders
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Folder {} not found", id)))?;
    Ok(Json(folder))
}

/// `POST /folders`
pub async fn create_folder(
    State(state): State<AppState>,
    Json(body): Json<FolderBody>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let fields = body.into_fields()?;
    let folder = state.db.folders.create(fields).await?;

    tracing::debug!(
        subsystem = "api",
        folder_id = %folder.id,
        "Created folder"
    );

    let location = format!("/folders/{}", folder.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(folder),
    ))
}

/// `PUT /folders/:id`
pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<FolderBody>,
) -> Result<Json<Folder>, ApiError> {
    let id = parse_path_id("Folder", &id)?;
    let fields = body.into_fields()?;

    let folder = state
        .db
        .folders
        .update_by_id(id, fields)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Folder {} not found", id)))?;
    Ok(Json(folder))
}

/// `DELETE /folders/:id`
///
/// Removes the folder and clears the reference on every note filed under it.
/// Both writes run concurrently; either failure aborts the request.
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_path_id("Folder", &id)?;

    let ((), detached) = tokio::try_join!(
        state.db.folders.delete_by_id(id),
        state.db.notes.detach_folder(id),
    )?;

    tracing::debug!(
        subsystem = "api",
        folder_id = %id,
        detached_notes = detached,
        "Deleted folder"
    );

    Ok(StatusCode::NO_CONTENT)
}
