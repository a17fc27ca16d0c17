//! # noteful-api
//!
//! HTTP API server for noteful: router construction, request handlers, and
//! the error-to-response mapping. The binary entrypoint in `main.rs` wires
//! this router behind logging, CORS, and request-id middleware.

pub mod error;
pub mod handlers;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use noteful_db::Database;

use handlers::{
    folders::{create_folder, delete_folder, get_folder, list_folders, update_folder},
    notes::{create_note, delete_note, get_note, list_notes, update_note},
};

/// Application state shared across handlers.
///
/// The database is injected at construction; there is no process-wide
/// storage client.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Build the application router over the given database.
pub fn app(db: Database) -> Router {
    let state = AppState { db };

    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/folders", get(list_folders).post(create_folder))
        .route(
            "/folders/:id",
            get(get_folder).put(update_folder).delete(delete_folder),
        )
        .route("/health", get(health_check))
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
