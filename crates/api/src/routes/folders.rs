//! Folder CRUD routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use database::{folder, Folder, FolderPatch, DEFAULT_USER_ID};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::routes::journals::MessageResponse;
use crate::state::AppState;

/// List all folders with journal counts.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Folder>>> {
    let folders = folder::list_folders(state.db.pool(), DEFAULT_USER_ID).await?;
    Ok(Json(folders))
}

#[derive(Deserialize)]
pub struct CreateRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

#[derive(Serialize)]
pub struct CreateResponse {
    pub id: i64,
    pub message: String,
}

/// Create a folder.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateRequest>,
) -> Result<(StatusCode, Json<CreateResponse>)> {
    let name = req.name.trim();

    if name.is_empty() {
        return Err(ApiError::Validation("Folder name is required".to_string()));
    }

    let id = folder::create_folder(
        state.db.pool(),
        name,
        req.description.as_deref().map(str::trim),
        req.color.as_deref(),
        DEFAULT_USER_ID,
    )
    .await?;

    info!(id, name, "Created folder");

    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            id,
            message: "Folder created successfully".to_string(),
        }),
    ))
}

#[derive(Deserialize)]
pub struct UpdateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Apply a partial update to a folder.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<MessageResponse>> {
    let patch = FolderPatch {
        name: req.name,
        description: req.description,
        color: req.color,
    };

    if patch.is_empty() {
        return Err(ApiError::Validation("No changes made".to_string()));
    }

    folder::update_folder(state.db.pool(), id, DEFAULT_USER_ID, &patch).await?;

    Ok(Json(MessageResponse {
        message: "Folder updated successfully".to_string(),
    }))
}

/// Delete a folder. Its journals are detached, not deleted.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    folder::delete_folder(state.db.pool(), id, DEFAULT_USER_ID).await?;

    info!(id, "Deleted folder");

    Ok(Json(MessageResponse {
        message: "Folder deleted successfully".to_string(),
    }))
}
