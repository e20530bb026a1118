//! Journal CRUD and sharing routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::{journal, Journal, JournalPatch, DEFAULT_USER_ID};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Distinguishes an absent field from an explicit `null`.
///
/// Absent -> `None` (leave unchanged), `null` -> `Some(None)` (clear).
fn double_option<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub folder_id: Option<i64>,
    pub search: Option<String>,
}

/// List journals, optionally filtered by folder or search query.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Journal>>> {
    let journals = journal::get_journals(
        state.db.pool(),
        DEFAULT_USER_ID,
        query.folder_id,
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(journals))
}

#[derive(Deserialize)]
pub struct CreateRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub folder_id: Option<i64>,
}

#[derive(Serialize)]
pub struct CreateResponse {
    pub id: i64,
    pub message: String,
}

/// Create a journal entry.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateRequest>,
) -> Result<(StatusCode, Json<CreateResponse>)> {
    let title = req.title.trim();
    let content = req.content.trim();

    if title.is_empty() || content.is_empty() {
        return Err(ApiError::Validation(
            "Title and content are required".to_string(),
        ));
    }

    let id = journal::create_journal(
        state.db.pool(),
        title,
        content,
        &req.tags,
        req.folder_id,
        DEFAULT_USER_ID,
    )
    .await?;

    info!(id, "Created journal");

    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            id,
            message: "Journal created successfully".to_string(),
        }),
    ))
}

#[derive(Deserialize)]
pub struct UpdateRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub folder_id: Option<Option<i64>>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Apply a partial update to a journal entry.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<MessageResponse>> {
    let patch = JournalPatch {
        title: req.title,
        content: req.content,
        tags: req.tags,
        folder_id: req.folder_id,
    };

    if patch.is_empty() {
        return Err(ApiError::Validation("No changes made".to_string()));
    }

    journal::update_journal(state.db.pool(), id, DEFAULT_USER_ID, &patch).await?;

    Ok(Json(MessageResponse {
        message: "Journal updated successfully".to_string(),
    }))
}

/// Delete a journal entry.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    journal::delete_journal(state.db.pool(), id, DEFAULT_USER_ID).await?;

    info!(id, "Deleted journal");

    Ok(Json(MessageResponse {
        message: "Journal deleted successfully".to_string(),
    }))
}

#[derive(Serialize)]
pub struct ShareResponse {
    pub message: String,
    pub is_shared: bool,
    pub share_token: String,
    pub share_url: String,
}

/// Toggle a journal's shared flag, rotating its share token.
pub async fn toggle_share(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ShareResponse>> {
    let (is_shared, share_token) =
        journal::toggle_share(state.db.pool(), id, DEFAULT_USER_ID).await?;

    let share_url = format!("{}/shared/{}", state.public_base_url, share_token);

    Ok(Json(ShareResponse {
        message: "Journal sharing toggled successfully".to_string(),
        is_shared,
        share_token,
        share_url,
    }))
}
