//! Video search and watch history routes.

use axum::extract::{Query, State};
use axum::Json;
use database::{video_history, VideoHistoryEntry, DEFAULT_USER_ID};
use serde::Deserialize;
use video_search::VideoFeed;

use crate::error::{ApiError, Result};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub max_results: Option<u32>,
}

/// Search for videos. Degrades to a tagged sample set when the provider
/// is unavailable.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<VideoFeed>> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(ApiError::Validation("Search query is required".to_string()));
    }

    let max_results = query.max_results.unwrap_or(12).min(25);
    let feed = state.videos.search(q, max_results).await?;

    Ok(Json(feed))
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

/// Get watch history, most recent first.
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<VideoHistoryEntry>>> {
    let limit = query.limit.unwrap_or(50).min(100);
    let history = video_history::get_history(state.db.pool(), DEFAULT_USER_ID, limit).await?;

    Ok(Json(history))
}
