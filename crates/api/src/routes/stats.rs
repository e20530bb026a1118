//! User statistics endpoint.

use axum::extract::State;
use axum::Json;
use database::UserStats;

use crate::error::Result;
use crate::state::AppState;

/// Aggregate counts across journals, folders, videos, and conversations.
pub async fn stats(State(state): State<AppState>) -> Result<Json<UserStats>> {
    let stats = database::stats::user_stats(state.db.pool(), database::DEFAULT_USER_ID).await?;
    Ok(Json(stats))
}
