//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use database::UserStats;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub message: String,
    pub version: String,
    pub stats: UserStats,
}

/// Health check with a stats snapshot.
pub async fn health(State(state): State<AppState>) -> Result<Json<Health>> {
    let stats = database::stats::user_stats(state.db.pool(), database::DEFAULT_USER_ID).await?;

    Ok(Json(Health {
        status: "running".to_string(),
        message: "Scoratis API is healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        stats,
    }))
}
