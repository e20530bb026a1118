//! Derived per-user statistics.

use sqlx::SqlitePool;

use crate::models::UserStats;
use crate::Result;

/// Compute statistics for a user. Always recomputed on request.
pub async fn user_stats(pool: &SqlitePool, user_id: i64) -> Result<UserStats> {
    let total_journals = count(pool, "SELECT COUNT(*) FROM journals WHERE user_id = ?", user_id).await?;
    let total_folders = count(pool, "SELECT COUNT(*) FROM folders WHERE user_id = ?", user_id).await?;
    let videos_watched = count(pool, "SELECT COUNT(*) FROM video_history WHERE user_id = ?", user_id).await?;
    let journals_this_week = count(
        pool,
        "SELECT COUNT(*) FROM journals WHERE user_id = ? AND created_at >= datetime('now', '-7 days')",
        user_id,
    )
    .await?;
    let total_conversations = count(
        pool,
        "SELECT COUNT(*) FROM conversations WHERE user_id = ?",
        user_id,
    )
    .await?;

    Ok(UserStats {
        total_journals,
        total_folders,
        videos_watched,
        journals_this_week,
        total_conversations,
    })
}

async fn count(pool: &SqlitePool, query: &str, user_id: i64) -> Result<i64> {
    let n: i64 = sqlx::query_scalar(query).bind(user_id).fetch_one(pool).await?;
    Ok(n)
}
