//! Video watch history persistence.

use sqlx::SqlitePool;

use crate::models::VideoHistoryEntry;
use crate::Result;

/// Record a watched video.
///
/// Keyed on (video_id, user_id): re-watching replaces the prior row's
/// metadata and timestamp, so there is never more than one row per video.
pub async fn record_watch(
    pool: &SqlitePool,
    video_id: &str,
    title: &str,
    channel: Option<&str>,
    thumbnail_url: Option<&str>,
    search_query: Option<&str>,
    user_id: i64,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO video_history (video_id, title, channel, thumbnail_url, search_query, user_id, watched_at)
        VALUES (?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(video_id, user_id) DO UPDATE SET
            title = excluded.title,
            channel = excluded.channel,
            thumbnail_url = excluded.thumbnail_url,
            search_query = excluded.search_query,
            watched_at = excluded.watched_at
        "#,
    )
    .bind(video_id)
    .bind(title)
    .bind(channel)
    .bind(thumbnail_url)
    .bind(search_query)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get watch history, most recent first.
pub async fn get_history(pool: &SqlitePool, user_id: i64, limit: i64) -> Result<Vec<VideoHistoryEntry>> {
    let entries = sqlx::query_as::<_, VideoHistoryEntry>(
        r#"
        SELECT video_id, title, channel, thumbnail_url, search_query, user_id, watched_at
        FROM video_history
        WHERE user_id = ?
        ORDER BY watched_at DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_db, DEFAULT_USER_ID};

    #[tokio::test]
    async fn test_rewatch_replaces_prior_entry() {
        let db = test_db().await;

        record_watch(
            db.pool(),
            "abc123",
            "Torque basics",
            Some("Physics Channel"),
            None,
            Some("torque"),
            DEFAULT_USER_ID,
        )
        .await
        .unwrap();
        record_watch(
            db.pool(),
            "abc123",
            "Torque basics (updated)",
            Some("Physics Channel"),
            Some("https://example.com/t.jpg"),
            Some("torque explained"),
            DEFAULT_USER_ID,
        )
        .await
        .unwrap();

        let history = get_history(db.pool(), DEFAULT_USER_ID, 10).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].title, "Torque basics (updated)");
        assert_eq!(history[0].search_query.as_deref(), Some("torque explained"));
    }

    #[tokio::test]
    async fn test_history_respects_limit() {
        let db = test_db().await;
        for i in 0..5 {
            record_watch(
                db.pool(),
                &format!("vid{}", i),
                "t",
                None,
                None,
                None,
                DEFAULT_USER_ID,
            )
            .await
            .unwrap();
        }

        let history = get_history(db.pool(), DEFAULT_USER_ID, 3).await.unwrap();
        assert_eq!(history.len(), 3);
    }
}
