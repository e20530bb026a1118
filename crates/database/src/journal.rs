//! Journal CRUD operations.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::{DatabaseError, Result};
use crate::models::{Journal, JournalPatch};

/// Internal row shape; tags come back as the raw JSON column.
#[derive(sqlx::FromRow)]
struct JournalRow {
    id: i64,
    title: String,
    content: String,
    tags: Option<String>,
    folder_id: Option<i64>,
    folder_name: Option<String>,
    user_id: i64,
    is_shared: bool,
    share_token: Option<String>,
    created_at: String,
    updated_at: String,
}

impl JournalRow {
    fn into_journal(self) -> Result<Journal> {
        let tags = match self.tags.as_deref() {
            None | Some("") => Vec::new(),
            Some(raw) => {
                serde_json::from_str(raw).map_err(|e| DatabaseError::Corrupt {
                    entity: "Journal",
                    id: self.id.to_string(),
                    reason: format!("invalid tags JSON: {}", e),
                })?
            }
        };

        Ok(Journal {
            id: self.id,
            title: self.title,
            content: self.content,
            tags,
            folder_id: self.folder_id,
            folder_name: self.folder_name,
            user_id: self.user_id,
            is_shared: self.is_shared,
            share_token: self.share_token,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Create a new journal entry and return its ID.
pub async fn create_journal(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    tags: &[String],
    folder_id: Option<i64>,
    user_id: i64,
) -> Result<i64> {
    let tags_json = if tags.is_empty() {
        None
    } else {
        Some(serde_json::Value::from(tags.to_vec()).to_string())
    };

    let result = sqlx::query(
        r#"
        INSERT INTO journals (title, content, tags, folder_id, user_id, updated_at)
        VALUES (?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(tags_json)
    .bind(folder_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get a single journal by ID.
pub async fn get_journal(pool: &SqlitePool, id: i64, user_id: i64) -> Result<Journal> {
    let row = sqlx::query_as::<_, JournalRow>(
        r#"
        SELECT j.id, j.title, j.content, j.tags, j.folder_id, f.name AS folder_name,
               j.user_id, j.is_shared, j.share_token, j.created_at, j.updated_at
        FROM journals j
        LEFT JOIN folders f ON j.folder_id = f.id
        WHERE j.id = ? AND j.user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Journal",
        id: id.to_string(),
    })?;

    row.into_journal()
}

/// List journals for a user, newest activity first.
///
/// `folder_id` scopes the listing to one folder. `search` matches title,
/// content, or tags by case-insensitive substring; both filters intersect.
pub async fn get_journals(
    pool: &SqlitePool,
    user_id: i64,
    folder_id: Option<i64>,
    search: Option<&str>,
) -> Result<Vec<Journal>> {
    let mut builder = QueryBuilder::<Sqlite>::new(
        r#"
        SELECT j.id, j.title, j.content, j.tags, j.folder_id, f.name AS folder_name,
               j.user_id, j.is_shared, j.share_token, j.created_at, j.updated_at
        FROM journals j
        LEFT JOIN folders f ON j.folder_id = f.id
        WHERE j.user_id = "#,
    );
    builder.push_bind(user_id);

    if let Some(folder_id) = folder_id {
        builder.push(" AND j.folder_id = ").push_bind(folder_id);
    }

    if let Some(search) = search {
        let pattern = format!("%{}%", search);
        builder
            .push(" AND (j.title LIKE ")
            .push_bind(pattern.clone())
            .push(" OR j.content LIKE ")
            .push_bind(pattern.clone())
            .push(" OR j.tags LIKE ")
            .push_bind(pattern)
            .push(")");
    }

    builder.push(" ORDER BY j.updated_at DESC, j.id DESC");

    let rows: Vec<JournalRow> = builder.build_query_as().fetch_all(pool).await?;
    rows.into_iter().map(JournalRow::into_journal).collect()
}

/// Apply a partial update to a journal.
///
/// The patch is translated into a single parameterized UPDATE. Callers must
/// reject empty patches before getting here.
pub async fn update_journal(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
    patch: &JournalPatch,
) -> Result<()> {
    debug_assert!(!patch.is_empty(), "empty patch must be rejected by caller");

    let mut builder = QueryBuilder::<Sqlite>::new("UPDATE journals SET ");
    let mut fields = builder.separated(", ");

    if let Some(ref title) = patch.title {
        fields.push("title = ").push_bind_unseparated(title);
    }
    if let Some(ref content) = patch.content {
        fields.push("content = ").push_bind_unseparated(content);
    }
    if let Some(ref tags) = patch.tags {
        let tags_json = serde_json::Value::from(tags.clone()).to_string();
        fields.push("tags = ").push_bind_unseparated(tags_json);
    }
    if let Some(folder_id) = patch.folder_id {
        fields.push("folder_id = ").push_bind_unseparated(folder_id);
    }
    fields.push("updated_at = CURRENT_TIMESTAMP");

    builder
        .push(" WHERE id = ")
        .push_bind(id)
        .push(" AND user_id = ")
        .push_bind(user_id);

    let result = builder.build().execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Journal",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a journal entry.
pub async fn delete_journal(pool: &SqlitePool, id: i64, user_id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM journals WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Journal",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Toggle a journal's share flag, rotating the share token either way.
///
/// Rotation on every toggle means links distributed before a disable are
/// invalid after a re-enable. Returns the new (is_shared, token) pair.
pub async fn toggle_share(pool: &SqlitePool, id: i64, user_id: i64) -> Result<(bool, String)> {
    let token = uuid::Uuid::new_v4().simple().to_string();

    let result = sqlx::query(
        r#"
        UPDATE journals
        SET is_shared = NOT is_shared, share_token = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(&token)
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Journal",
            id: id.to_string(),
        });
    }

    let is_shared: bool =
        sqlx::query_scalar("SELECT is_shared FROM journals WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    Ok((is_shared, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_db, DEFAULT_USER_ID};

    #[tokio::test]
    async fn test_journal_crud_roundtrip() {
        let db = test_db().await;
        let tags = vec!["physics".to_string(), "rotation".to_string()];

        let id = create_journal(
            db.pool(),
            "Torque",
            "Twist-force notes",
            &tags,
            None,
            DEFAULT_USER_ID,
        )
        .await
        .unwrap();

        let journals = get_journals(db.pool(), DEFAULT_USER_ID, None, None)
            .await
            .unwrap();
        assert_eq!(journals.len(), 1);
        assert_eq!(journals[0].id, id);
        assert_eq!(journals[0].title, "Torque");
        // Tag ordering survives the round trip.
        assert_eq!(journals[0].tags, tags);
        assert!(journals[0].folder_name.is_none());

        delete_journal(db.pool(), id, DEFAULT_USER_ID).await.unwrap();
        let journals = get_journals(db.pool(), DEFAULT_USER_ID, None, None)
            .await
            .unwrap();
        assert!(journals.is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_title_content_and_tags() {
        let db = test_db().await;
        create_journal(
            db.pool(),
            "Rotation basics",
            "doors and hinges",
            &[],
            None,
            DEFAULT_USER_ID,
        )
        .await
        .unwrap();
        create_journal(
            db.pool(),
            "Groceries",
            "milk and eggs",
            &["errands".to_string()],
            None,
            DEFAULT_USER_ID,
        )
        .await
        .unwrap();

        let hits = get_journals(db.pool(), DEFAULT_USER_ID, None, Some("hinge"))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Rotation basics");

        // Case-insensitive, and matches inside the tags column too.
        let hits = get_journals(db.pool(), DEFAULT_USER_ID, None, Some("ERRAND"))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Groceries");
    }

    #[tokio::test]
    async fn test_partial_update() {
        let db = test_db().await;
        let id = create_journal(db.pool(), "Old", "Body", &[], None, DEFAULT_USER_ID)
            .await
            .unwrap();

        let patch = JournalPatch {
            title: Some("New".to_string()),
            ..Default::default()
        };
        update_journal(db.pool(), id, DEFAULT_USER_ID, &patch)
            .await
            .unwrap();

        let journal = get_journal(db.pool(), id, DEFAULT_USER_ID).await.unwrap();
        assert_eq!(journal.title, "New");
        assert_eq!(journal.content, "Body");
    }

    #[tokio::test]
    async fn test_update_missing_journal_is_not_found() {
        let db = test_db().await;
        let patch = JournalPatch {
            title: Some("x".to_string()),
            ..Default::default()
        };
        let result = update_journal(db.pool(), 999, DEFAULT_USER_ID, &patch).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_share_toggle_rotates_token() {
        let db = test_db().await;
        let id = create_journal(db.pool(), "T", "C", &[], None, DEFAULT_USER_ID)
            .await
            .unwrap();

        let (shared, first) = toggle_share(db.pool(), id, DEFAULT_USER_ID).await.unwrap();
        assert!(shared);
        assert!(!first.is_empty());

        let (shared, second) = toggle_share(db.pool(), id, DEFAULT_USER_ID).await.unwrap();
        assert!(!shared);
        assert!(!second.is_empty());
        assert_ne!(first, second);

        // The first token is gone from the row entirely.
        let journal = get_journal(db.pool(), id, DEFAULT_USER_ID).await.unwrap();
        assert_eq!(journal.share_token.as_deref(), Some(second.as_str()));
    }
}
