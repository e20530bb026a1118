//! Folder CRUD operations.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::{DatabaseError, Result};
use crate::models::{Folder, FolderPatch};

/// Default folder color.
pub const DEFAULT_COLOR: &str = "#8A2BE2";

/// Create a new folder and return its ID.
pub async fn create_folder(
    pool: &SqlitePool,
    name: &str,
    description: Option<&str>,
    color: Option<&str>,
    user_id: i64,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO folders (name, description, color, user_id, updated_at)
        VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(color.unwrap_or(DEFAULT_COLOR))
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List folders for a user with per-folder journal counts, newest first.
pub async fn list_folders(pool: &SqlitePool, user_id: i64) -> Result<Vec<Folder>> {
    let folders = sqlx::query_as::<_, Folder>(
        r#"
        SELECT f.id, f.name, f.description, f.color, f.user_id,
               COUNT(j.id) AS journal_count, f.created_at, f.updated_at
        FROM folders f
        LEFT JOIN journals j ON f.id = j.folder_id
        WHERE f.user_id = ?
        GROUP BY f.id
        ORDER BY f.updated_at DESC, f.id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(folders)
}

/// Apply a partial update to a folder.
pub async fn update_folder(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
    patch: &FolderPatch,
) -> Result<()> {
    debug_assert!(!patch.is_empty(), "empty patch must be rejected by caller");

    let mut builder = QueryBuilder::<Sqlite>::new("UPDATE folders SET ");
    let mut fields = builder.separated(", ");

    if let Some(ref name) = patch.name {
        fields.push("name = ").push_bind_unseparated(name);
    }
    if let Some(ref description) = patch.description {
        fields
            .push("description = ")
            .push_bind_unseparated(description);
    }
    if let Some(ref color) = patch.color {
        fields.push("color = ").push_bind_unseparated(color);
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
            entity: "Folder",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a folder, first moving its journals to uncategorized.
///
/// Both statements run in one transaction so a journal never dangles on a
/// folder that no longer exists.
pub async fn delete_folder(pool: &SqlitePool, id: i64, user_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE journals SET folder_id = NULL WHERE folder_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM folders WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(DatabaseError::NotFound {
            entity: "Folder",
            id: id.to_string(),
        });
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{journal, test_db, DEFAULT_USER_ID};

    #[tokio::test]
    async fn test_folder_crud() {
        let db = test_db().await;

        let id = create_folder(db.pool(), "Physics", Some("Class notes"), None, DEFAULT_USER_ID)
            .await
            .unwrap();

        let folders = list_folders(db.pool(), DEFAULT_USER_ID).await.unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "Physics");
        assert_eq!(folders[0].color, DEFAULT_COLOR);
        assert_eq!(folders[0].journal_count, 0);

        let patch = FolderPatch {
            color: Some("#00BFFF".to_string()),
            ..Default::default()
        };
        update_folder(db.pool(), id, DEFAULT_USER_ID, &patch)
            .await
            .unwrap();

        let folders = list_folders(db.pool(), DEFAULT_USER_ID).await.unwrap();
        assert_eq!(folders[0].color, "#00BFFF");
    }

    #[tokio::test]
    async fn test_delete_folder_uncategorizes_journals() {
        let db = test_db().await;
        let folder_id = create_folder(db.pool(), "Physics", None, None, DEFAULT_USER_ID)
            .await
            .unwrap();

        let j1 = journal::create_journal(
            db.pool(),
            "A",
            "a",
            &[],
            Some(folder_id),
            DEFAULT_USER_ID,
        )
        .await
        .unwrap();
        let j2 = journal::create_journal(
            db.pool(),
            "B",
            "b",
            &[],
            Some(folder_id),
            DEFAULT_USER_ID,
        )
        .await
        .unwrap();

        delete_folder(db.pool(), folder_id, DEFAULT_USER_ID)
            .await
            .unwrap();

        assert!(list_folders(db.pool(), DEFAULT_USER_ID)
            .await
            .unwrap()
            .is_empty());

        // The journals survive, uncategorized.
        for id in [j1, j2] {
            let entry = journal::get_journal(db.pool(), id, DEFAULT_USER_ID)
                .await
                .unwrap();
            assert!(entry.folder_id.is_none());
        }
    }

    #[tokio::test]
    async fn test_delete_missing_folder_is_not_found() {
        let db = test_db().await;
        let result = delete_folder(db.pool(), 42, DEFAULT_USER_ID).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
