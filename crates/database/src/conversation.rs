//! Conversation and chat message persistence.
//!
//! Conversations are created lazily on first message and move through an
//! active -> trashed -> (restored | purged) lifecycle. Messages are
//! append-only and purged only alongside their conversation.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{ChatMessage, ConversationListEntry};

/// Sender value for user-authored messages.
pub const SENDER_USER: &str = "user";
/// Sender value for assistant replies (AI or fallback alike).
pub const SENDER_AI: &str = "ai";

/// Maximum characters of the first user message used as a derived title.
const TITLE_MAX_CHARS: usize = 50;

/// Look up the conversation for a session, creating it with a null title if
/// absent. Returns the conversation ID.
pub async fn get_or_create(pool: &SqlitePool, session_id: &str, user_id: i64) -> Result<i64> {
    let mut tx = pool.begin().await?;
    let id = get_or_create_in_tx(&mut tx, session_id, user_id).await?;
    tx.commit().await?;
    Ok(id)
}

async fn get_or_create_in_tx(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    session_id: &str,
    user_id: i64,
) -> Result<i64> {
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM conversations WHERE session_id = ? AND user_id = ?")
            .bind(session_id)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let result = sqlx::query(
        r#"
        INSERT INTO conversations (session_id, user_id, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(session_id)
    .bind(user_id)
    .execute(&mut **tx)
    .await?;

    tracing::debug!(session_id, "created conversation");
    Ok(result.last_insert_rowid())
}

/// Append a message to a session's conversation.
///
/// Creates the conversation if needed, bumps its activity timestamp, and on
/// the first user message derives the title (first 50 characters, with an
/// ellipsis when truncated). An existing title is never overwritten. The
/// whole operation is one transaction. Returns the conversation ID.
pub async fn record_message(
    pool: &SqlitePool,
    session_id: &str,
    sender: &str,
    message: &str,
    user_id: i64,
) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let conversation_id = get_or_create_in_tx(&mut tx, session_id, user_id).await?;

    sqlx::query(
        r#"
        INSERT INTO chat_messages (conversation_id, session_id, sender, message)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(conversation_id)
    .bind(session_id)
    .bind(sender)
    .bind(message)
    .execute(&mut *tx)
    .await?;

    sqlx::query("UPDATE conversations SET updated_at = CURRENT_TIMESTAMP WHERE id = ?")
        .bind(conversation_id)
        .execute(&mut *tx)
        .await?;

    if sender == SENDER_USER {
        sqlx::query("UPDATE conversations SET title = ? WHERE id = ? AND title IS NULL")
            .bind(derive_title(message))
            .bind(conversation_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(conversation_id)
}

fn derive_title(message: &str) -> String {
    if message.chars().count() > TITLE_MAX_CHARS {
        let head: String = message.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        message.to_string()
    }
}

/// Get all messages for a session's conversation, oldest first.
pub async fn get_messages(
    pool: &SqlitePool,
    session_id: &str,
    user_id: i64,
) -> Result<Vec<ChatMessage>> {
    let messages = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT cm.sender, cm.message, cm.timestamp
        FROM chat_messages cm
        JOIN conversations c ON cm.conversation_id = c.id
        WHERE cm.session_id = ? AND c.user_id = ?
        ORDER BY cm.timestamp ASC, cm.id ASC
        "#,
    )
    .bind(session_id)
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

/// List conversations with message counts, most recently active first.
///
/// `trashed` selects which side of the soft-delete flag to list; the two
/// listings never overlap.
pub async fn list_conversations(
    pool: &SqlitePool,
    user_id: i64,
    limit: i64,
    trashed: bool,
) -> Result<Vec<ConversationListEntry>> {
    let entries = sqlx::query_as::<_, ConversationListEntry>(
        r#"
        SELECT c.id, c.session_id, c.title, c.created_at, c.updated_at, c.deleted_at,
               COUNT(cm.id) AS message_count,
               MAX(cm.timestamp) AS last_message_time
        FROM conversations c
        LEFT JOIN chat_messages cm ON c.id = cm.conversation_id
        WHERE c.user_id = ? AND c.is_deleted = ?
        GROUP BY c.id
        ORDER BY c.updated_at DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(trashed)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Soft-delete a conversation (active -> trashed), stamping the deletion time.
pub async fn trash(pool: &SqlitePool, conversation_id: i64, user_id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE conversations
        SET is_deleted = TRUE, deleted_at = CURRENT_TIMESTAMP, updated_at = CURRENT_TIMESTAMP
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(conversation_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Conversation",
            id: conversation_id.to_string(),
        });
    }

    Ok(())
}

/// Restore a conversation from trash, clearing the deletion time.
pub async fn restore(pool: &SqlitePool, conversation_id: i64, user_id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE conversations
        SET is_deleted = FALSE, deleted_at = NULL, updated_at = CURRENT_TIMESTAMP
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(conversation_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Conversation",
            id: conversation_id.to_string(),
        });
    }

    Ok(())
}

/// Permanently delete a conversation and all its messages, from either state.
pub async fn purge(pool: &SqlitePool, conversation_id: i64, user_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM chat_messages WHERE conversation_id = ?")
        .bind(conversation_id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM conversations WHERE id = ? AND user_id = ?")
        .bind(conversation_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(DatabaseError::NotFound {
            entity: "Conversation",
            id: conversation_id.to_string(),
        });
    }

    tx.commit().await?;
    Ok(())
}

/// Permanently delete every trashed conversation for a user. Returns the
/// number of conversations purged.
pub async fn empty_trash(pool: &SqlitePool, user_id: i64) -> Result<u64> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM chat_messages
        WHERE conversation_id IN (
            SELECT id FROM conversations WHERE user_id = ? AND is_deleted = TRUE
        )
        "#,
    )
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    let result = sqlx::query("DELETE FROM conversations WHERE user_id = ? AND is_deleted = TRUE")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected())
}
