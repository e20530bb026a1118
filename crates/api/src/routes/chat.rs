//! Chat routes: messaging, history, and the trash lifecycle.

use axum::extract::{Path, Query, State};
use axum::Json;
use database::{conversation, ChatMessage, ConversationListEntry, DEFAULT_USER_ID};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::routes::journals::MessageResponse;
use crate::state::AppState;

const DEFAULT_SESSION: &str = "default";

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source: orchestrator::ReplySource,
    pub session_id: String,
}

/// Handle a chat message and return the companion's reply.
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(ApiError::Validation("No message provided".to_string()));
    }

    let session_id = req.session_id.unwrap_or_else(|| DEFAULT_SESSION.to_string());
    let reply = state.chat.handle_message(&session_id, message).await?;

    Ok(Json(ChatResponse {
        reply: reply.reply,
        source: reply.source,
        session_id,
    }))
}

#[derive(Deserialize, Default)]
pub struct ClearRequest {
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub session_id: String,
}

/// Forget a session's in-memory context. Stored history is untouched.
pub async fn clear_memory(
    State(state): State<AppState>,
    body: Option<Json<ClearRequest>>,
) -> Json<ClearResponse> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let session_id = req.session_id.unwrap_or_else(|| DEFAULT_SESSION.to_string());

    state.chat.clear_memory(&session_id).await;

    Json(ClearResponse {
        message: "Conversation memory cleared".to_string(),
        session_id,
    })
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct ConversationList {
    pub conversations: Vec<ConversationListEntry>,
}

/// List active conversations, most recently updated first.
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ConversationList>> {
    let limit = query.limit.unwrap_or(20).min(50);
    let conversations =
        conversation::list_conversations(state.db.pool(), DEFAULT_USER_ID, limit, false).await?;

    Ok(Json(ConversationList { conversations }))
}

#[derive(Serialize)]
pub struct ConversationMessages {
    pub messages: Vec<ChatMessage>,
    pub session_id: String,
}

/// Get all messages for a session's conversation, oldest first.
pub async fn conversation_messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ConversationMessages>> {
    let messages =
        conversation::get_messages(state.db.pool(), &session_id, DEFAULT_USER_ID).await?;

    Ok(Json(ConversationMessages {
        messages,
        session_id,
    }))
}

#[derive(Deserialize, Default)]
pub struct DeleteRequest {
    #[serde(default)]
    pub permanent: bool,
}

/// Trash a conversation, or permanently delete it when `permanent` is set.
pub async fn delete_conversation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Option<Json<DeleteRequest>>,
) -> Result<Json<MessageResponse>> {
    let permanent = body.map(|Json(req)| req.permanent).unwrap_or(false);

    let message = if permanent {
        conversation::purge(state.db.pool(), id, DEFAULT_USER_ID).await?;
        "Conversation permanently deleted"
    } else {
        conversation::trash(state.db.pool(), id, DEFAULT_USER_ID).await?;
        "Conversation moved to trash"
    };

    info!(id, permanent, "Deleted conversation");

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}

/// List trashed conversations.
pub async fn trash(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ConversationList>> {
    let limit = query.limit.unwrap_or(50).min(100);
    let conversations =
        conversation::list_conversations(state.db.pool(), DEFAULT_USER_ID, limit, true).await?;

    Ok(Json(ConversationList { conversations }))
}

/// Restore a conversation from the trash.
pub async fn restore_conversation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    conversation::restore(state.db.pool(), id, DEFAULT_USER_ID).await?;

    Ok(Json(MessageResponse {
        message: "Conversation restored successfully".to_string(),
    }))
}

/// Permanently delete every trashed conversation.
pub async fn empty_trash(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    let purged = conversation::empty_trash(state.db.pool(), DEFAULT_USER_ID).await?;

    info!(purged, "Emptied conversation trash");

    Ok(Json(MessageResponse {
        message: "Trash emptied successfully".to_string(),
    }))
}
