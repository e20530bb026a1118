//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A journal entry, optionally filed into a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Entry title.
    pub title: String,
    /// Entry body.
    pub content: String,
    /// Ordered tags, round-tripped exactly.
    pub tags: Vec<String>,
    /// Containing folder, if any.
    pub folder_id: Option<i64>,
    /// Name of the containing folder, if any.
    pub folder_name: Option<String>,
    /// Owning user.
    pub user_id: i64,
    /// Whether a share link is currently active.
    pub is_shared: bool,
    /// Current share token; rotated on every share toggle.
    pub share_token: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Partial update for a journal.
///
/// `folder_id` is doubly optional: `None` leaves the folder alone,
/// `Some(None)` moves the entry to uncategorized.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub folder_id: Option<Option<i64>>,
}

impl JournalPatch {
    /// Whether the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.folder_id.is_none()
    }
}

/// A folder grouping journal entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Display color (hex).
    pub color: String,
    /// Owning user.
    pub user_id: i64,
    /// Number of journals filed into this folder.
    pub journal_count: i64,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Partial update for a folder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl FolderPatch {
    /// Whether the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.color.is_none()
    }
}

/// A chat conversation keyed by session ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Client-supplied session identifier, unique per user.
    pub session_id: String,
    /// Title derived from the first user message; never overwritten.
    pub title: Option<String>,
    /// Owning user.
    pub user_id: i64,
    /// Soft-delete flag (trashed).
    pub is_deleted: bool,
    /// When the conversation was trashed, if it is.
    pub deleted_at: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last activity timestamp.
    pub updated_at: String,
}

/// Conversation summary row for listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ConversationListEntry {
    pub id: i64,
    pub session_id: String,
    pub title: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
    /// Number of messages in the conversation.
    pub message_count: i64,
    /// Timestamp of the most recent message, if any.
    pub last_message_time: Option<String>,
}

/// A single chat message, append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    /// Sender: `"user"` or `"ai"`.
    pub sender: String,
    /// Message text.
    pub message: String,
    /// When the message was written.
    pub timestamp: String,
}

/// A watched-video record; one row per (video, user), last watch wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct VideoHistoryEntry {
    /// Provider-native video ID.
    pub video_id: String,
    /// Video title.
    pub title: String,
    /// Channel name.
    pub channel: Option<String>,
    /// Thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// The search query that surfaced this video.
    pub search_query: Option<String>,
    /// Owning user.
    pub user_id: i64,
    /// Last watch timestamp.
    pub watched_at: String,
}

/// Derived per-user counts; always recomputed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_journals: i64,
    pub total_folders: i64,
    pub videos_watched: i64,
    pub journals_this_week: i64,
    pub total_conversations: i64,
}
