//! Per-session rolling context windows.
//!
//! This module provides volatile conversation context keyed by session ID,
//! with automatic turn-based trimming and LRU eviction to prevent memory
//! exhaustion. The window is a prompt-building optimization only: it is
//! rebuilt empty on process restart and never stands in for the durable
//! message history.

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::prompt::ChatTurn;

/// Default maximum number of turns kept per session.
const DEFAULT_MAX_TURNS: usize = 10;

/// Default maximum number of sessions to track before LRU eviction.
const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Rolling per-session context with LRU eviction.
///
/// Maintains the last N turns for each session, oldest discarded first.
/// To keep hostile session churn from exhausting memory, the total number of
/// tracked sessions is capped and the least recently used session is evicted
/// when the cap is exceeded.
///
/// Access goes through an async `RwLock`, so concurrent requests for the same
/// session may interleave (a lost or duplicated context turn is tolerated)
/// but can never corrupt the structure itself.
#[derive(Debug)]
pub struct SessionWindow {
    /// Map from session ID to its turns. IndexMap keeps insertion order for
    /// LRU eviction.
    windows: RwLock<IndexMap<String, Vec<ChatTurn>>>,
    /// Maximum turns kept per session.
    max_turns: usize,
    /// Maximum sessions tracked before LRU eviction.
    max_sessions: usize,
}

impl Default for SessionWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}

impl SessionWindow {
    /// Create a new window keeping `max_turns` turns per session.
    pub fn new(max_turns: usize) -> Self {
        Self::with_limits(max_turns, DEFAULT_MAX_SESSIONS)
    }

    /// Create a new window with custom limits.
    pub fn with_limits(max_turns: usize, max_sessions: usize) -> Self {
        Self {
            windows: RwLock::new(IndexMap::new()),
            max_turns,
            max_sessions,
        }
    }

    /// Get a snapshot of the context for a session, oldest turn first.
    ///
    /// Marks the session as recently used for LRU purposes.
    pub async fn context(&self, session_id: &str) -> Vec<ChatTurn> {
        let mut windows = self.windows.write().await;

        if let Some(turns) = windows.shift_remove(session_id) {
            let snapshot = turns.clone();
            windows.insert(session_id.to_string(), turns);
            snapshot
        } else {
            Vec::new()
        }
    }

    /// Append a user turn to a session's window.
    pub async fn push_user(&self, session_id: &str, text: &str) {
        self.push(session_id, ChatTurn::user(text)).await;
    }

    /// Append an assistant turn to a session's window.
    pub async fn push_assistant(&self, session_id: &str, text: &str) {
        self.push(session_id, ChatTurn::assistant(text)).await;
    }

    async fn push(&self, session_id: &str, turn: ChatTurn) {
        let mut windows = self.windows.write().await;

        // Remove and re-insert to mark as recently used.
        let mut turns = windows.shift_remove(session_id).unwrap_or_default();
        turns.push(turn);

        // Oldest turns fall off first.
        if turns.len() > self.max_turns {
            let overflow = turns.len() - self.max_turns;
            turns.drain(0..overflow);
        }

        windows.insert(session_id.to_string(), turns);

        // LRU eviction of whole sessions over the cap.
        while windows.len() > self.max_sessions {
            windows.shift_remove_index(0);
        }
    }

    /// Forget a session's window. Durable history is unaffected.
    pub async fn clear(&self, session_id: &str) {
        let mut windows = self.windows.write().await;
        windows.shift_remove(session_id);
    }

    /// Forget every session's window.
    pub async fn clear_all(&self) {
        let mut windows = self.windows.write().await;
        windows.clear();
    }

    /// Number of sessions currently tracked.
    pub async fn session_count(&self) -> usize {
        let windows = self.windows.read().await;
        windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Role;

    #[tokio::test]
    async fn test_push_and_context() {
        let window = SessionWindow::new(10);

        window.push_user("s1", "Hello").await;
        window.push_assistant("s1", "Hi there").await;

        let context = window.context("s1").await;
        assert_eq!(context.len(), 2);
        assert_eq!(context[0].role, Role::User);
        assert_eq!(context[0].content, "Hello");
        assert_eq!(context[1].role, Role::Assistant);
    }

    #[tokio::test]
    async fn test_oldest_turns_discarded_first() {
        let window = SessionWindow::new(3);

        for i in 0..5 {
            window.push_user("s1", &format!("msg {}", i)).await;
        }

        let context = window.context("s1").await;
        assert_eq!(context.len(), 3);
        assert_eq!(context[0].content, "msg 2");
        assert_eq!(context[2].content, "msg 4");
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let window = SessionWindow::new(10);
        window.push_user("a", "from a").await;
        window.push_user("b", "from b").await;

        assert_eq!(window.context("a").await[0].content, "from a");
        assert_eq!(window.context("b").await[0].content, "from b");
    }

    #[tokio::test]
    async fn test_clear_forgets_one_session() {
        let window = SessionWindow::new(10);
        window.push_user("a", "hi").await;
        window.push_user("b", "hi").await;

        window.clear("a").await;

        assert!(window.context("a").await.is_empty());
        assert_eq!(window.context("b").await.len(), 1);
        assert_eq!(window.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_lru_eviction_over_session_cap() {
        let window = SessionWindow::with_limits(10, 2);

        window.push_user("a", "1").await;
        window.push_user("b", "2").await;
        // Touch "a" so "b" becomes the LRU session.
        window.context("a").await;
        window.push_user("c", "3").await;

        assert_eq!(window.session_count().await, 2);
        assert!(window.context("b").await.is_empty());
        assert!(!window.context("a").await.is_empty());
    }
}
