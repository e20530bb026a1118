//! Route handlers for the Scoratis API.

pub mod chat;
pub mod folders;
pub mod health;
pub mod journals;
pub mod stats;
pub mod videos;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Journals
        .route("/journals", get(journals::list).post(journals::create))
        .route("/journals/:id", put(journals::update).delete(journals::remove))
        .route("/journals/:id/share", post(journals::toggle_share))
        // Folders
        .route("/folders", get(folders::list).post(folders::create))
        .route("/folders/:id", put(folders::update).delete(folders::remove))
        // Chat
        .route("/chat", post(chat::send_message))
        .route("/chat/clear", post(chat::clear_memory))
        .route("/chat/history", get(chat::history))
        // GET takes a session ID, DELETE a numeric conversation ID
        .route(
            "/chat/conversation/:id",
            get(chat::conversation_messages).delete(chat::delete_conversation),
        )
        .route("/chat/conversation/:id/restore", post(chat::restore_conversation))
        .route("/chat/trash", get(chat::trash))
        .route("/chat/trash/empty", post(chat::empty_trash))
        // Videos
        .route("/videos/search", get(videos::search))
        .route("/videos/history", get(videos::history))
        // Statistics
        .route("/stats", get(stats::stats))
}
