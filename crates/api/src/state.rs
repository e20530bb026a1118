//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use orchestrator::ChatOrchestrator;
use video_search::VideoService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Chat pipeline.
    pub chat: Arc<ChatOrchestrator>,
    /// Video search with degradation.
    pub videos: Arc<VideoService>,
    /// Base URL for share links.
    pub public_base_url: String,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        db: Database,
        chat: ChatOrchestrator,
        videos: VideoService,
        public_base_url: String,
    ) -> Self {
        Self {
            db,
            chat: Arc::new(chat),
            videos: Arc::new(videos),
            public_base_url,
        }
    }
}
