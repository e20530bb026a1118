//! HTTP API server for the Scoratis journaling app.
//!
//! Wires the database, the chat pipeline, and video search into an axum
//! router. Provider API keys are optional: a missing key selects the
//! corresponding null implementation at startup, and the rest of the app
//! keeps working.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use brain_core::{Brain, DisabledBrain};
use database::Database;
use gemini_brain::GeminiBrain;
use orchestrator::ChatOrchestrator;
use tower_http::services::ServeDir;
use tracing::{info, warn};
use video_search::{DisabledVideoSearch, VideoSearchProvider, VideoService, YouTubeSearch};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting Scoratis API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Select providers based on available keys
    let brain: Arc<dyn Brain> = match GeminiBrain::from_env() {
        Ok(brain) => Arc::new(brain),
        Err(e) => {
            warn!("Gemini unavailable ({}), chat will use fallback replies", e);
            Arc::new(DisabledBrain)
        }
    };

    let provider: Arc<dyn VideoSearchProvider> = match YouTubeSearch::from_env() {
        Ok(search) => Arc::new(search),
        Err(e) => {
            warn!("YouTube unavailable ({}), video search will serve samples", e);
            Arc::new(DisabledVideoSearch)
        }
    };

    // Build application state
    let chat = ChatOrchestrator::new(brain, db.clone(), database::DEFAULT_USER_ID);
    let videos = VideoService::new(provider, db.clone(), database::DEFAULT_USER_ID);
    let state = AppState::new(db, chat, videos, config.public_base_url.clone());

    // Build router
    let app = routes::router()
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Scoratis API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
