//! Error types for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use video_search::VideoError;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request was malformed or missing required fields.
    #[error("{0}")]
    Validation(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),

    /// Chat pipeline error.
    #[error("Chat error: {0}")]
    Chat(#[from] orchestrator::OrchestratorError),

    /// Video provider error that cannot be degraded away.
    #[error("Video error: {0}")]
    Video(#[from] VideoError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Database(database::DatabaseError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Chat(err) => {
                tracing::error!("Chat error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Video(VideoError::QuotaExceeded(_)) => (
                StatusCode::TOO_MANY_REQUESTS,
                "YouTube API quota exceeded. Please try again later.".to_string(),
            ),
            ApiError::Video(VideoError::InvalidKey(_)) => {
                (StatusCode::UNAUTHORIZED, "Invalid YouTube API key.".to_string())
            }
            ApiError::Video(err) => {
                tracing::error!("Video error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to fetch videos: {}", err),
                )
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
