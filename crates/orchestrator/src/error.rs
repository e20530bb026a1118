//! Error types for orchestration.

use thiserror::Error;

/// Errors that can occur while handling a chat message.
///
/// Provider failures are not represented here; they are absorbed by the
/// fallback path. What remains is persistence.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Conversation storage failed.
    #[error(transparent)]
    Database(#[from] database::DatabaseError),
}
