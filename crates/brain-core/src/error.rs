//! Error types for provider operations.

use thiserror::Error;

/// Errors that can occur while generating a reply.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The provider is not configured (no API key) or temporarily down.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Bad or missing configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A network-level failure talking to the provider.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered but the response was unusable.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The provider call exceeded its timeout.
    #[error("provider call timed out")]
    Timeout,
}
