//! Video provider error types.

use thiserror::Error;

/// Errors that can occur during a video search.
#[derive(Debug, Error)]
pub enum VideoError {
    /// No provider configured (no API key).
    #[error("video search provider not configured")]
    NotConfigured,

    /// Provider rejected the request for exhausted quota.
    #[error("provider quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Provider rejected the credentials.
    #[error("invalid provider credentials: {0}")]
    InvalidKey(String),

    /// A network-level failure talking to the provider.
    #[error("network error: {0}")]
    Network(String),

    /// The provider call exceeded its timeout.
    #[error("provider call timed out")]
    Timeout,

    /// The provider answered but the response was unusable.
    #[error("provider error: {0}")]
    Provider(String),
}

impl VideoError {
    /// Whether this failure should degrade to the sample set rather than
    /// surface to the caller. Quota and credential problems are actionable
    /// and get distinct status codes instead.
    pub fn is_degradable(&self) -> bool {
        !matches!(self, VideoError::QuotaExceeded(_) | VideoError::InvalidKey(_))
    }
}
