//! The video search provider trait.

use async_trait::async_trait;

use crate::error::VideoError;

/// A video result as the provider reports it, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVideo {
    /// Provider-native video ID.
    pub video_id: String,
    /// Video title.
    pub title: String,
    /// Channel name.
    pub channel: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Untruncated description.
    pub description: String,
    /// Publication timestamp as the provider reports it.
    pub published_at: String,
    /// Provider-native duration encoding (e.g. `PT10M30S`).
    pub duration: String,
    /// Raw view count.
    pub view_count: u64,
}

/// A capability interface for video search backends.
///
/// Two implementations ship: the network-backed [`crate::YouTubeSearch`] and
/// the [`DisabledVideoSearch`] null provider, selected once at startup so
/// call sites never branch on configuration.
#[async_trait]
pub trait VideoSearchProvider: Send + Sync {
    /// Search for videos matching a query.
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<RawVideo>, VideoError>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}

/// A provider that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledVideoSearch;

impl DisabledVideoSearch {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VideoSearchProvider for DisabledVideoSearch {
    async fn search(&self, _query: &str, _max_results: u32) -> Result<Vec<RawVideo>, VideoError> {
        Err(VideoError::NotConfigured)
    }

    fn name(&self) -> &str {
        "DisabledVideoSearch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_provider_errors() {
        let provider = DisabledVideoSearch::new();
        let result = provider.search("torque", 5).await;
        assert!(matches!(result, Err(VideoError::NotConfigured)));
    }
}
