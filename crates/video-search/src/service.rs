//! Search orchestration: provider call, normalization, history, degradation.

use std::sync::Arc;

use database::Database;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::VideoError;
use crate::format::{format_view_count, parse_duration, truncate_description};
use crate::provider::{RawVideo, VideoSearchProvider};
use crate::sample::sample_videos;

/// A normalized, display-ready video entry.
#[derive(Debug, Clone, Serialize)]
pub struct VideoSummary {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub thumbnail: String,
    /// Description truncated for the sidebar card.
    pub description: String,
    pub published_at: String,
    /// Human-readable duration, e.g. "12:34" or "1:02:03".
    pub duration: String,
    /// Human-readable view count, e.g. "1.2M".
    pub view_count: String,
}

impl VideoSummary {
    fn from_raw(raw: &RawVideo) -> Self {
        Self {
            video_id: raw.video_id.clone(),
            title: raw.title.clone(),
            channel: raw.channel.clone(),
            thumbnail: raw.thumbnail.clone(),
            description: truncate_description(&raw.description),
            published_at: raw.published_at.clone(),
            duration: parse_duration(&raw.duration),
            view_count: format_view_count(raw.view_count),
        }
    }
}

/// Where a feed's entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    YouTube,
    Sample,
}

/// A search result set together with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct VideoFeed {
    pub videos: Vec<VideoSummary>,
    pub source: VideoSource,
}

/// Ties a provider to history persistence and the sample fallback.
pub struct VideoService {
    provider: Arc<dyn VideoSearchProvider>,
    db: Database,
    user_id: i64,
}

impl VideoService {
    pub fn new(provider: Arc<dyn VideoSearchProvider>, db: Database, user_id: i64) -> Self {
        Self {
            provider,
            db,
            user_id,
        }
    }

    /// Run a search, normalize the results, and record them in history.
    ///
    /// A missing or unreachable provider degrades to the sample set; quota
    /// and key errors are surfaced so the caller can report them.
    pub async fn search(&self, query: &str, max_results: u32) -> Result<VideoFeed, VideoError> {
        match self.provider.search(query, max_results).await {
            Ok(raw) => {
                let videos: Vec<VideoSummary> = raw.iter().map(VideoSummary::from_raw).collect();
                self.record_results(query, &videos).await;
                Ok(VideoFeed {
                    videos,
                    source: VideoSource::YouTube,
                })
            }
            Err(e) if e.is_degradable() => {
                debug!("Video provider unavailable ({}), serving samples", e);
                Ok(VideoFeed {
                    videos: sample_videos(query, max_results),
                    source: VideoSource::Sample,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// History writes are best effort; a failed insert never fails the search.
    async fn record_results(&self, query: &str, videos: &[VideoSummary]) {
        for video in videos {
            let result = database::video_history::record_watch(
                self.db.pool(),
                &video.video_id,
                &video.title,
                Some(&video.channel),
                Some(&video.thumbnail),
                Some(query),
                self.user_id,
            )
            .await;

            if let Err(e) = result {
                warn!("Failed to record video history for {}: {}", video.video_id, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::DisabledVideoSearch;
    use async_trait::async_trait;

    struct FixedProvider(Vec<RawVideo>);

    #[async_trait]
    impl VideoSearchProvider for FixedProvider {
        async fn search(&self, _query: &str, _max: u32) -> Result<Vec<RawVideo>, VideoError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "FixedProvider"
        }
    }

    struct FailingProvider(fn() -> VideoError);

    #[async_trait]
    impl VideoSearchProvider for FailingProvider {
        async fn search(&self, _query: &str, _max: u32) -> Result<Vec<RawVideo>, VideoError> {
            Err((self.0)())
        }

        fn name(&self) -> &str {
            "FailingProvider"
        }
    }

    async fn test_service(provider: Arc<dyn VideoSearchProvider>) -> VideoService {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        VideoService::new(provider, db, database::DEFAULT_USER_ID)
    }

    fn raw_video() -> RawVideo {
        RawVideo {
            video_id: "vid1".to_string(),
            title: "Torque basics".to_string(),
            channel: "Physics".to_string(),
            thumbnail: "https://example.com/t.jpg".to_string(),
            description: "d".repeat(300),
            published_at: "2024-05-01T00:00:00Z".to_string(),
            duration: "PT12M34S".to_string(),
            view_count: 1_234_567,
        }
    }

    #[tokio::test]
    async fn test_search_normalizes_and_records() {
        let service = test_service(Arc::new(FixedProvider(vec![raw_video()]))).await;

        let feed = service.search("torque", 12).await.unwrap();
        assert_eq!(feed.source, VideoSource::YouTube);
        assert_eq!(feed.videos.len(), 1);
        assert_eq!(feed.videos[0].duration, "12:34");
        assert_eq!(feed.videos[0].view_count, "1.2M");
        assert_eq!(feed.videos[0].description.len(), 203);

        let history =
            database::video_history::get_history(service.db.pool(), database::DEFAULT_USER_ID, 10)
                .await
                .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].video_id, "vid1");
        assert_eq!(history[0].search_query.as_deref(), Some("torque"));
    }

    #[tokio::test]
    async fn test_disabled_provider_degrades_to_samples() {
        let service = test_service(Arc::new(DisabledVideoSearch)).await;

        let feed = service.search("gravity", 12).await.unwrap();
        assert_eq!(feed.source, VideoSource::Sample);
        assert_eq!(feed.videos.len(), 2);
        assert!(feed.videos[0].title.contains("gravity"));

        // Samples are never written to history.
        let history =
            database::video_history::get_history(service.db.pool(), database::DEFAULT_USER_ID, 10)
                .await
                .unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_degrades_to_samples() {
        let service = test_service(Arc::new(FailingProvider(|| {
            VideoError::Network("connection refused".to_string())
        })))
        .await;

        let feed = service.search("spin", 5).await.unwrap();
        assert_eq!(feed.source, VideoSource::Sample);
    }

    #[tokio::test]
    async fn test_quota_error_surfaces() {
        let service = test_service(Arc::new(FailingProvider(|| {
            VideoError::QuotaExceeded("quotaExceeded".to_string())
        })))
        .await;

        let err = service.search("spin", 5).await.unwrap_err();
        assert!(matches!(err, VideoError::QuotaExceeded(_)));
    }
}
