//! YouTube Data API v3 provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::VideoError;
use crate::provider::{RawVideo, VideoSearchProvider};

/// Configuration for the YouTube provider.
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    /// API base URL.
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_url: "https://www.googleapis.com/youtube/v3".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl YouTubeConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `YOUTUBE_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `YOUTUBE_API_URL` - API base URL (default: https://www.googleapis.com/youtube/v3)
    /// - `YOUTUBE_TIMEOUT_SECS` - Request timeout (default: 10)
    pub fn from_env() -> Result<Self, VideoError> {
        let api_key = env::var("YOUTUBE_API_KEY").map_err(|_| VideoError::NotConfigured)?;

        let defaults = Self::default();
        let api_url = env::var("YOUTUBE_API_URL").unwrap_or(defaults.api_url);
        let timeout_secs = env::var("YOUTUBE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        Ok(Self {
            api_url,
            api_key,
            timeout_secs,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "publishedAt", default)]
    published_at: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize, Default)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    statistics: Option<Statistics>,
    #[serde(rename = "contentDetails")]
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
struct Statistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: Option<String>,
}

/// The real, network-backed video search provider.
pub struct YouTubeSearch {
    client: Client,
    config: YouTubeConfig,
}

impl YouTubeSearch {
    /// Create a new provider with the given configuration.
    pub fn new(config: YouTubeConfig) -> Result<Self, VideoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VideoError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        info!("YouTubeSearch initialized (timeout: {}s)", config.timeout_secs);

        Ok(Self { client, config })
    }

    /// Create a provider from environment variables.
    pub fn from_env() -> Result<Self, VideoError> {
        Self::new(YouTubeConfig::from_env()?)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, VideoError> {
        let url = format!("{}/{}", self.config.api_url, path);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VideoError::Timeout
                } else {
                    VideoError::Network(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_api_error(status.as_u16(), &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| VideoError::Provider(format!("Failed to parse response: {}", e)))
    }
}

/// Map an API error body onto the taxonomy the HTTP layer cares about.
fn classify_api_error(status: u16, body: &str) -> VideoError {
    let lowered = body.to_lowercase();
    if lowered.contains("quotaexceeded") {
        VideoError::QuotaExceeded(body.to_string())
    } else if lowered.contains("keyinvalid") || lowered.contains("forbidden") {
        VideoError::InvalidKey(body.to_string())
    } else {
        VideoError::Provider(format!("API error ({}): {}", status, body))
    }
}

#[async_trait]
impl VideoSearchProvider for YouTubeSearch {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<RawVideo>, VideoError> {
        debug!("Searching videos: {} (max {})", query, max_results);

        let max_results_str = max_results.to_string();
        let search: SearchListResponse = self
            .get_json(
                "search",
                &[
                    ("q", query),
                    ("part", "snippet"),
                    ("type", "video"),
                    ("maxResults", &max_results_str),
                    ("order", "relevance"),
                    ("safeSearch", "moderate"),
                    ("videoEmbeddable", "true"),
                ],
            )
            .await?;

        if search.items.is_empty() {
            return Ok(Vec::new());
        }

        // Second call for statistics and durations, keyed by video ID.
        let ids: Vec<&str> = search.items.iter().map(|i| i.id.video_id.as_str()).collect();
        let ids_joined = ids.join(",");
        let details: VideoListResponse = self
            .get_json(
                "videos",
                &[("part", "statistics,contentDetails"), ("id", &ids_joined)],
            )
            .await?;

        let detail_map: std::collections::HashMap<&str, &VideoItem> =
            details.items.iter().map(|item| (item.id.as_str(), item)).collect();

        let videos = search
            .items
            .iter()
            .map(|item| {
                let detail = detail_map.get(item.id.video_id.as_str());
                let duration = detail
                    .and_then(|d| d.content_details.as_ref())
                    .and_then(|c| c.duration.clone())
                    .unwrap_or_else(|| "PT0S".to_string());
                let view_count = detail
                    .and_then(|d| d.statistics.as_ref())
                    .and_then(|s| s.view_count.as_deref())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);

                RawVideo {
                    video_id: item.id.video_id.clone(),
                    title: item.snippet.title.clone(),
                    channel: item.snippet.channel_title.clone(),
                    thumbnail: item
                        .snippet
                        .thumbnails
                        .medium
                        .as_ref()
                        .map(|t| t.url.clone())
                        .unwrap_or_default(),
                    description: item.snippet.description.clone(),
                    published_at: item.snippet.published_at.clone(),
                    duration,
                    view_count,
                }
            })
            .collect();

        Ok(videos)
    }

    fn name(&self) -> &str {
        "YouTubeSearch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(matches!(
            classify_api_error(403, r#"{"error": {"errors": [{"reason": "quotaExceeded"}]}}"#),
            VideoError::QuotaExceeded(_)
        ));
        assert!(matches!(
            classify_api_error(400, r#"{"error": {"errors": [{"reason": "keyInvalid"}]}}"#),
            VideoError::InvalidKey(_)
        ));
        assert!(matches!(
            classify_api_error(500, "boom"),
            VideoError::Provider(_)
        ));
    }

    #[test]
    fn test_search_response_parsing() {
        let json = r#"{
            "items": [{
                "id": {"videoId": "abc123"},
                "snippet": {
                    "title": "Torque explained",
                    "channelTitle": "Physics Channel",
                    "description": "All about torque",
                    "publishedAt": "2024-01-01T00:00:00Z",
                    "thumbnails": {"medium": {"url": "https://i.ytimg.com/t.jpg"}}
                }
            }]
        }"#;

        let parsed: SearchListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].id.video_id, "abc123");
        assert_eq!(parsed.items[0].snippet.channel_title, "Physics Channel");
    }
}
