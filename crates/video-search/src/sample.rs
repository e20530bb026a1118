//! Canned results served when the provider is unavailable.

use crate::service::VideoSummary;

/// Build the fixed sample set for a query.
///
/// Explicitly non-authoritative placeholder content; the HTTP response tags
/// it with `source: "sample"` so clients can label it.
pub fn sample_videos(query: &str, max_results: u32) -> Vec<VideoSummary> {
    let samples = vec![
        VideoSummary {
            video_id: "dQw4w9WgXcQ".to_string(),
            title: format!("Educational Content: {} - Introduction", query),
            channel: "Educational Channel".to_string(),
            thumbnail: "https://via.placeholder.com/320x180/8A2BE2/FFFFFF?text=Video+1".to_string(),
            description: format!("Learn about {} in this comprehensive introduction.", query),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            duration: "10:30".to_string(),
            view_count: "1.2M".to_string(),
        },
        VideoSummary {
            video_id: "dQw4w9WgXcQ".to_string(),
            title: format!("Advanced {} Techniques", query),
            channel: "Science Academy".to_string(),
            thumbnail: "https://via.placeholder.com/320x180/00BFFF/FFFFFF?text=Video+2".to_string(),
            description: format!("Dive deeper into {} with advanced concepts.", query),
            published_at: "2024-01-02T00:00:00Z".to_string(),
            duration: "15:45".to_string(),
            view_count: "850K".to_string(),
        },
    ];

    samples.into_iter().take(max_results as usize).collect()
}
