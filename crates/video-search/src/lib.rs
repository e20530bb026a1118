//! Video search with graceful degradation.
//!
//! This crate defines the [`VideoSearchProvider`] capability trait, a
//! YouTube-backed implementation, a disabled null implementation, and the
//! [`VideoService`] that normalizes raw provider results into a stable
//! schema and records watch history best-effort.
//!
//! Video search is an enrichment feature: when the provider is absent,
//! unreachable, or slow, the service answers with a small tagged sample set
//! instead of failing the request. Only provider-reported quota and
//! credential errors surface to the caller.

mod error;
mod format;
mod provider;
mod sample;
mod service;
mod youtube;

pub use error::VideoError;
pub use format::{format_view_count, parse_duration, truncate_description};
pub use provider::{DisabledVideoSearch, RawVideo, VideoSearchProvider};
pub use sample::sample_videos;
pub use service::{VideoFeed, VideoService, VideoSource, VideoSummary};
pub use youtube::{YouTubeConfig, YouTubeSearch};
