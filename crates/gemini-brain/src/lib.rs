//! Gemini-backed [`Brain`](brain_core::Brain) implementation.
//!
//! Talks to the Gemini `generateContent` REST endpoint with a bounded
//! request timeout. One attempt per call, no retries: any failure is
//! surfaced as a [`brain_core::BrainError`] and the caller degrades to the
//! rule-based fallback.

mod api_types;
mod brain;
mod config;

pub use brain::GeminiBrain;
pub use config::{GeminiConfig, GeminiConfigBuilder};
