//! Chat orchestration for the Socratic companion.
//!
//! This crate provides the [`ChatOrchestrator`] type which ties together the
//! configured [`Brain`](brain_core::Brain), the per-session rolling context
//! window, durable conversation storage, and the rule-based fallback.
//!
//! # Flow
//!
//! ```text
//! user message
//!      |
//!      v
//! persist to chat_messages (always, before any provider call)
//!      |
//!      v
//! append to session window, build prompt (persona + window + steering)
//!      |
//!      v
//! brain.generate()
//!      |                  \
//!   success             failure (any BrainError)
//!      |                     |
//! persist reply       rule-based fallback reply
//! append to window    persist reply, window untouched
//!      |                     |
//!      v                     v
//! ChatReply { source: ai }  ChatReply { source: fallback }
//! ```
//!
//! A failed provider call never fails the request: the caller always gets a
//! reply, tagged with where it came from.

mod error;
mod orchestrator;
mod prompt;

pub use error::OrchestratorError;
pub use orchestrator::{ChatOrchestrator, ChatReply, ReplySource};
pub use prompt::{CONTINUATION_INSTRUCTION, SYSTEM_PROMPT};

// Re-export commonly used types from dependencies
pub use brain_core::{Brain, BrainError, ChatPrompt, SessionWindow};
