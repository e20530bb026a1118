//! Core trait and types for text-generation providers.
//!
//! This crate provides the shared interface for every "brain" the chat
//! subsystem can talk to. It defines:
//!
//! - [`Brain`] - the capability trait all providers implement
//! - [`ChatPrompt`] / [`ChatTurn`] - provider-agnostic prompt types
//! - [`BrainError`] - error types for provider operations
//! - [`SessionWindow`] - the volatile per-session rolling context store
//! - [`DisabledBrain`] - the null provider used when no API key is configured
//!
//! # Example
//!
//! ```rust
//! use brain_core::{Brain, BrainError, ChatPrompt};
//! use async_trait::async_trait;
//!
//! struct MyBrain;
//!
//! #[async_trait]
//! impl Brain for MyBrain {
//!     async fn generate(&self, _prompt: &ChatPrompt) -> Result<String, BrainError> {
//!         Ok("Hello!".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyBrain"
//!     }
//! }
//! ```

mod disabled;
mod error;
mod prompt;
mod trait_def;
mod window;

pub use disabled::DisabledBrain;
pub use error::BrainError;
pub use prompt::{ChatPrompt, ChatTurn, Role};
pub use trait_def::Brain;
pub use window::SessionWindow;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
