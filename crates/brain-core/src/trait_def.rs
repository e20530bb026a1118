//! The Brain trait definition.

use async_trait::async_trait;

use crate::error::BrainError;
use crate::prompt::ChatPrompt;

/// A capability interface for text-generation providers.
///
/// Implementations range from the network-backed Gemini client to the
/// rule-based Socratic fallback and the [`crate::DisabledBrain`] null
/// provider. The trait is object-safe and used as `Arc<dyn Brain>`, so call
/// sites never branch on whether a provider is configured.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Generate a reply for the given prompt.
    async fn generate(&self, prompt: &ChatPrompt) -> Result<String, BrainError>;

    /// Get a human-readable name for this brain implementation.
    fn name(&self) -> &str;

    /// Check if the brain is ready to generate replies.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
