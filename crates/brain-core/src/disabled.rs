//! Null provider for deployments without an API key.

use async_trait::async_trait;

use crate::error::BrainError;
use crate::prompt::ChatPrompt;
use crate::trait_def::Brain;

/// A brain that is never available.
///
/// Selected at startup when no provider key is configured, so the chat path
/// always takes its normal fallback branch instead of testing for "is the
/// client configured".
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledBrain;

impl DisabledBrain {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Brain for DisabledBrain {
    async fn generate(&self, _prompt: &ChatPrompt) -> Result<String, BrainError> {
        Err(BrainError::Unavailable(
            "no text-generation provider configured".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "DisabledBrain"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_brain_always_unavailable() {
        let brain = DisabledBrain::new();
        assert!(!brain.is_ready().await);

        let result = brain.generate(&ChatPrompt::default()).await;
        assert!(matches!(result, Err(BrainError::Unavailable(_))));
    }
}
