//! Rule-based Socratic fallback generator.
//!
//! This crate produces coaching replies without any AI provider: an ordered
//! cascade of (predicate, template) rules classifies the user's message and
//! returns the first match. It is deterministic, pure, and infallible, which
//! is what makes it a safe substitute whenever the real provider is
//! unconfigured, down, or slow.
//!
//! Every reply follows the same structural contract: a short acknowledgment,
//! at most one micro-explanation, and exactly one question placed last.
//!
//! # Example
//!
//! ```rust
//! use socratic_brain::generate_reply;
//!
//! let reply = generate_reply("I don't know torque");
//! assert!(reply.ends_with('?'));
//! ```

mod rules;

pub use rules::generate_reply;

use async_trait::async_trait;
use brain_core::{Brain, BrainError, ChatPrompt};

/// A [`Brain`] wrapper around the rule cascade.
///
/// Unlike the network-backed providers this brain cannot fail, so it also
/// serves as the always-available last rung in the chat fallback chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocraticBrain;

impl SocraticBrain {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Brain for SocraticBrain {
    async fn generate(&self, prompt: &ChatPrompt) -> Result<String, BrainError> {
        let user_text = prompt.latest_user_text().unwrap_or("");
        Ok(generate_reply(user_text))
    }

    fn name(&self) -> &str {
        "SocraticBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_core::ChatTurn;

    #[tokio::test]
    async fn test_brain_replies_to_latest_user_turn() {
        let brain = SocraticBrain::new();
        let prompt = ChatPrompt {
            system: None,
            context: vec![
                ChatTurn::user("earlier message"),
                ChatTurn::assistant("a reply"),
                ChatTurn::user("I don't know torque"),
            ],
            instruction: None,
        };

        let reply = brain.generate(&prompt).await.unwrap();
        assert!(reply.contains("torque"));
    }

    #[tokio::test]
    async fn test_brain_is_always_ready() {
        let brain = SocraticBrain::new();
        assert!(brain.is_ready().await);
        assert_eq!(brain.name(), "SocraticBrain");
    }
}
