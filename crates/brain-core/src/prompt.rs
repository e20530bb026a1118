//! Provider-agnostic prompt types.

use serde::{Deserialize, Serialize};

/// Who produced a turn in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// A single prior turn in the rolling context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A complete request to a text-generation provider.
///
/// The context already contains the current user message as its final turn;
/// providers should not append it again.
#[derive(Debug, Clone, Default)]
pub struct ChatPrompt {
    /// Optional system instruction (persona, guardrails).
    pub system: Option<String>,
    /// Prior turns, oldest first, ending with the current user message.
    pub context: Vec<ChatTurn>,
    /// Extra steering appended after the context (e.g. "one question per
    /// turn"), if any.
    pub instruction: Option<String>,
}

impl ChatPrompt {
    /// Render the context as a plain text block, one turn per line.
    ///
    /// Used by providers that take a single prompt string rather than a
    /// structured message array.
    pub fn context_block(&self) -> String {
        let mut block = String::new();
        for turn in &self.context {
            let speaker = match turn.role {
                Role::User => "Human",
                Role::Assistant => "Scoratis",
            };
            block.push_str(speaker);
            block.push_str(": ");
            block.push_str(&turn.content);
            block.push('\n');
        }
        block.trim_end().to_string()
    }

    /// The current user message, i.e. the trailing user turn, if any.
    pub fn latest_user_text(&self) -> Option<&str> {
        self.context
            .iter()
            .rev()
            .find(|turn| turn.role == Role::User)
            .map(|turn| turn.content.as_str())
    }
}
