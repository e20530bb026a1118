//! The chat pipeline: persist, prompt, generate, fall back.

use std::sync::Arc;

use brain_core::{Brain, ChatPrompt, SessionWindow};
use database::{conversation, Database};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::OrchestratorError;
use crate::prompt::{CONTINUATION_INSTRUCTION, SYSTEM_PROMPT};

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// Generated by the configured provider.
    Ai,
    /// Generated by the rule-based fallback.
    Fallback,
}

/// A reply together with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub source: ReplySource,
}

/// Coordinates a chat turn end to end.
///
/// Every message is persisted before the provider is called, so history
/// survives provider outages. The rolling window only ever holds provider
/// exchanges; fallback replies are stored but kept out of future prompts.
pub struct ChatOrchestrator {
    brain: Arc<dyn Brain>,
    window: SessionWindow,
    db: Database,
    user_id: i64,
}

impl ChatOrchestrator {
    pub fn new(brain: Arc<dyn Brain>, db: Database, user_id: i64) -> Self {
        info!("ChatOrchestrator using brain: {}", brain.name());
        Self {
            brain,
            window: SessionWindow::default(),
            db,
            user_id,
        }
    }

    /// Handle one user message and produce a reply.
    pub async fn handle_message(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<ChatReply, OrchestratorError> {
        conversation::record_message(
            self.db.pool(),
            session_id,
            conversation::SENDER_USER,
            text,
            self.user_id,
        )
        .await?;

        self.window.push_user(session_id, text).await;

        let prompt = ChatPrompt {
            system: Some(SYSTEM_PROMPT.to_string()),
            context: self.window.context(session_id).await,
            instruction: Some(CONTINUATION_INSTRUCTION.to_string()),
        };

        let reply = match self.brain.generate(&prompt).await {
            Ok(reply) => {
                debug!("Provider reply for session {} ({} chars)", session_id, reply.len());
                self.window.push_assistant(session_id, &reply).await;
                ChatReply {
                    reply,
                    source: ReplySource::Ai,
                }
            }
            Err(e) => {
                warn!("Brain {} failed, using fallback: {}", self.brain.name(), e);
                ChatReply {
                    reply: socratic_brain::generate_reply(text),
                    source: ReplySource::Fallback,
                }
            }
        };

        conversation::record_message(
            self.db.pool(),
            session_id,
            conversation::SENDER_AI,
            &reply.reply,
            self.user_id,
        )
        .await?;

        Ok(reply)
    }

    /// Forget a session's rolling context. Stored history is untouched.
    pub async fn clear_memory(&self, session_id: &str) {
        self.window.clear(session_id).await;
        info!("Cleared in-memory context for session {}", session_id);
    }
}
