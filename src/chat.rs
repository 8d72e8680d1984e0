//! Stateful mentor chat sessions.
//!
//! Session creation is purely local; the first network call happens on the
//! first [`MentorChat::send`]. Turn history lives in the session and is
//! replayed in full on every call, matching the stateless wire protocol.

use async_trait::async_trait;
use tracing::error;

use crate::client::GeminiClient;
use crate::config::GeminiConfig;
use crate::error::MentorError;
use crate::types::{Content, GenerateContentRequest};

/// Fixed mentoring persona, including the standing instruction to point
/// health questions at a professional.
const CHAT_SYSTEM_INSTRUCTION: &str = "You are a friendly and knowledgeable pharmacy mentor for \
B.Pharm students. Answer questions about pharmacology, pharmaceutics, pharmaceutical chemistry, \
pharmacognosy and pharmacy practice clearly and at an undergraduate level. When a question \
concerns someone's personal health, medication use or symptoms, always recommend consulting a \
qualified healthcare professional instead of giving individual medical advice.";

/// Capability offered by a live chat session.
///
/// Only what the underlying session truly supports: sending a message,
/// reading the accumulated history and resetting it.
#[async_trait]
pub trait MentorChat: Send {
    /// Send one message and return the model's reply text.
    async fn send(&mut self, message: &str) -> Result<String, MentorError>;

    /// The turns exchanged so far, in order.
    fn history(&self) -> &[Content];

    /// Drop all accumulated turns.
    fn reset(&mut self);
}

/// A chat session bound to the Gemini API.
#[derive(Debug, Clone)]
pub struct MentorSession {
    client: GeminiClient,
    history: Vec<Content>,
}

impl MentorSession {
    /// Create a session. No network call is made until [`MentorChat::send`].
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: GeminiClient::new(config),
            history: Vec::new(),
        }
    }
}

#[async_trait]
impl MentorChat for MentorSession {
    async fn send(&mut self, message: &str) -> Result<String, MentorError> {
        self.history.push(Content::user(message));

        let request = GenerateContentRequest::new(self.history.clone())
            .with_system_instruction(Content::system_text(CHAT_SYSTEM_INSTRUCTION));

        let result = self.client.generate_content(&request).await;
        let reply = match result.map(|response| response.first_text()) {
            Ok(Some(text)) => text,
            Ok(None) => {
                // Roll back the pending user turn so the history never holds
                // an unanswered message.
                self.history.pop();
                error!("chat reply was empty");
                return Err(MentorError::EmptyResponse);
            }
            Err(err) => {
                self.history.pop();
                error!(error = %err, "chat send failed");
                return Err(err);
            }
        };

        self.history.push(Content::model(reply.clone()));
        Ok(reply)
    }

    fn history(&self) -> &[Content] {
        &self.history
    }

    fn reset(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_local_and_empty() {
        let session = MentorSession::new(GeminiConfig::new("key"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn reset_clears_history() {
        let mut session = MentorSession::new(GeminiConfig::new("key"));
        session.history.push(Content::user("q"));
        session.history.push(Content::model("a"));
        session.reset();
        assert!(session.history().is_empty());
    }
}
