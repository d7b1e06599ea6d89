// src/session.rs
// In-memory conversation state for one client session. Nothing here is
// persisted; the transcript lives for the lifetime of the page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::persona::Persona;

/// Literal transcript entry substituted when a relay call fails.
pub const FALLBACK_ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One transcript entry. The timestamp defaults on deserialization so
/// clients may send bare `{role, content}` history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), timestamp: Utc::now() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into(), timestamp: Utc::now() }
    }
}

/// Discrete events driving the session state machine.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// User submitted a message.
    Submit { text: String },
    /// Relay returned an assistant reply.
    ResponseReceived { text: String },
    /// Relay call failed; the transcript gets the literal fallback entry.
    ErrorReceived,
}

/// The ordered transcript plus the selected persona and loading flag,
/// owned exclusively by one client session.
#[derive(Debug, Clone)]
pub struct ConversationState {
    pub persona: Persona,
    pub messages: Vec<Message>,
    pub loading: bool,
}

impl ConversationState {
    pub fn new(persona: Persona) -> Self {
        Self { persona, messages: Vec::new(), loading: false }
    }

    /// Number of prior messages (user+assistant interleaved). Always derived
    /// from the transcript, never stored separately.
    pub fn exchange_count(&self) -> usize {
        self.messages.len()
    }

    /// Apply one event. All transitions are pure state updates; there is no
    /// optimistic rollback and no cancellation of in-flight requests.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Submit { text } => {
                // Guard against blank input and double-submit while a call
                // is pending. Presentational only; the relay itself accepts
                // arbitrary concurrent calls.
                if text.trim().is_empty() || self.loading {
                    return;
                }
                self.messages.push(Message::user(text));
                self.loading = true;
            }
            SessionEvent::ResponseReceived { text } => {
                self.messages.push(Message::assistant(text));
                self.loading = false;
            }
            SessionEvent::ErrorReceived => {
                self.messages.push(Message::assistant(FALLBACK_ERROR_MESSAGE));
                self.loading = false;
            }
        }
    }
}
