// src/server/types.rs
// Request/response envelopes for the chat API.

use serde::{Deserialize, Serialize};

use crate::session::Message;

/// Body of `POST /api/chat`. `history` is the caller's full transcript;
/// the relay holds no memory of prior calls beyond it.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub persona: String,
    pub message: String,
    #[serde(default)]
    pub history: Vec<Message>,
}

/// Success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}
