// src/server/handlers.rs
// HTTP handlers: the chat relay plus status and persona-selector endpoints.

use axum::extract::State;
use axum::response::Json;
use serde_json::{Value, json};
use std::str::FromStr;
use tracing::info;

use super::AppState;
use super::types::{ChatRequest, ChatResponse};
use crate::error::{ReflectError, Result};
use crate::persona::{Persona, PersonaMeta};
use crate::prompt;

/// Health check and status endpoint
pub async fn status_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.llm.model_name(),
        "api_key_configured": state.api_key.is_some(),
    }))
}

/// The four persona selector records, for clients rendering the picker.
pub async fn personas_handler() -> Json<Vec<PersonaMeta>> {
    Json(Persona::ALL.iter().map(|p| p.meta()).collect())
}

/// The completion relay. Stateless: each call composes a prompt from the
/// caller-supplied history and makes exactly one external call.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    // Credential gate comes first; the external service is never invoked
    // without a key.
    if state.api_key.is_none() {
        return Err(ReflectError::MissingApiKey);
    }

    let persona = Persona::from_str(&req.persona)?;
    let full_prompt = prompt::compose(persona, &req.message, &req.history);

    info!(
        persona = %persona,
        history_len = req.history.len(),
        prompt_chars = full_prompt.len(),
        "relaying chat request"
    );

    let text = state
        .llm
        .generate(&full_prompt)
        .await
        .map_err(|e| ReflectError::Completion(e.to_string()))?;

    Ok(Json(ChatResponse { response: text }))
}
