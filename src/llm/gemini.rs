// src/llm/gemini.rs
// Google Gemini generateContent client (non-streaming, text only).
// Authenticates via query-string key, not a Bearer header.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use super::CompletionService;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Google Gemini API client.
///
/// Each call is a single attempt: no retry, no backoff, and no request
/// timeout — the call blocks until the transport resolves or errors.
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    fn model_name(&self) -> String {
        self.model.clone()
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        info!(
            request_id = %request_id,
            model = %self.model,
            prompt_chars = prompt.len(),
            "Starting Gemini generateContent request"
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt.to_string() }],
            }],
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        );

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Gemini API error {}: {}", status, error_body));
        }

        let body = response.text().await?;
        debug!(request_id = %request_id, "Gemini response: {}", body);

        let data: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow!("Failed to parse Gemini response: {}", e))?;

        let text = data
            .candidates
            .and_then(|c| c.into_iter().next())
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .unwrap_or_default()
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .ok_or_else(|| anyhow!("Gemini response contained no candidates"))?;

        info!(
            request_id = %request_id,
            duration_ms = start_time.elapsed().as_millis() as u64,
            response_chars = text.len(),
            "Gemini request complete"
        );

        Ok(text)
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<Part>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base() {
        assert!(GEMINI_API_BASE.contains("generativelanguage.googleapis.com"));
    }

    #[test]
    fn test_model_name() {
        let client = GeminiClient::new("test-key".to_string(), "gemini-1.5-flash".to_string());
        assert_eq!(client.model_name(), "gemini-1.5-flash");
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: "hello".to_string() }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_response_text_extraction() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello "}, {"text": "there."}], "role": "model"}}
            ]
        }"#;
        let data: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let text: String = data
            .candidates
            .unwrap()
            .into_iter()
            .next()
            .unwrap()
            .content
            .parts
            .unwrap()
            .into_iter()
            .map(|p| p.text)
            .collect();
        assert_eq!(text, "Hello there.");
    }

    #[test]
    fn test_empty_response_has_no_candidates() {
        let data: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(data.candidates.is_none());
    }
}
