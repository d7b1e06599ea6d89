// src/error.rs
// Standardized error types for Reflect

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the Reflect library
#[derive(Error, Debug)]
pub enum ReflectError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("unknown persona: {0}")]
    UnknownPersona(String),

    #[error("completion error: {0}")]
    Completion(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Convenience type alias for Result using ReflectError
pub type Result<T> = std::result::Result<T, ReflectError>;

impl IntoResponse for ReflectError {
    /// Convert to the uniform `{"error": ...}` envelope.
    ///
    /// Relay failures are logged server-side but surfaced opaquely: the
    /// caller cannot distinguish network, quota, or malformed-response
    /// failures. Persona rejection is the one input-validation case and
    /// gets a 400 instead.
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ReflectError::MissingApiKey => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            ReflectError::UnknownPersona(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ReflectError::Completion(_)
            | ReflectError::Http(_)
            | ReflectError::Json(_)
            | ReflectError::Anyhow(_) => {
                tracing::error!("chat request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate response".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_error() {
        let err = ReflectError::MissingApiKey;
        assert_eq!(err.to_string(), "API key not configured");
    }

    #[test]
    fn test_unknown_persona_error() {
        let err = ReflectError::UnknownPersona("time-traveler".to_string());
        assert!(err.to_string().contains("unknown persona"));
        assert!(err.to_string().contains("time-traveler"));
    }

    #[test]
    fn test_completion_error() {
        let err = ReflectError::Completion("rate limited".to_string());
        assert!(err.to_string().contains("completion error"));
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: ReflectError = json_err.into();
        assert!(matches!(err, ReflectError::Json(_)));
    }

    #[test]
    fn test_missing_key_response_is_500() {
        let resp = ReflectError::MissingApiKey.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_persona_response_is_400() {
        let resp = ReflectError::UnknownPersona("x".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_completion_response_is_opaque_500() {
        let resp = ReflectError::Completion("quota exceeded".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
