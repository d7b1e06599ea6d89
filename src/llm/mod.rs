// src/llm/mod.rs
// Outbound half of the completion relay.

mod gemini;

pub use gemini::GeminiClient;

use anyhow::Result;
use async_trait::async_trait;

/// Seam between the relay and the external generative-text service.
///
/// The service is treated as an opaque black box: one composed prompt in,
/// one complete text reply out. Tests substitute a stub implementation.
#[async_trait]
pub trait CompletionService: Send + Sync {
    fn model_name(&self) -> String;

    /// Submit a prompt and await the full, non-streamed text result.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
