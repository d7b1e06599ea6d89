// src/main.rs

use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use reflect::config::CONFIG;
use reflect::llm::GeminiClient;
use reflect::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let level = Level::from_str(&CONFIG.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Reflect");
    info!("Model: {}", CONFIG.model);
    if CONFIG.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set - chat requests will fail until it is configured");
    }

    // The client is built even without a key; every request re-checks the
    // credential and refuses to call out when it is missing.
    let llm = GeminiClient::new(
        CONFIG.gemini_api_key.clone().unwrap_or_default(),
        CONFIG.model.clone(),
    );

    let state = AppState {
        api_key: CONFIG.gemini_api_key.clone(),
        llm: Arc::new(llm),
    };

    server::run(&CONFIG.host, CONFIG.port, state).await
}
