//! HTTP server for the reflection chat client
//!
//! Endpoints:
//! - GET  /api/status   - Health check
//! - GET  /api/personas - Persona selector records
//! - POST /api/chat     - Relay one message to the completion service

mod handlers;
pub mod types;

use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::llm::CompletionService;

pub use types::{ChatRequest, ChatResponse};

/// Max request body size (64KB - allows for history + message overhead)
const CHAT_MAX_BODY_BYTES: usize = 64 * 1024;

// ============================================================================
// Server State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Checked per request; absence fails the call before the relay runs.
    pub api_key: Option<String>,
    pub llm: Arc<dyn CompletionService>,
}

// ============================================================================
// Routes
// ============================================================================

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/status", get(handlers::status_handler))
        .route("/api/personas", get(handlers::personas_handler))
        .route(
            "/api/chat",
            post(handlers::chat_handler).layer(DefaultBodyLimit::max(CHAT_MAX_BODY_BYTES)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(host: &str, port: u16, state: AppState) -> Result<()> {
    let app = create_router(state);
    let bind_address = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
