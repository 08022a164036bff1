//! Chat handler — POST /chat endpoint implementation.
//!
//! Request:  `{ "message": string }` (missing or null → empty string)
//! Response: `{ "response": string }`, always 200 once the body parses.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::dispatcher::Dispatcher;

// ============================================================================
// Request / Response types
// ============================================================================

/// Incoming chat request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatRequest {
    /// The user's message text.
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// Chat reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

// ============================================================================
// Handler
// ============================================================================

/// POST /chat — run the message through the dispatcher.
pub async fn chat_handler(
    State(dispatcher): State<Arc<Dispatcher>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = dispatcher.dispatch(request.message()).await;
    tracing::info!(source = ?reply.source, len = reply.text.len(), "chat reply");
    Json(ChatResponse {
        response: reply.text,
    })
}
