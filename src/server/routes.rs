//! Axum route handlers for the relay HTTP server.
//!
//! # Routes
//!
//! - `GET  /`       — Chat page rendered from `chatbot.html`
//! - `POST /chat`   — `{"message": ...}` → `{"response": ...}`
//! - `GET  /health` — Returns `{"status": "ok", "version": ...}`

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use tera::{Context, Tera};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::chat::{chat_handler, Dispatcher};

/// Name of the index template inside the template directory.
pub const INDEX_TEMPLATE: &str = "chatbot.html";

/// Shared application state for the HTTP server.
#[derive(Clone, FromRef)]
pub struct AppState {
    /// Read-only tables and the generative client.
    pub dispatcher: Arc<Dispatcher>,
    /// Compiled page templates.
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, templates: Tera) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            templates: Arc::new(templates),
        }
    }
}

/// Compile every `.html` template under `dir`.
pub fn load_templates(dir: &str) -> Result<Tera, tera::Error> {
    let glob = format!("{}/**/*.html", dir.trim_end_matches('/'));
    let templates = Tera::new(&glob)?;
    if !templates.get_template_names().any(|name| name == INDEX_TEMPLATE) {
        tracing::warn!(dir, "{} not found; GET / will fail", INDEX_TEMPLATE);
    }
    Ok(templates)
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / — render the chat page.
async fn index_handler(
    State(templates): State<Arc<Tera>>,
    State(dispatcher): State<Arc<Dispatcher>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut context = Context::new();
    context.insert("model", dispatcher.fallback().model());
    context.insert("version", crate::VERSION);

    templates
        .render(INDEX_TEMPLATE, &context)
        .map(Html)
        .map_err(|e| {
            tracing::error!(error = %e, "failed to render {}", INDEX_TEMPLATE);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render page".to_string(),
            )
        })
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": crate::SERVICE_NAME,
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::fallback::ERROR_REPLY;
    use crate::knowledge::campus;
    use crate::llms::base_llm::{LlmError, TextGenerator};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    /// Echoes the prompt back, or fails when built with `fail`.
    struct EchoGenerator {
        fail: bool,
    }

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        fn model(&self) -> &str {
            "echo-model"
        }

        fn provider(&self) -> &str {
            "test"
        }

        async fn generate(&self, prompt: &str) -> Result<Option<String>, LlmError> {
            if self.fail {
                return Err(LlmError::MissingApiKey { provider: "test" });
            }
            Ok(Some(format!(" echo:{} ", prompt)))
        }
    }

    fn app(fail: bool) -> Router {
        let dispatcher = Dispatcher::campus(Arc::new(EchoGenerator { fail })).unwrap();
        let mut templates = Tera::default();
        templates
            .add_raw_template(INDEX_TEMPLATE, "<h1>Campus chat</h1><p>{{ model }}</p>")
            .unwrap();
        app_router(AppState::new(dispatcher, templates))
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app(false).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], crate::SERVICE_NAME);
    }

    #[tokio::test]
    async fn test_index_renders_template() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app(false).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Campus chat"));
        assert!(html.contains("echo-model"));
    }

    #[tokio::test]
    async fn test_index_without_template_is_server_error() {
        let dispatcher = Dispatcher::campus(Arc::new(EchoGenerator { fail: false })).unwrap();
        let router = app_router(AppState::new(dispatcher, Tera::default()));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_chat_knowledge_answer() {
        let response = app(true)
            .oneshot(post_chat(r#"{"message": "Who is the CEO?"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["response"], "V. Lohit Reddy");
    }

    #[tokio::test]
    async fn test_chat_restricted_answer() {
        let response = app(false)
            .oneshot(post_chat(r#"{"message": "What is the hostel fee?"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["response"], campus::RESTRICTED_NOTICE);
    }

    #[tokio::test]
    async fn test_chat_fallback_uses_original_text() {
        let response = app(false)
            .oneshot(post_chat(r#"{"message": "Who is Elon Musk?"}"#))
            .await
            .unwrap();
        assert_eq!(json_body(response).await["response"], "echo:Who is Elon Musk?");
    }

    #[tokio::test]
    async fn test_chat_fallback_failure_is_still_ok() {
        let response = app(true)
            .oneshot(post_chat(r#"{"message": "Who is Elon Musk?"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["response"], ERROR_REPLY);
    }

    #[tokio::test]
    async fn test_chat_missing_message_forwards_empty_prompt() {
        let response = app(false).oneshot(post_chat("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["response"], "echo:");
    }

    #[tokio::test]
    async fn test_chat_rejects_invalid_json() {
        let response = app(false).oneshot(post_chat("not json")).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
