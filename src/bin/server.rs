//! campus-relay HTTP server binary.
//!
//! Starts an axum HTTP server that serves the chat page and the `/chat`
//! endpoint. Configuration comes from the environment (and `.env`), see
//! [`campus_relay::config`].
//!
//! # Usage
//!
//! ```bash
//! GEMINI_API_KEY=... cargo run --bin server
//! ```

use std::sync::Arc;

use anyhow::Context;
use campus_relay::chat::Dispatcher;
use campus_relay::server::{app_router, load_templates, AppState};
use campus_relay::{GeminiCompletion, RelayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RelayConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,campus_relay=debug".into()),
        )
        .init();

    tracing::info!("Using Gemini model: {}", config.model);

    let gemini = GeminiCompletion::new(&config);
    if !gemini.has_api_key() {
        tracing::warn!("GEMINI_API_KEY not set; generative fallback calls will fail");
    }
    let dispatcher = Dispatcher::campus(Arc::new(gemini))?;
    let templates = load_templates(&config.template_dir)
        .with_context(|| format!("loading templates from {}", config.template_dir))?;

    let app = app_router(AppState::new(dispatcher, templates));
    let bind_addr = config.bind_addr();

    tracing::info!("campus-relay server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /       — chat page");
    tracing::info!("  POST /chat   — answer a message");
    tracing::info!("  GET  /health — liveness probe");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
