//! HTTP server for the chat relay.
//!
//! # Endpoints
//!
//! - `GET  /`       — Chat page
//! - `POST /chat`   — Answer one message
//! - `GET  /health` — Liveness probe

pub mod routes;

pub use routes::{app_router, load_templates, AppState};
