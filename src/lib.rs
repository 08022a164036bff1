//! # campus-relay
//!
//! Single-endpoint chat relay for the CBIT campus assistant.
//!
//! A message is answered from a small static knowledge table when one of its
//! triggers appears, deflected to official contact channels when it touches
//! a restricted topic, and otherwise forwarded to Google Gemini.

pub mod chat;
pub mod config;
pub mod knowledge;
pub mod llms;
pub mod policy;
pub mod server;

pub use chat::{Dispatcher, Reply, ReplySource};
pub use config::RelayConfig;
pub use knowledge::{AliasTable, KnowledgeBase, KnowledgeValue};
pub use llms::{GeminiCompletion, LlmError, TextGenerator};
pub use policy::RestrictedTopics;

/// Crate version reported by `/health`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "campus-relay";
