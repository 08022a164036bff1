//! Text generation seam for external LLM services.
//!
//! The relay sends a single user prompt and expects plain text back, so the
//! contract is intentionally narrow: one prompt in, optional text out.

use async_trait::async_trait;
use thiserror::Error;

/// Failures talking to a generative service.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key was configured.
    #[error("{provider} API key not set")]
    MissingApiKey { provider: &'static str },

    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{provider} API error ({status}): {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// The service reported an error object in a 2xx body.
    #[error("{provider} API error: {message}")]
    Api {
        provider: &'static str,
        message: String,
    },

    /// The body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A service that turns a prompt into text.
///
/// `Ok(None)` means the call succeeded but the response carried no
/// extractable text (e.g. every candidate was filtered).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier used for calls.
    fn model(&self) -> &str;

    /// Provider name for logs.
    fn provider(&self) -> &str;

    /// Make one generation call. No retries.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, LlmError>;
}
