//! Generative fallback: the last stage, used when no static rule matched.
//!
//! Every failure collapses into one of two fixed replies. The underlying
//! error is logged here and goes no further.

use std::sync::Arc;

use crate::llms::base_llm::TextGenerator;

/// Reply when the service answered without any text.
pub const NO_TEXT_REPLY: &str = "Sorry, I couldn’t generate a proper response.";

/// Reply when the service call failed.
pub const ERROR_REPLY: &str = "⚠️ Error processing your request. Please try again later.";

/// Outcome of one fallback call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackOutcome {
    /// Service text, trimmed.
    Generated(String),
    /// Call succeeded but carried no text.
    Empty,
    /// Call failed; the error was logged.
    Failed,
}

impl FallbackOutcome {
    pub fn into_reply(self) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Empty => NO_TEXT_REPLY.to_string(),
            Self::Failed => ERROR_REPLY.to_string(),
        }
    }
}

/// Wraps a [`TextGenerator`] and turns its result into a user-facing reply.
#[derive(Clone)]
pub struct GenerativeFallback {
    generator: Arc<dyn TextGenerator>,
}

impl GenerativeFallback {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Single best-effort call with the message exactly as the user sent it.
    pub async fn generate(&self, original: &str) -> FallbackOutcome {
        match self.generator.generate(original).await {
            Ok(Some(text)) => FallbackOutcome::Generated(text.trim().to_string()),
            Ok(None) => {
                tracing::warn!(
                    provider = self.generator.provider(),
                    "generative service returned no text"
                );
                FallbackOutcome::Empty
            }
            Err(e) => {
                tracing::error!(
                    provider = self.generator.provider(),
                    model = self.generator.model(),
                    error = %e,
                    "generative service call failed"
                );
                FallbackOutcome::Failed
            }
        }
    }
}

impl std::fmt::Debug for GenerativeFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerativeFallback")
            .field("provider", &self.generator.provider())
            .field("model", &self.generator.model())
            .finish()
    }
}
