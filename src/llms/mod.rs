//! LLM access for the generative fallback.
//!
//! - [`base_llm`] - The [`TextGenerator`] trait and [`LlmError`]
//! - [`providers`] - Concrete service clients (Gemini)

pub mod base_llm;
pub mod providers;

pub use base_llm::{LlmError, TextGenerator};
pub use providers::gemini::GeminiCompletion;
