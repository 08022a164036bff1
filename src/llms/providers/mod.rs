//! LLM provider implementations.
//!
//! Each provider implements [`TextGenerator`](crate::llms::base_llm::TextGenerator)
//! and handles authentication, request formatting, and response parsing
//! specific to its service.
//!
//! # Available Providers
//!
//! | Provider | Module |
//! |----------|--------|
//! | Gemini | [`gemini`] |

pub mod gemini;
