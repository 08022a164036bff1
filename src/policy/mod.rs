//! # Topic Policy
//!
//! Deterministic deflection of topics the relay must not answer from its
//! own data. Checked after the knowledge lookup misses and before any call
//! to the generative service, so a restricted question never reaches it.
//!
//! ```text
//! "what is the hostel fee?"
//!   → knowledge lookup: no trigger
//!   → RestrictedTopics.is_restricted() → true ("hostel")
//!   → reply with the fixed notice
//! ```

pub mod restricted;

use thiserror::Error;

pub use restricted::RestrictedTopics;

/// Errors building a topic policy.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The compiled word pattern was rejected by the regex engine.
    #[error("Invalid restricted topic pattern: {0}")]
    Pattern(#[from] regex::Error),
}
