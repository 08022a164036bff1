//! Knowledge table construction errors.

use thiserror::Error;

/// Errors raised while assembling a knowledge base at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnowledgeError {
    /// A trigger routes to an entry key that does not exist.
    #[error("trigger '{trigger}' routes to unknown entry '{key}'")]
    UnknownEntry { trigger: String, key: String },

    /// The same entry key was declared twice.
    #[error("duplicate knowledge entry: {0}")]
    DuplicateEntry(String),

    /// A trigger was empty and would match every message.
    #[error("empty trigger for entry '{0}'")]
    EmptyTrigger(String),
}
