//! Chat module — POST /chat message handling.
//!
//! ```text
//! User message
//!   → Normalize (lower-case, alias rewrite)
//!   → Knowledge lookup (first declared trigger wins)
//!   → Restricted-topic deflection (whole-word match)
//!   → Generative fallback (original text, one call)
//!   → { "response": ... }
//! ```

pub mod dispatcher;
pub mod fallback;
pub mod handler;

pub use dispatcher::{Dispatcher, DispatcherError, Reply, ReplySource};
pub use fallback::{FallbackOutcome, GenerativeFallback};
pub use handler::{chat_handler, ChatRequest, ChatResponse};
