//! Static knowledge answering.
//!
//! - [`alias`] - Lower-cases a message and rewrites informal names
//! - [`base`] - Ordered trigger scan over an immutable topic table
//! - [`entry`] - Entry values and their reply rendering
//! - [`campus`] - The CBIT facts, aliases, triggers, and restricted words

pub mod alias;
pub mod base;
pub mod campus;
pub mod entry;
pub mod error;

pub use self::alias::AliasTable;
pub use self::base::KnowledgeBase;
pub use self::entry::KnowledgeValue;
pub use self::error::KnowledgeError;
