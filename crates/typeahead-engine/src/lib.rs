//! Typeahead Completion Engine
//!
//! Prefix completion over a flat ordered set. Words are added once, completed
//! by prefix in ascending order, and removed again without disturbing the
//! entries other words still depend on.
//!
//! ## Storage Layout
//!
//! Every member is stored at score 0, so the set orders purely by bytes. A word
//! contributes a leaf (`word` + sentinel) and one bare entry per strict prefix:
//!
//! ```text
//! add("cat"), add("cats")
//!
//!   rank  member
//!   ────  ──────
//!   0     ""
//!   1     "c"
//!   2     "ca"
//!   3     "cat"
//!   4     "cat*"     <- leaf
//!   5     "cats*"    <- leaf
//! ```
//!
//! Completing `"ca"` starts at the rank of `"ca"` and reads forward while
//! members still start with `"ca"`, collecting leaves.
//!
//! ## Usage
//!
//! ```ignore
//! use typeahead_engine::CompletionEngine;
//!
//! let engine = CompletionEngine::in_memory()?;
//! engine.add_many(["car", "cart", "cat"]).await?;
//!
//! let completions = engine.complete("car", 10).await?;
//! assert_eq!(completions.words, vec!["car", "cart"]);
//!
//! engine.remove("cart").await?;
//! ```

pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod types;

pub use codec::{Entry, EntryCodec};
pub use config::{CompleterConfig, ConfigManager};
pub use engine::CompletionEngine;
pub use error::{CompleterError, Result};
pub use normalize::WordNormalizer;
pub use types::{Completions, Statistics};

// Re-export the store layer so callers can plug in a backend
pub use typeahead_store::{InMemoryOrderedSet, OrderedSetStore, StoreError};
