//! In-Memory Store Implementation
//!
//! Thread-safe sorted sets kept in process memory.
//! Suitable for testing and single-process deployments.

mod ordered_set;

pub use ordered_set::InMemoryOrderedSet;
