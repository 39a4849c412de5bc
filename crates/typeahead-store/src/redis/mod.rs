//! Redis Store Implementation
//!
//! Sorted sets stored on a Redis server, shared by every process that
//! points at the same key.
//!
//! ## Usage
//!
//! ```ignore
//! use typeahead_store::redis::{RedisConnection, RedisOrderedSet};
//! use typeahead_store::RedisConnectionConfig;
//! use std::sync::Arc;
//!
//! let conn = Arc::new(RedisConnection::connect(RedisConnectionConfig::default()).await?);
//! let store = RedisOrderedSet::new(conn);
//! ```

pub mod connection;
pub mod ordered_set;

pub use connection::{RedisConnection, SharedConnection};
pub use ordered_set::RedisOrderedSet;
