//! Typeahead Store Layer
//!
//! Ordered-set backends that the completion engine runs on. A store holds any
//! number of named sets; each set keeps string members ordered by
//! `(score, member)`, exactly like a Redis sorted set.
//!
//! ## Features
//!
//! - **In-Memory Store**: Thread-safe sorted sets for testing and embedded use
//! - **Redis Store**: ZADD/ZRANGE-backed sets shared between processes
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Store Layer                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  memory/                    │  redis/                            │
//! │  ─────────                  │  ──────                            │
//! │  InMemoryOrderedSet         │  RedisConnection                   │
//! │                             │  RedisOrderedSet                   │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ implements
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OrderedSetStore                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### In-Memory (Testing/Embedded)
//!
//! ```ignore
//! use typeahead_store::{InMemoryOrderedSet, OrderedSetStore};
//! use std::sync::Arc;
//!
//! let store: Arc<dyn OrderedSetStore> = Arc::new(InMemoryOrderedSet::new());
//! ```
//!
//! ### Redis (Production)
//!
//! ```ignore
//! use typeahead_store::redis::{RedisConnection, RedisOrderedSet};
//! use typeahead_store::RedisConnectionConfig;
//! use std::sync::Arc;
//!
//! let conn = RedisConnection::connect(RedisConnectionConfig::default()).await?;
//! let store: Arc<dyn OrderedSetStore> = Arc::new(RedisOrderedSet::new(Arc::new(conn)));
//! ```

pub mod config;
pub mod error;
#[cfg(feature = "memory")]
pub mod memory;
pub mod store;

// Redis backend for production storage
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use config::RedisConnectionConfig;
pub use error::{Result, StoreError};
#[cfg(feature = "memory")]
pub use memory::InMemoryOrderedSet;
pub use store::OrderedSetStore;

#[cfg(feature = "redis-backend")]
pub use self::redis::{RedisConnection, RedisOrderedSet, SharedConnection};
