//! Redis Connection Management
//!
//! Wraps a multiplexed async connection. A connection is either opened from
//! [`RedisConnectionConfig`] or adopted from a handle the caller already holds.

use std::sync::Arc;

use redis::aio::MultiplexedConnection;
use tracing::{debug, info};

use crate::{RedisConnectionConfig, Result, StoreError};

/// Redis connection wrapper
///
/// The multiplexed handle is cheap to clone; every command clones it so
/// concurrent callers pipeline over the same socket.
pub struct RedisConnection {
    handle: MultiplexedConnection,
    config: Option<RedisConnectionConfig>,
}

impl RedisConnection {
    /// Open a connection using host/port/db settings
    pub async fn connect(config: RedisConnectionConfig) -> Result<Self> {
        let url = config.connection_url();
        info!("Connecting to Redis at {}:{} (db {})", config.host, config.port, config.db);

        let client = redis::Client::open(url.as_str())
            .map_err(|e| StoreError::connection(e.to_string()))?;
        let handle = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;

        debug!("Connected to Redis db={}", config.db);

        Ok(Self {
            handle,
            config: Some(config),
        })
    }

    /// Adopt a connection handle created elsewhere
    ///
    /// Database selection is the caller's responsibility in this case.
    pub fn from_handle(handle: MultiplexedConnection) -> Self {
        Self {
            handle,
            config: None,
        }
    }

    /// Settings this connection was opened with, if it was opened here
    pub fn config(&self) -> Option<&RedisConnectionConfig> {
        self.config.as_ref()
    }

    /// A handle for issuing commands
    pub fn handle(&self) -> MultiplexedConnection {
        self.handle.clone()
    }
}

/// Thread-safe shared connection
pub type SharedConnection = Arc<RedisConnection>;
