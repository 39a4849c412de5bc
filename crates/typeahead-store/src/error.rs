//! Store Layer Error Types

use thiserror::Error;

/// Store result type
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while talking to an ordered-set store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection could not be established or was lost
    #[error("Connection error: {0}")]
    Connection(String),

    /// A store command was rejected
    #[error("Command {command} failed: {message}")]
    Command {
        command: &'static str,
        message: String,
    },

    /// Error reported by the Redis client
    #[cfg(feature = "redis-backend")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

impl StoreError {
    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a command error
    pub fn command(command: &'static str, message: impl Into<String>) -> Self {
        Self::Command {
            command,
            message: message.into(),
        }
    }
}
