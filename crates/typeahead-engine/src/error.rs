//! Completion engine error types

use thiserror::Error;
use typeahead_store::StoreError;

/// Completion result type
pub type Result<T> = std::result::Result<T, CompleterError>;

/// Errors surfaced by the completion engine
#[derive(Debug, Error)]
pub enum CompleterError {
    /// Input text that cannot be stored without breaking the set's ordering
    #[error("Invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: String },

    /// Input that is blank once trimmed
    #[error("Input is empty after normalization")]
    EmptyInput,

    /// Failure reported by the ordered-set store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration rejected at load or construction time
    #[error("Configuration error: {0}")]
    Config(String),

    /// Some words of a batch failed; the rest were added and stay added
    #[error("{failed} word(s) failed to add ({} added): {source}", .added.len())]
    PartialAdd {
        added: Vec<String>,
        failed: usize,
        #[source]
        source: Box<CompleterError>,
    },
}

impl CompleterError {
    /// Create an invalid input error
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for blank input, which callers commonly treat as "nothing to do"
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

impl From<config::ConfigError> for CompleterError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
