//! Word normalization
//!
//! Every word and prefix goes through [`WordNormalizer`] before it touches the
//! store, so the store only ever sees trimmed, lowercased text whose
//! characters all sort after the leaf marker.

use crate::error::{CompleterError, Result};

/// Trims and lowercases raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordNormalizer {
    sentinel: char,
}

impl WordNormalizer {
    /// Create a normalizer that guards the given leaf marker
    pub fn new(sentinel: char) -> Self {
        Self { sentinel }
    }

    /// Normalize `input` into a storable word
    ///
    /// Fails with [`CompleterError::EmptyInput`] when nothing is left after
    /// trimming, and with [`CompleterError::InvalidInput`] when a character
    /// would sort at or before the leaf marker. Such a character would let a
    /// deeper entry sort after the leaf of its own ancestor, which breaks both
    /// the prefix scan and the ancestor climb.
    pub fn normalize(&self, input: &str) -> Result<String> {
        let word = input.trim().to_lowercase();
        if word.is_empty() {
            return Err(CompleterError::EmptyInput);
        }

        if let Some(bad) = word.chars().find(|&c| c <= self.sentinel) {
            return Err(CompleterError::invalid_input(
                input,
                format!(
                    "character {:?} sorts at or before the leaf marker {:?}",
                    bad, self.sentinel
                ),
            ));
        }

        Ok(word)
    }
}
