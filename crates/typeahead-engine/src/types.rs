//! Result types returned by the completion engine

use serde::{Deserialize, Serialize};

/// Completions for one prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completions {
    /// The prefix after normalization
    pub prefix: String,
    /// Matching words, ascending
    pub words: Vec<String>,
}

impl Completions {
    pub fn empty(prefix: String) -> Self {
        Self {
            prefix,
            words: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

/// Space usage of a completion corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of complete words
    pub leaf_count: u64,
    /// Characters across all words, markers excluded
    pub leaf_char_total: u64,
    /// Characters across all bare prefix entries
    pub prefix_char_total: u64,
    /// Members in the set when the scan started
    pub total: u64,
}

impl Statistics {
    /// Number of prefix entries seen by the scan
    pub fn prefix_count(&self) -> u64 {
        self.total.saturating_sub(self.leaf_count)
    }

    /// Prefix characters stored per word character; 0.0 for an empty corpus
    pub fn overhead_ratio(&self) -> f64 {
        if self.leaf_char_total == 0 {
            0.0
        } else {
            self.prefix_char_total as f64 / self.leaf_char_total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_completions() {
        let completions = Completions::empty("ca".to_string());
        assert!(completions.is_empty());
        assert_eq!(completions.len(), 0);
        assert_eq!(completions.prefix, "ca");
    }

    #[test]
    fn test_statistics_derived_values() {
        let stats = Statistics {
            leaf_count: 1,
            leaf_char_total: 4,
            prefix_char_total: 6,
            total: 5,
        };
        assert_eq!(stats.prefix_count(), 4);
        assert!((stats.overhead_ratio() - 1.5).abs() < f64::EPSILON);
        assert_eq!(Statistics::default().overhead_ratio(), 0.0);
    }

    #[test]
    fn test_statistics_serialize() {
        let stats = Statistics {
            leaf_count: 2,
            leaf_char_total: 7,
            prefix_char_total: 9,
            total: 8,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["leaf_count"], 2);
        assert_eq!(json["total"], 8);
    }
}
