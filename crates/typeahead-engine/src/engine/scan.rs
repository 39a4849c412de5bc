//! Forward scans: prefix completion and corpus statistics

use tracing::{debug, trace};

use super::CompletionEngine;
use crate::codec::Entry;
use crate::error::Result;
use crate::types::{Completions, Statistics};

/// Forward pagination over rank windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScanCursor {
    start: u64,
    size: u64,
}

impl ScanCursor {
    fn new(start: u64, size: usize) -> Self {
        Self {
            start,
            size: size.max(1) as u64,
        }
    }

    /// Inclusive last rank of the current window
    fn stop(&self) -> u64 {
        self.start.saturating_add(self.size - 1)
    }

    /// Move past a window that returned `fetched` members; false at the end of the set
    fn advance(&mut self, fetched: usize) -> bool {
        if (fetched as u64) < self.size {
            return false;
        }
        self.start = self.start.saturating_add(self.size);
        true
    }
}

impl CompletionEngine {
    /// Words starting with `input`, ascending, at most `limit` of them
    pub async fn complete(&self, input: &str, limit: usize) -> Result<Completions> {
        let prefix = self.normalizer.normalize(input)?;
        if limit == 0 {
            return Ok(Completions::empty(prefix));
        }

        let Some(rank) = self.store.rank(&self.key, &prefix).await? else {
            // No word extends the prefix; it may still be a word itself
            let exact = self
                .store
                .rank(&self.key, &self.codec.leaf(&prefix))
                .await?
                .is_some();
            let words = if exact { vec![prefix.clone()] } else { Vec::new() };
            return Ok(Completions { prefix, words });
        };

        let mut words = Vec::new();
        let mut cursor = ScanCursor::new(rank, self.config.window);
        'scan: loop {
            let members = self
                .store
                .range_by_rank(&self.key, cursor.start, cursor.stop())
                .await?;
            trace!(
                "completion window {}..={} for {:?}: {} members",
                cursor.start,
                cursor.stop(),
                prefix,
                members.len()
            );

            for member in &members {
                if !member.starts_with(prefix.as_str()) {
                    break 'scan;
                }
                if let Some(word) = self.codec.decode_leaf(member) {
                    words.push(word.to_string());
                    if words.len() >= limit {
                        break 'scan;
                    }
                }
            }
            if !cursor.advance(members.len()) {
                break;
            }
        }

        debug!("{} completions for {:?}", words.len(), prefix);
        Ok(Completions { prefix, words })
    }

    /// Count words and the characters spent on leaves and prefixes
    pub async fn statistics(&self) -> Result<Statistics> {
        let mut stats = Statistics {
            total: self.store.cardinality(&self.key).await?,
            ..Default::default()
        };

        let mut cursor = ScanCursor::new(0, self.config.window);
        loop {
            let members = self
                .store
                .range_by_rank(&self.key, cursor.start, cursor.stop())
                .await?;
            for member in &members {
                match self.codec.classify(member) {
                    Entry::Leaf(word) => {
                        stats.leaf_count += 1;
                        stats.leaf_char_total += word.chars().count() as u64;
                    }
                    Entry::Prefix(prefix) => {
                        stats.prefix_char_total += prefix.chars().count() as u64;
                    }
                }
            }
            if !cursor.advance(members.len()) {
                break;
            }
        }

        Ok(stats)
    }
}
