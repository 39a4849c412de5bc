//! In-Memory Ordered Set Implementation
//!
//! Memory backend for tests and embedded use

use async_trait::async_trait;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::Range;
use tracing::debug;

use crate::{OrderedSetStore, Result, StoreError};

/// One named sorted set
///
/// `ordered` is kept sorted by `(score, member)`; `scores` indexes it by member.
#[derive(Debug, Default)]
struct SortedSet {
    scores: HashMap<String, f64>,
    ordered: Vec<(f64, String)>,
}

impl SortedSet {
    fn search(&self, score: f64, member: &str) -> std::result::Result<usize, usize> {
        self.ordered.binary_search_by(|(s, m)| {
            s.total_cmp(&score).then_with(|| m.as_str().cmp(member))
        })
    }

    /// Returns true when the member is new; an existing member only moves
    fn insert(&mut self, score: f64, member: &str) -> bool {
        let previous = self.scores.get(member).copied();
        match previous {
            Some(current) if current.total_cmp(&score) == Ordering::Equal => return false,
            Some(current) => {
                if let Ok(index) = self.search(current, member) {
                    self.ordered.remove(index);
                }
            }
            None => {}
        }

        let index = self.search(score, member).unwrap_or_else(|index| index);
        self.ordered.insert(index, (score, member.to_string()));
        self.scores.insert(member.to_string(), score);
        previous.is_none()
    }

    fn remove(&mut self, member: &str) -> bool {
        let Some(score) = self.scores.remove(member) else {
            return false;
        };
        if let Ok(index) = self.search(score, member) {
            self.ordered.remove(index);
        }
        true
    }

    fn rank(&self, member: &str) -> Option<u64> {
        let score = *self.scores.get(member)?;
        self.search(score, member).ok().map(|index| index as u64)
    }

    /// Clip an inclusive rank range to the set
    fn clip(&self, start: u64, stop: u64) -> Option<Range<usize>> {
        let len = self.ordered.len() as u64;
        if start > stop || start >= len {
            return None;
        }
        Some(start as usize..stop.min(len - 1) as usize + 1)
    }

    fn range(&self, start: u64, stop: u64) -> Vec<String> {
        self.clip(start, stop)
            .map(|range| {
                self.ordered[range]
                    .iter()
                    .map(|(_, member)| member.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn remove_range(&mut self, start: u64, stop: u64) -> u64 {
        let Some(range) = self.clip(start, stop) else {
            return 0;
        };
        let mut removed = 0;
        for (_, member) in self.ordered.drain(range) {
            self.scores.remove(&member);
            removed += 1;
        }
        removed
    }

    fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Thread-safe in-memory implementation of OrderedSetStore
///
/// Uses RwLock for concurrent read access with exclusive write access.
/// Rank lookups are logarithmic; insertions and removals shift the backing
/// vector, which is fine for test corpora and modest embedded ones.
#[derive(Debug, Default)]
pub struct InMemoryOrderedSet {
    sets: RwLock<HashMap<String, SortedSet>>,
}

impl InMemoryOrderedSet {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            sets: RwLock::new(HashMap::new()),
        }
    }

    /// Snapshot of a set's members in rank order (for testing)
    pub fn members(&self, key: &str) -> Vec<String> {
        self.sets
            .read()
            .get(key)
            .map(|set| set.ordered.iter().map(|(_, m)| m.clone()).collect())
            .unwrap_or_default()
    }

    /// Number of non-empty sets held (for testing)
    pub fn key_count(&self) -> usize {
        self.sets.read().len()
    }

    /// Drop every set (for testing)
    pub fn clear(&self) {
        self.sets.write().clear();
    }

    /// Apply a mutation and drop the set if it ends up empty
    fn mutate<T>(&self, key: &str, op: impl FnOnce(&mut SortedSet) -> T) -> Option<T> {
        let mut sets = self.sets.write();
        let set = sets.get_mut(key)?;
        let outcome = op(set);
        if set.is_empty() {
            sets.remove(key);
        }
        Some(outcome)
    }
}

#[async_trait]
impl OrderedSetStore for InMemoryOrderedSet {
    async fn insert(&self, key: &str, score: f64, member: &str) -> Result<u64> {
        if score.is_nan() {
            return Err(StoreError::command("ZADD", "score is not a valid float"));
        }
        let mut sets = self.sets.write();
        let added = sets.entry(key.to_string()).or_default().insert(score, member);
        Ok(u64::from(added))
    }

    async fn remove(&self, key: &str, member: &str) -> Result<u64> {
        let removed = self.mutate(key, |set| set.remove(member)).unwrap_or(false);
        Ok(u64::from(removed))
    }

    async fn rank(&self, key: &str, member: &str) -> Result<Option<u64>> {
        let sets = self.sets.read();
        Ok(sets.get(key).and_then(|set| set.rank(member)))
    }

    async fn range_by_rank(&self, key: &str, start: u64, stop: u64) -> Result<Vec<String>> {
        let sets = self.sets.read();
        Ok(sets
            .get(key)
            .map(|set| set.range(start, stop))
            .unwrap_or_default())
    }

    async fn remove_range_by_rank(&self, key: &str, start: u64, stop: u64) -> Result<u64> {
        Ok(self
            .mutate(key, |set| set.remove_range(start, stop))
            .unwrap_or(0))
    }

    async fn cardinality(&self, key: &str) -> Result<u64> {
        let sets = self.sets.read();
        Ok(sets.get(key).map_or(0, |set| set.ordered.len() as u64))
    }

    async fn delete_key(&self, key: &str) -> Result<u64> {
        let deleted = self.sets.write().remove(key).is_some();
        debug!("Deleted in-memory set {} (existed: {})", key, deleted);
        Ok(u64::from(deleted))
    }
}
