//! Ordered-set store interface

use async_trait::async_trait;

use crate::Result;

/// A store of named sorted sets
///
/// Members are ordered ascending by score, then by the bytes of the member.
/// Ranks are zero-based positions in that order. Range bounds are inclusive
/// and clipped to the set, so out-of-range requests yield empty results
/// rather than errors. A set that becomes empty ceases to exist.
#[async_trait]
pub trait OrderedSetStore: Send + Sync {
    /// Add `member` with `score`; returns the number of new members (0 or 1)
    async fn insert(&self, key: &str, score: f64, member: &str) -> Result<u64>;

    /// Remove `member`; returns the number of members removed (0 or 1)
    async fn remove(&self, key: &str, member: &str) -> Result<u64>;

    /// Ascending rank of `member`, if present
    async fn rank(&self, key: &str, member: &str) -> Result<Option<u64>>;

    /// Members with ranks in `start..=stop`, ascending
    async fn range_by_rank(&self, key: &str, start: u64, stop: u64) -> Result<Vec<String>>;

    /// Remove members with ranks in `start..=stop`; returns how many went
    async fn remove_range_by_rank(&self, key: &str, start: u64, stop: u64) -> Result<u64>;

    /// Number of members in the set
    async fn cardinality(&self, key: &str) -> Result<u64>;

    /// Delete the whole set; returns the number of keys deleted (0 or 1)
    async fn delete_key(&self, key: &str) -> Result<u64>;
}
