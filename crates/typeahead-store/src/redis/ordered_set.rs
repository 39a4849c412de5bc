//! Redis Ordered Set Implementation
//!
//! Each trait method is exactly one Redis command.

use async_trait::async_trait;
use tracing::trace;

use super::connection::SharedConnection;
use crate::{OrderedSetStore, Result};

/// Redis implementation of OrderedSetStore
pub struct RedisOrderedSet {
    connection: SharedConnection,
}

impl RedisOrderedSet {
    /// Create a store over a shared connection
    pub fn new(connection: SharedConnection) -> Self {
        Self { connection }
    }

    /// The connection commands are issued on
    pub fn connection(&self) -> &SharedConnection {
        &self.connection
    }
}

/// Redis rank arguments are signed; negative values would count from the tail
fn rank_arg(rank: u64) -> isize {
    isize::try_from(rank).unwrap_or(isize::MAX)
}

#[async_trait]
impl OrderedSetStore for RedisOrderedSet {
    async fn insert(&self, key: &str, score: f64, member: &str) -> Result<u64> {
        let mut con = self.connection.handle();
        let added: u64 = redis::cmd("ZADD")
            .arg(key)
            .arg(score)
            .arg(member)
            .query_async(&mut con)
            .await?;
        Ok(added)
    }

    async fn remove(&self, key: &str, member: &str) -> Result<u64> {
        let mut con = self.connection.handle();
        let removed: u64 = redis::cmd("ZREM")
            .arg(key)
            .arg(member)
            .query_async(&mut con)
            .await?;
        Ok(removed)
    }

    async fn rank(&self, key: &str, member: &str) -> Result<Option<u64>> {
        let mut con = self.connection.handle();
        let rank: Option<u64> = redis::cmd("ZRANK")
            .arg(key)
            .arg(member)
            .query_async(&mut con)
            .await?;
        Ok(rank)
    }

    async fn range_by_rank(&self, key: &str, start: u64, stop: u64) -> Result<Vec<String>> {
        if start > stop {
            return Ok(Vec::new());
        }
        let mut con = self.connection.handle();
        let members: Vec<String> = redis::cmd("ZRANGE")
            .arg(key)
            .arg(rank_arg(start))
            .arg(rank_arg(stop))
            .query_async(&mut con)
            .await?;
        trace!("ZRANGE {} {} {} -> {} members", key, start, stop, members.len());
        Ok(members)
    }

    async fn remove_range_by_rank(&self, key: &str, start: u64, stop: u64) -> Result<u64> {
        if start > stop {
            return Ok(0);
        }
        let mut con = self.connection.handle();
        let removed: u64 = redis::cmd("ZREMRANGEBYRANK")
            .arg(key)
            .arg(rank_arg(start))
            .arg(rank_arg(stop))
            .query_async(&mut con)
            .await?;
        Ok(removed)
    }

    async fn cardinality(&self, key: &str) -> Result<u64> {
        let mut con = self.connection.handle();
        let count: u64 = redis::cmd("ZCARD").arg(key).query_async(&mut con).await?;
        Ok(count)
    }

    async fn delete_key(&self, key: &str) -> Result<u64> {
        let mut con = self.connection.handle();
        let deleted: u64 = redis::cmd("DEL").arg(key).query_async(&mut con).await?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redis::RedisConnection;
    use crate::RedisConnectionConfig;
    use std::sync::Arc;

    #[test]
    fn test_rank_arg_saturates() {
        assert_eq!(rank_arg(0), 0);
        assert_eq!(rank_arg(49), 49);
        assert_eq!(rank_arg(u64::MAX), isize::MAX);
    }

    #[tokio::test]
    #[ignore = "Requires a running Redis server (TYPEAHEAD_REDIS_URL)"]
    async fn redis_sorted_set_smoke() {
        let config = RedisConnectionConfig {
            url: std::env::var("TYPEAHEAD_REDIS_URL").ok(),
            ..Default::default()
        };
        let conn = Arc::new(RedisConnection::connect(config).await.unwrap());
        let store = RedisOrderedSet::new(conn);
        let key = "typeahead-smoke:completer";

        store.delete_key(key).await.unwrap();
        assert_eq!(store.insert(key, 0.0, "cat*").await.unwrap(), 1);
        assert_eq!(store.insert(key, 0.0, "ca").await.unwrap(), 1);
        assert_eq!(store.insert(key, 0.0, "ca").await.unwrap(), 0);
        assert_eq!(store.rank(key, "cat*").await.unwrap(), Some(1));
        assert_eq!(store.rank(key, "dog*").await.unwrap(), None);
        assert_eq!(store.range_by_rank(key, 0, 10).await.unwrap(), vec!["ca", "cat*"]);
        assert_eq!(store.remove_range_by_rank(key, 0, 0).await.unwrap(), 1);
        assert_eq!(store.cardinality(key).await.unwrap(), 1);
        assert_eq!(store.remove(key, "cat*").await.unwrap(), 1);
        assert_eq!(store.delete_key(key).await.unwrap(), 0);
    }
}
