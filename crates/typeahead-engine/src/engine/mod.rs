//! Completion engine
//!
//! [`CompletionEngine`] keeps a prefix tree inside one sorted set. Adding a
//! word stores its leaf and every strict prefix; completing walks forward from
//! the prefix's own entry; removing climbs backward from the leaf deleting the
//! ancestors nobody else needs.
//!
//! All store access is paginated in windows of `config.window` members.

mod climb;
mod scan;

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};
use typeahead_store::{InMemoryOrderedSet, OrderedSetStore};

use crate::codec::EntryCodec;
use crate::config::CompleterConfig;
use crate::error::{CompleterError, Result};
use crate::normalize::WordNormalizer;

/// Every member is stored at this score so the order is purely lexicographic
const ENTRY_SCORE: f64 = 0.0;

/// Typeahead over an ordered-set store
pub struct CompletionEngine {
    store: Arc<dyn OrderedSetStore>,
    config: CompleterConfig,
    key: String,
    normalizer: WordNormalizer,
    codec: EntryCodec,
    /// Held by add/remove/flush when `serialize_mutations` is on
    mutations: Mutex<()>,
}

impl CompletionEngine {
    /// Create an engine over `store`
    ///
    /// Fails if the configuration would break the set's ordering guarantees.
    pub fn new(store: Arc<dyn OrderedSetStore>, config: CompleterConfig) -> Result<Self> {
        config.validate()?;
        let key = config.key();
        debug!("Completion engine on key {} (window {})", key, config.window);

        Ok(Self {
            store,
            key,
            normalizer: WordNormalizer::new(config.sentinel),
            codec: EntryCodec::new(config.sentinel),
            config,
            mutations: Mutex::new(()),
        })
    }

    /// Engine over a fresh in-memory store with default settings
    pub fn in_memory() -> Result<Self> {
        Self::new(Arc::new(InMemoryOrderedSet::new()), CompleterConfig::default())
    }

    /// Connect to the Redis server named in `config.redis`
    #[cfg(feature = "redis-backend")]
    pub async fn connect(config: CompleterConfig) -> Result<Self> {
        use typeahead_store::{RedisConnection, RedisOrderedSet};

        let connection = RedisConnection::connect(config.redis.clone()).await?;
        let store = RedisOrderedSet::new(Arc::new(connection));
        Self::new(Arc::new(store), config)
    }

    /// The store this engine writes to
    pub fn store(&self) -> &Arc<dyn OrderedSetStore> {
        &self.store
    }

    /// Name of the backing sorted set
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn config(&self) -> &CompleterConfig {
        &self.config
    }

    async fn lock_mutations(&self) -> Option<MutexGuard<'_, ()>> {
        if self.config.serialize_mutations {
            Some(self.mutations.lock().await)
        } else {
            None
        }
    }

    /// Learn a word
    ///
    /// Returns the normalized word when it was new, `None` when it was
    /// already known.
    pub async fn add(&self, input: &str) -> Result<Option<String>> {
        let word = self.normalizer.normalize(input)?;
        let _guard = self.lock_mutations().await;

        let leaf = self.codec.leaf(&word);
        if self.store.insert(&self.key, ENTRY_SCORE, &leaf).await? == 0 {
            debug!("{} already known", word);
            return Ok(None);
        }

        // Prefix inserts are idempotent and commute, so fire them together
        let inserts = self
            .codec
            .prefixes(&word)
            .map(|prefix| self.store.insert(&self.key, ENTRY_SCORE, prefix));
        if let Some(err) = join_all(inserts).await.into_iter().find_map(|r| r.err()) {
            return Err(err.into());
        }

        debug!(word = %word, "added completion");
        Ok(Some(word))
    }

    /// Learn several words concurrently
    ///
    /// Returns the newly added words in input order. When any word fails, the
    /// others still settle and stay added; the error carries them.
    pub async fn add_many<I, T>(&self, words: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let words: Vec<T> = words.into_iter().collect();
        let outcomes = join_all(words.iter().map(|word| self.add(word.as_ref()))).await;

        let mut added = Vec::new();
        let mut failed = 0;
        let mut first_error = None;
        for outcome in outcomes {
            match outcome {
                Ok(Some(word)) => added.push(word),
                Ok(None) => {}
                Err(err) => {
                    failed += 1;
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            None => Ok(added),
            Some(source) => {
                warn!("{} of {} words failed to add: {}", failed, words.len(), source);
                Err(CompleterError::PartialAdd {
                    added,
                    failed,
                    source: Box::new(source),
                })
            }
        }
    }

    /// Delete the whole corpus; returns the number of keys deleted (0 or 1)
    pub async fn flush(&self) -> Result<u64> {
        let _guard = self.lock_mutations().await;
        let deleted = self.store.delete_key(&self.key).await?;
        debug!("Flushed {} ({} key deleted)", self.key, deleted);
        Ok(deleted)
    }
}
