//! Integration tests for word removal
//!
//! Covers the ancestor climb over corpora larger than one window, the
//! neighbours it must leave alone, and how removal behaves when the store
//! fails part way through.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use typeahead_engine::{CompleterConfig, CompleterError, CompletionEngine};
use typeahead_store::{InMemoryOrderedSet, OrderedSetStore, StoreError};

const KEY: &str = "completer";

fn engine_on(store: Arc<dyn OrderedSetStore>) -> CompletionEngine {
    CompletionEngine::new(store, CompleterConfig::default()).unwrap()
}

/// In-memory store whose range deletion can be switched off
#[derive(Default)]
struct FlakyStore {
    inner: InMemoryOrderedSet,
    fail_range_removal: AtomicBool,
}

#[async_trait]
impl OrderedSetStore for FlakyStore {
    async fn insert(&self, key: &str, score: f64, member: &str) -> typeahead_store::Result<u64> {
        self.inner.insert(key, score, member).await
    }

    async fn remove(&self, key: &str, member: &str) -> typeahead_store::Result<u64> {
        self.inner.remove(key, member).await
    }

    async fn rank(&self, key: &str, member: &str) -> typeahead_store::Result<Option<u64>> {
        self.inner.rank(key, member).await
    }

    async fn range_by_rank(
        &self,
        key: &str,
        start: u64,
        stop: u64,
    ) -> typeahead_store::Result<Vec<String>> {
        self.inner.range_by_rank(key, start, stop).await
    }

    async fn remove_range_by_rank(
        &self,
        key: &str,
        start: u64,
        stop: u64,
    ) -> typeahead_store::Result<u64> {
        if self.fail_range_removal.load(Ordering::SeqCst) {
            return Err(StoreError::connection("connection reset by peer"));
        }
        self.inner.remove_range_by_rank(key, start, stop).await
    }

    async fn cardinality(&self, key: &str) -> typeahead_store::Result<u64> {
        self.inner.cardinality(key).await
    }

    async fn delete_key(&self, key: &str) -> typeahead_store::Result<u64> {
        self.inner.delete_key(key).await
    }
}

#[tokio::test]
async fn test_long_word_climb_beyond_default_window() {
    let store = Arc::new(InMemoryOrderedSet::new());
    let engine = engine_on(store.clone());

    // 120 prefixes sit between the leaf and the previous word's leaf
    let long_word = format!("b{}", "x".repeat(119));
    engine.add("a").await.unwrap();
    engine.add(&long_word).await.unwrap();
    engine.add("c").await.unwrap();
    let with_long = store.cardinality(KEY).await.unwrap();
    assert!(with_long > 120);

    assert!(engine.remove(&long_word).await.unwrap());
    assert_eq!(store.members(KEY), vec!["", "a*", "c*"]);
}

#[tokio::test]
async fn test_large_corpus_survives_removals() {
    let store = Arc::new(InMemoryOrderedSet::new());
    let engine = engine_on(store.clone());

    let words: Vec<String> = (0..200).map(|i| format!("word{i:03}")).collect();
    engine.add_many(&words).await.unwrap();

    for word in words.iter().step_by(2) {
        assert!(engine.remove(word).await.unwrap());
    }

    let survivors: Vec<String> = words.iter().skip(1).step_by(2).cloned().collect();
    let completions = engine.complete("word", 1000).await.unwrap();
    assert_eq!(completions.words, survivors);

    let stats = engine.statistics().await.unwrap();
    assert_eq!(stats.leaf_count, 100);
    assert_eq!(stats.total, store.cardinality(KEY).await.unwrap());
}

#[tokio::test]
async fn test_removing_middle_word_keeps_neighbours() {
    let store = Arc::new(InMemoryOrderedSet::new());
    let engine = engine_on(store.clone());
    engine.add_many(["tea", "team", "tear", "ten"]).await.unwrap();

    assert!(engine.remove("team").await.unwrap());
    assert_eq!(
        engine.complete("te", 10).await.unwrap().words,
        vec!["tea", "tear", "ten"]
    );
    assert!(engine.remove("tear").await.unwrap());
    assert_eq!(engine.complete("tea", 10).await.unwrap().words, vec!["tea"]);
    // Only "tea" and "ten" remain: "tea" no longer has a bare entry
    assert_eq!(store.rank(KEY, "tea").await.unwrap(), None);
}

#[tokio::test]
async fn test_failed_climb_leaves_word_removable() {
    let store = Arc::new(FlakyStore::default());
    let engine = engine_on(store.clone());
    engine.add("cat").await.unwrap();

    store.fail_range_removal.store(true, Ordering::SeqCst);
    let err = engine.remove("cat").await.unwrap_err();
    assert!(matches!(err, CompleterError::Store(StoreError::Connection(_))));
    // The leaf goes last, so the word is still there
    assert_eq!(engine.complete("ca", 10).await.unwrap().words, vec!["cat"]);

    store.fail_range_removal.store(false, Ordering::SeqCst);
    assert!(engine.remove("cat").await.unwrap());
    assert_eq!(store.inner.key_count(), 0);
}

#[tokio::test]
async fn test_remove_without_serialized_mutations() {
    let store = Arc::new(InMemoryOrderedSet::new());
    let config = CompleterConfig {
        serialize_mutations: false,
        ..Default::default()
    };
    let engine = CompletionEngine::new(store.clone(), config).unwrap();

    engine.add_many(["cat", "cb"]).await.unwrap();
    assert!(engine.remove("cat").await.unwrap());
    assert_eq!(engine.complete("c", 10).await.unwrap().words, vec!["cb"]);
    assert_eq!(store.members(KEY), vec!["", "c", "cb*"]);
}
