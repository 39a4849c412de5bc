//! Property-based tests for the completion engine
//!
//! Every property drives the engine with small windows so that scans and
//! climbs cross page boundaries, then compares against a pagination-free
//! reference model: a plain ordered set of the words that should be present.

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;
use typeahead_engine::{CompleterConfig, CompletionEngine, EntryCodec};
use typeahead_store::InMemoryOrderedSet;

const KEY: &str = "completer";

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(String),
}

/// Short words over a tiny alphabet, so words collide and share prefixes often
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-c]{1,4}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => word_strategy().prop_map(Op::Add),
        2 => word_strategy().prop_map(Op::Remove),
    ]
}

fn engine(window: usize) -> (CompletionEngine, Arc<InMemoryOrderedSet>) {
    let store = Arc::new(InMemoryOrderedSet::new());
    let config = CompleterConfig::default().with_window(window);
    let engine = CompletionEngine::new(store.clone(), config).expect("valid config");
    (engine, store)
}

/// Members the set must hold for exactly `words`
fn expected_members(words: &BTreeSet<String>) -> Vec<String> {
    let codec = EntryCodec::new('*');
    let mut members = BTreeSet::new();
    for word in words {
        members.extend(codec.prefixes(word).map(str::to_string));
        members.insert(codec.leaf(word));
    }
    members.into_iter().collect()
}

/// Property 1: Set Equivalence
/// Any add/remove sequence leaves the set equal to the set produced by adding
/// only the surviving words
proptest! {
    #[test]
    fn prop_set_matches_surviving_words(
        ops in prop::collection::vec(op_strategy(), 1..40),
        window in 1usize..5,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let (engine, store) = engine(window);
            let mut model = BTreeSet::new();

            for op in &ops {
                match op {
                    Op::Add(word) => {
                        let added = engine.add(word).await.unwrap();
                        assert_eq!(added.is_some(), model.insert(word.clone()), "add {word}");
                    }
                    Op::Remove(word) => {
                        let removed = engine.remove(word).await.unwrap();
                        assert_eq!(removed, model.remove(word), "remove {word}");
                    }
                }
                assert_eq!(store.members(KEY), expected_members(&model), "after {op:?}");
            }
        });
    }
}

/// Property 2: Completion Correctness
/// Completions are the model's words with the prefix, ascending, truncated to
/// the limit
proptest! {
    #[test]
    fn prop_complete_matches_model(
        words in prop::collection::btree_set(word_strategy(), 0..25),
        removed in prop::collection::vec(word_strategy(), 0..10),
        prefix in "[a-c]{1,3}",
        limit in 1usize..8,
        window in 1usize..5,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let (engine, _) = engine(window);
            let mut model = words.clone();
            engine.add_many(&words).await.unwrap();
            for word in &removed {
                engine.remove(word).await.unwrap();
                model.remove(word);
            }

            let completions = engine.complete(&prefix, limit).await.unwrap();
            let expected: Vec<String> = model
                .iter()
                .filter(|word| word.starts_with(prefix.as_str()))
                .take(limit)
                .cloned()
                .collect();
            assert_eq!(completions.words, expected);
            assert!(completions.words.windows(2).all(|pair| pair[0] < pair[1]));
        });
    }
}

/// Property 3: Statistics Consistency
/// Statistics agree with the members actually stored
proptest! {
    #[test]
    fn prop_statistics_match_members(
        words in prop::collection::btree_set(word_strategy(), 0..25),
        window in 1usize..5,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let (engine, store) = engine(window);
            engine.add_many(&words).await.unwrap();

            let stats = engine.statistics().await.unwrap();
            let members = store.members(KEY);
            assert_eq!(stats.total, members.len() as u64);
            assert_eq!(stats.leaf_count, words.len() as u64);
            assert_eq!(
                stats.leaf_char_total,
                words.iter().map(|word| word.len() as u64).sum::<u64>()
            );
            let prefix_char_total: u64 = expected_members(&words)
                .iter()
                .filter(|member| !member.ends_with('*'))
                .map(|member| member.chars().count() as u64)
                .sum();
            assert_eq!(stats.prefix_char_total, prefix_char_total);
            assert_eq!(stats.prefix_count(), stats.total - stats.leaf_count);
        });
    }
}

/// Property 4: Orphan Cleanup
/// Removing every word, in any order, empties the set
proptest! {
    #[test]
    fn prop_removing_everything_empties_the_set(
        words in prop::collection::vec(word_strategy(), 1..20),
        window in 1usize..5,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let (engine, store) = engine(window);
            engine.add_many(&words).await.unwrap();

            let mut order = words.clone();
            order.reverse();
            for word in &order {
                engine.remove(word).await.unwrap();
            }
            assert_eq!(store.key_count(), 0);
            assert_eq!(engine.statistics().await.unwrap().total, 0);
        });
    }
}
