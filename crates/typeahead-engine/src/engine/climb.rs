//! Word removal and the ancestor climb
//!
//! Removing a word deletes its leaf and every ancestor prefix that no other
//! word still needs. Those ancestors are found by scanning backward from the
//! leaf: everything between the leaf and the nearest entry that belongs to
//! another word is an ancestor of the removed word alone.

use tracing::{debug, trace};

use super::CompletionEngine;
use crate::codec::common_prefix_len;
use crate::error::Result;

/// Inclusive rank window that slides from the leaf toward rank 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClimbWindow {
    start: u64,
    stop: u64,
    size: u64,
}

impl ClimbWindow {
    /// Window ending just below `leaf_rank`; `None` when the leaf is first
    fn below(leaf_rank: u64, size: usize) -> Option<Self> {
        let stop = leaf_rank.checked_sub(1)?;
        let size = size.max(1) as u64;
        Some(Self {
            start: stop.saturating_sub(size - 1),
            stop,
            size,
        })
    }

    /// Step one window toward rank 0; false once rank 0 has been covered
    fn slide(&mut self) -> bool {
        if self.start == 0 {
            return false;
        }
        self.stop = self.start - 1;
        self.start = self.stop.saturating_sub(self.size - 1);
        true
    }
}

impl CompletionEngine {
    /// Forget a word
    ///
    /// Returns whether the word was present. Ancestors still needed by other
    /// words are left in place.
    pub async fn remove(&self, input: &str) -> Result<bool> {
        let word = self.normalizer.normalize(input)?;
        let _guard = self.lock_mutations().await;
        let leaf = self.codec.leaf(&word);

        if self.store.rank(&self.key, &word).await?.is_some() {
            // Other words extend this one, so every ancestor is shared
            trace!("{} is a prefix of other words", word);
        } else if let Some(leaf_rank) = self.store.rank(&self.key, &leaf).await? {
            self.climb_ancestors(&word, leaf_rank).await?;
        }

        let removed = self.store.remove(&self.key, &leaf).await? > 0;
        debug!(word = %word, removed, "removed completion");
        Ok(removed)
    }

    /// Delete the ancestors of `word` that only its leaf (at `leaf_rank`) needs
    async fn climb_ancestors(&self, word: &str, leaf_rank: u64) -> Result<()> {
        let shared = self.shared_with_successor(word, leaf_rank).await?;
        let Some(mut window) = ClimbWindow::below(leaf_rank, self.config.window) else {
            return Ok(());
        };

        let boundary = loop {
            let members = self
                .store
                .range_by_rank(&self.key, window.start, window.stop)
                .await?;
            trace!(
                "climb window {}..={} for {}: {} members",
                window.start,
                window.stop,
                word,
                members.len()
            );

            let found = members
                .iter()
                .enumerate()
                .rev()
                .find(|(_, member)| self.is_stop_boundary(member, word, shared));
            if let Some((offset, member)) = found {
                break Some((window.start + offset as u64, member.clone()));
            }
            if !window.slide() {
                break None;
            }
        };

        let first_orphan = boundary.as_ref().map_or(0, |(rank, _)| rank + 1);
        if first_orphan < leaf_rank {
            let deleted = self
                .store
                .remove_range_by_rank(&self.key, first_orphan, leaf_rank - 1)
                .await?;
            debug!("Removed {} orphaned ancestors of {}", deleted, word);
        }

        // A stop at the leaf of one of our own ancestors: that leaf sorts just
        // above its bare entry, which existed only to lead to `word`.
        if let Some((_, member)) = &boundary {
            if let Some(ancestor) = self.codec.decode_leaf(member) {
                let ours = ancestor.len() < word.len() && word.starts_with(ancestor);
                if ours && shared.map_or(true, |shared| ancestor.len() > shared) {
                    self.store.remove(&self.key, ancestor).await?;
                    debug!("Removed bare entry of ancestor word {}", ancestor);
                }
            }
        }

        Ok(())
    }

    /// Length of the prefix `word` shares with the member right after its leaf
    ///
    /// Ancestors up to that length lead to the following neighbour as well.
    async fn shared_with_successor(&self, word: &str, leaf_rank: u64) -> Result<Option<usize>> {
        let next = self
            .store
            .range_by_rank(&self.key, leaf_rank + 1, leaf_rank + 1)
            .await?;
        Ok(next.first().map(|member| common_prefix_len(word, member)))
    }

    /// Whether `member` bounds the climb for `word`
    ///
    /// Leaves belong to other words. Entries as long as `word` cannot be its
    /// strict prefixes. Entries no longer than `shared` are ancestors of the
    /// following neighbour too.
    fn is_stop_boundary(&self, member: &str, word: &str, shared: Option<usize>) -> bool {
        self.codec.is_leaf(member)
            || member.len() >= word.len()
            || shared.is_some_and(|shared| member.len() <= shared)
    }
}
