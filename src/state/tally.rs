//! Shared word tally

use dashmap::DashMap;
use std::collections::HashMap;

/// Cumulative word counts shared by every task of one crawl invocation
///
/// Each merge is an upsert performed while holding the entry's shard lock, so
/// concurrent merges of the same word never lose an update.
#[derive(Debug, Default)]
pub struct WordTally {
    counts: DashMap<String, u64>,
}

impl WordTally {
    /// Creates an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` to the count for `word`, creating it at `delta` if absent
    pub fn merge(&self, word: &str, delta: u64) {
        self.counts
            .entry(word.to_string())
            .and_modify(|count| *count += delta)
            .or_insert(delta);
    }

    /// Merges every word count of a single page
    pub fn merge_page(&self, page_counts: &HashMap<String, u64>) {
        for (word, count) in page_counts {
            self.merge(word, *count);
        }
    }

    /// Current count for a word, if it has been seen
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).map(|count| *count)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Copies the tally into a plain map for ranking
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}
