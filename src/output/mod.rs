//! Output module for crawl results
//!
//! This module handles:
//! - Ranking the final word tally into the most popular words
//! - The `CrawlResult` type returned by every crawl
//! - Writing results as JSON and printing a human-readable summary

mod json;
mod ranking;

pub use json::{write_result, write_result_to_path};
pub use ranking::rank_words;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The outcome of one crawl invocation
///
/// Serializes as `{"wordCounts": {...}, "urlsVisited": n}`, with the word map
/// keys emitted in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    /// The most popular words, ranked; empty when no words were counted
    #[serde(serialize_with = "serialize_ordered_map")]
    pub word_counts: Vec<(String, u64)>,

    /// Number of distinct URLs claimed during the crawl
    pub urls_visited: usize,
}

impl CrawlResult {
    /// Looks up the count reported for a word
    pub fn count_of(&self, word: &str) -> Option<u64> {
        self.word_counts
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, count)| *count)
    }
}

fn serialize_ordered_map<S>(entries: &[(String, u64)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (word, count) in entries {
        map.serialize_entry(word, count)?;
    }
    map.end()
}

/// Prints a crawl result to stdout in a human-readable format
pub fn print_result(result: &CrawlResult) {
    println!("=== Crawl Result ===\n");
    println!("URLs visited: {}", result.urls_visited);

    if result.word_counts.is_empty() {
        println!("\nNo words counted");
        return;
    }

    println!("\nPopular words ({}):", result.word_counts.len());
    let width = result
        .word_counts
        .iter()
        .map(|(word, _)| word.chars().count())
        .max()
        .unwrap_or(0);
    for (rank, (word, count)) in result.word_counts.iter().enumerate() {
        println!("  {:>3}. {:<width$}  {}", rank + 1, word, count, width = width);
    }
}
