//! Visited URL registry
//!
//! Claims are first-wins: exactly one caller observes a successful claim per URL.

use dashmap::DashSet;

/// The set of URLs claimed during one crawl invocation
///
/// The registry only grows. `claim` is a single atomic insert, so when several
/// tasks race on the same URL exactly one of them observes `true`.
#[derive(Debug, Default)]
pub struct VisitedRegistry {
    visited: DashSet<String>,
}

impl VisitedRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to mark a URL as visited
    ///
    /// # Returns
    ///
    /// * `true` - This call is the first successful claim for `url`
    /// * `false` - The URL was already claimed, by this or a concurrent task
    pub fn claim(&self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Returns true if the URL has been claimed
    pub fn contains(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of claimed URLs
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}
