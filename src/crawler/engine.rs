//! Crawl engine - orchestrates one crawl invocation
//!
//! The engine:
//! - Computes the deadline once per crawl
//! - Creates a fresh visited registry and word tally
//! - Runs one root task per seed URL, all concurrently
//! - Caps simultaneous page fetches at the effective parallelism
//! - Ranks the final tally into a `CrawlResult`

use crate::config::CrawlSettings;
use crate::crawler::page_parser::PageParser;
use crate::crawler::task::{process, CrawlContext};
use crate::output::{rank_words, CrawlResult};
use crate::ConfigError;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;

/// Parallel word-frequency crawler
pub struct CrawlEngine {
    settings: CrawlSettings,
    parser: Arc<dyn PageParser>,
    parallelism: usize,
}

impl CrawlEngine {
    /// Creates a crawl engine
    ///
    /// # Arguments
    ///
    /// * `settings` - Crawl limits and ignored URL patterns
    /// * `parser` - The page fetch/parse collaborator
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlEngine)` - Settings are valid
    /// * `Err(ConfigError)` - Settings were rejected; nothing has been crawled
    pub fn new(settings: CrawlSettings, parser: Arc<dyn PageParser>) -> Result<Self, ConfigError> {
        settings.validate()?;
        let parallelism = settings.parallelism.min(Self::max_parallelism());

        Ok(Self {
            settings,
            parser,
            parallelism,
        })
    }

    /// Hardware concurrency available to this process
    pub fn max_parallelism() -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    /// Effective parallelism: the requested value capped by hardware concurrency
    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    pub fn settings(&self) -> &CrawlSettings {
        &self.settings
    }

    /// Crawls from the given seed URLs and returns the most popular words
    ///
    /// Never fails: unreachable pages contribute nothing, and a crawl where no
    /// seed was reachable returns an empty result.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    /// use word_ripple::config::{CrawlSettings, ParserSettings};
    /// use word_ripple::{CrawlEngine, HttpPageParser, IgnoredPatterns};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let settings = CrawlSettings {
    ///     timeout: Duration::from_secs(10),
    ///     popular_word_count: 5,
    ///     max_depth: 2,
    ///     parallelism: 4,
    ///     ignored_urls: IgnoredPatterns::new(),
    /// };
    /// let parser = HttpPageParser::new(&ParserSettings::default())?;
    /// let engine = CrawlEngine::new(settings, Arc::new(parser))?;
    ///
    /// let result = engine.crawl(&["https://example.com/".to_string()]).await;
    /// println!("Visited {} pages", result.urls_visited);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn crawl(&self, seeds: &[String]) -> CrawlResult {
        let started = Instant::now();
        let deadline = deadline_after(started, self.settings.timeout);

        tracing::info!(
            "Starting crawl: {} seeds, max depth {}, parallelism {}, timeout {:?}",
            seeds.len(),
            self.settings.max_depth,
            self.parallelism,
            self.settings.timeout
        );

        let ctx = Arc::new(CrawlContext::new(
            deadline,
            self.settings.ignored_urls.clone(),
            Arc::clone(&self.parser),
            self.parallelism,
        ));

        let mut roots = JoinSet::new();
        for seed in seeds {
            roots.spawn(process(
                seed.clone(),
                self.settings.max_depth,
                Arc::clone(&ctx),
            ));
        }

        while let Some(joined) = roots.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Root crawl task failed: {}", e);
            }
        }

        let urls_visited = ctx.registry.len();
        let word_counts = if ctx.tally.is_empty() {
            Vec::new()
        } else {
            rank_words(&ctx.tally.snapshot(), self.settings.popular_word_count)
        };

        tracing::info!(
            "Crawl completed: {} URLs visited, {} distinct words in {:?}",
            urls_visited,
            ctx.tally.len(),
            started.elapsed()
        );

        CrawlResult {
            word_counts,
            urls_visited,
        }
    }
}

/// Roughly thirty years; used when the configured timeout would overflow `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

/// Deadline `timeout` after `started`, saturating to a far-future instant
fn deadline_after(started: Instant, timeout: Duration) -> Instant {
    started
        .checked_add(timeout)
        .or_else(|| started.checked_add(FAR_FUTURE))
        .unwrap_or(started)
}
