//! The recursive crawl task
//!
//! Each task handles one URL. It either returns immediately (depth exhausted,
//! deadline passed, ignored, or already claimed) or fetches the page, merges
//! its words into the shared tally, and spawns one child task per link. A task
//! does not finish until every child it spawned has finished, so awaiting a
//! root task awaits its whole subtree.

use crate::crawler::page_parser::{PageParser, PageResult};
use crate::state::{VisitedRegistry, WordTally};
use crate::url::IgnoredPatterns;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;

/// State shared by every task of one crawl invocation
pub(crate) struct CrawlContext {
    /// Computed once per invocation; never recomputed per task
    pub deadline: Instant,
    pub ignored_urls: IgnoredPatterns,
    pub registry: VisitedRegistry,
    pub tally: WordTally,
    pub parser: Arc<dyn PageParser>,
    /// Bounds simultaneous fetch/parse calls
    pub permits: Semaphore,
}

impl CrawlContext {
    pub fn new(
        deadline: Instant,
        ignored_urls: IgnoredPatterns,
        parser: Arc<dyn PageParser>,
        parallelism: usize,
    ) -> Self {
        Self {
            deadline,
            ignored_urls,
            registry: VisitedRegistry::new(),
            tally: WordTally::new(),
            parser,
            permits: Semaphore::new(parallelism),
        }
    }
}

/// Future returned by [`process`]; boxed because the task spawns itself
pub(crate) type TaskFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Crawls `url` with the given depth budget, then waits for all descendants
pub(crate) fn process(url: String, depth: u32, ctx: Arc<CrawlContext>) -> TaskFuture {
    Box::pin(async move {
        if depth == 0 || Instant::now() >= ctx.deadline {
            return;
        }

        if ctx.ignored_urls.matches(&url) {
            tracing::trace!("Ignoring {}", url);
            return;
        }

        let Some(page) = claim_and_fetch(&url, depth, &ctx).await else {
            return;
        };
        ctx.tally.merge_page(&page.word_counts);

        let mut children = JoinSet::new();
        for link in page.links {
            children.spawn(process(link, depth - 1, Arc::clone(&ctx)));
        }

        while let Some(joined) = children.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Crawl task under {} failed: {}", url, e);
            }
        }
    })
}

/// Claims `url` and calls the page parser while holding a parallelism permit
///
/// The deadline is checked again once the permit is granted, since a task may
/// have queued behind slow fetches for longer than the remaining budget. The
/// claim happens only after that check, so a URL whose fetch never starts is
/// not counted as visited.
///
/// The permit is released before any child is spawned, so a parent waiting on
/// its children never holds one.
///
/// Returns `None` when the URL was not claimed by this task.
async fn claim_and_fetch(url: &str, depth: u32, ctx: &CrawlContext) -> Option<PageResult> {
    let _permit = ctx.permits.acquire().await.ok()?;

    if Instant::now() >= ctx.deadline {
        tracing::trace!("Deadline passed while {} was queued", url);
        return None;
    }

    if !ctx.registry.claim(url) {
        return None;
    }
    tracing::debug!("Claimed {} (depth budget {})", url, depth);

    match ctx.parser.parse(url).await {
        Ok(page) => Some(page),
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", url, e);
            Some(PageResult::empty())
        }
    }
}
