//! Crawler module for parallel word-frequency crawling
//!
//! This module contains the core crawling logic, including:
//! - The recursive crawl task with deadline, depth and deduplication checks
//! - The crawl engine that runs task trees under a parallelism bound
//! - The page parser collaborator and its HTTP/HTML implementation

mod engine;
mod fetcher;
mod page_parser;
mod parser;
mod task;

pub use engine::CrawlEngine;
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use page_parser::{HttpPageParser, PageParser, PageResult};
pub use parser::{count_words, parse_html, ParsedPage};

use crate::config::{Config, CrawlSettings, ParserSettings};
use crate::output::CrawlResult;
use crate::RippleError;
use std::sync::Arc;

/// Runs a complete crawl from a loaded configuration
///
/// This is the main entry point used by the CLI. It will:
/// 1. Compile the crawl and parser settings
/// 2. Build the HTTP page parser
/// 3. Crawl every starting URL and rank the result
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl finished (possibly with nothing visited)
/// * `Err(RippleError)` - Settings or the HTTP client could not be built
pub async fn crawl(config: &Config) -> Result<CrawlResult, RippleError> {
    let settings = CrawlSettings::from_config(config)?;
    let parser = HttpPageParser::new(&ParserSettings::from_config(config)?)?;
    let engine = CrawlEngine::new(settings, Arc::new(parser))?;

    Ok(engine.crawl(&config.starting_urls).await)
}
