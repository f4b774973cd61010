//! The fetch/parse collaborator consumed by crawl tasks

use crate::config::ParserSettings;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::parse_html;
use crate::url::IgnoredPatterns;
use crate::RippleError;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use url::Url;

/// Word counts and outbound links of a single page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    /// Occurrences of each word on this page only
    pub word_counts: HashMap<String, u64>,

    /// Linked URLs in document order
    pub links: Vec<String>,
}

impl PageResult {
    /// A page that contributes no words and no links
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Fetches and parses a page
///
/// The crawl engine treats implementations as a black box. An `Err` is logged
/// by the calling task and the page is treated as empty; it never aborts the
/// crawl.
#[async_trait]
pub trait PageParser: Send + Sync {
    async fn parse(&self, url: &str) -> Result<PageResult, RippleError>;
}

/// Page parser backed by `reqwest` and `scraper`
#[derive(Debug, Clone)]
pub struct HttpPageParser {
    client: Client,
    ignored_words: IgnoredPatterns,
}

impl HttpPageParser {
    /// Builds a parser with its own HTTP client
    pub fn new(settings: &ParserSettings) -> Result<Self, RippleError> {
        let client = build_http_client(&settings.user_agent, settings.timeout)?;
        Ok(Self::with_client(client, settings.ignored_words.clone()))
    }

    /// Builds a parser around an existing HTTP client
    pub fn with_client(client: Client, ignored_words: IgnoredPatterns) -> Self {
        Self {
            client,
            ignored_words,
        }
    }
}

#[async_trait]
impl PageParser for HttpPageParser {
    async fn parse(&self, url: &str) -> Result<PageResult, RippleError> {
        let url = Url::parse(url)?;
        let fetched = fetch_page(&self.client, &url).await?;

        let parsed = parse_html(&fetched.body, &fetched.final_url, &self.ignored_words);
        tracing::debug!(
            "Parsed {} ({:?}): {} distinct words, {} links",
            url,
            parsed.title,
            parsed.words.len(),
            parsed.links.len()
        );

        Ok(PageResult {
            word_counts: parsed.words,
            links: parsed.links,
        })
    }
}
