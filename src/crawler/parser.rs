//! HTML parser for extracting words and links
//!
//! This module handles parsing HTML content to extract:
//! - Links to follow (from <a> tags and canonical links)
//! - Visible words and their per-page counts
//! - The page title, for logging

use crate::url::IgnoredPatterns;
use scraper::{Html, Node, Selector};
use std::collections::HashMap;
use url::Url;

/// Elements whose text is never counted
const SKIPPED_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// Per-page word counts
    pub words: HashMap<String, u64>,

    /// All links found on the page (absolute URLs), in document order
    pub links: Vec<String>,
}

/// Parses HTML content and extracts words, links and the title
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` tags
/// - `<link rel="canonical" href="...">`
///
/// **Exclude:**
/// - `<a href="..." download>`
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs and fragment-only links
///
/// # Word Extraction Rules
///
/// Text outside `head`, `script`, `style`, `noscript` and `template` is
/// lowercased and split on every non-alphanumeric character. Words fully
/// matching any of `ignored_words` are dropped.
///
/// # Example
///
/// ```
/// use word_ripple::crawler::parse_html;
/// use word_ripple::url::IgnoredPatterns;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body>Rust, rust! <a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_html(html, &base_url, &IgnoredPatterns::new());
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.words.get("rust"), Some(&2));
/// assert_eq!(parsed.links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn parse_html(html: &str, base_url: &Url, ignored_words: &IgnoredPatterns) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        words: extract_words(&document, ignored_words),
        links: extract_links(&document, base_url),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Counts the visible words of the document
fn extract_words(document: &Html, ignored_words: &IgnoredPatterns) -> HashMap<String, u64> {
    let mut words = HashMap::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map_or(false, |e| SKIPPED_ELEMENTS.contains(&e.name()))
        });
        if hidden {
            continue;
        }

        count_words(text, ignored_words, &mut words);
    }

    words
}

/// Tokenizes a run of text and adds its words to `counts`
pub fn count_words(text: &str, ignored_words: &IgnoredPatterns, counts: &mut HashMap<String, u64>) {
    for token in text.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        let word = token.to_lowercase();
        if ignored_words.matches(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }
}

/// Extracts all valid links from the HTML document
fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href], link[rel='canonical'][href]") {
        for element in document.select(&a_selector) {
            // Skip if it has the download attribute
            if element.value().attr("download").is_some() {
                continue;
            }

            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only links
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let absolute_url = base_url.join(href).ok()?;
    if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
        Some(absolute_url.to_string())
    } else {
        None
    }
}
