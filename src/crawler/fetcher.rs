//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the page parser:
//! - Building HTTP clients with proper user agent strings and timeouts
//! - GET requests to fetch page content
//! - Classifying failures into `RippleError` variants
//!
//! There is no retry logic. A failed fetch is reported once and the crawl
//! treats the page as empty.

use crate::RippleError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A successfully fetched HTML page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects, used as the base for relative links
    pub final_url: Url,

    /// HTTP status code
    pub status_code: u16,

    /// Page body content
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header value
/// * `timeout` - Per-request timeout
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use word_ripple::crawler::build_http_client;
///
/// let client = build_http_client("WordRipple/1.0", Duration::from_secs(5)).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body if it is an HTML page
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | Connection refused, timeout, TLS failure | `RippleError::Http` |
/// | Non-2xx status | `RippleError::HttpStatus` |
/// | Content-Type present and not HTML | `RippleError::ContentMismatch` |
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, RippleError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| RippleError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RippleError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().clone();

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_html_content_type(&content_type) {
        return Err(RippleError::ContentMismatch {
            url: url.to_string(),
            content_type,
        });
    }

    let body = response.text().await.map_err(|source| RippleError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        body,
    })
}

/// Servers that omit the header are given the benefit of the doubt
fn is_html_content_type(content_type: &str) -> bool {
    if content_type.is_empty() {
        return true;
    }
    let content_type = content_type.to_ascii_lowercase();
    content_type.contains("text/html") || content_type.contains("application/xhtml+xml")
}
