//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test the full
//! crawl cycle end-to-end, plus in-memory page parsers for the concurrency
//! and deadline properties.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use word_ripple::config::{parse_config, CrawlSettings, ParserSettings};
use word_ripple::crawler::crawl;
use word_ripple::{CrawlEngine, HttpPageParser, IgnoredPatterns, PageParser, PageResult, RippleError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(max_depth: u32, popular_word_count: usize) -> CrawlSettings {
    CrawlSettings {
        timeout: Duration::from_secs(10),
        popular_word_count,
        max_depth,
        parallelism: 4,
        ignored_urls: IgnoredPatterns::new(),
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!("<html><head><title>t</title></head><body>{}</body></html>", body),
        "text/html",
    )
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html(&body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_over_http() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    // A links to B and C; B and C have no further links
    mount_page(
        &server,
        "/a",
        format!(
            r#"x x <a href="{0}/b">go</a> <a href="{0}/c">go</a>"#,
            base_url
        ),
    )
    .await;
    mount_page(&server, "/b", "x y y y".to_string()).await;
    mount_page(&server, "/c", "y".to_string()).await;

    let parser = HttpPageParser::new(&ParserSettings::default()).unwrap();
    let engine = CrawlEngine::new(settings(2, 3), Arc::new(parser)).unwrap();
    let result = engine.crawl(&[format!("{}/a", base_url)]).await;

    assert_eq!(result.urls_visited, 3);
    assert_eq!(
        result.word_counts,
        vec![
            ("y".to_string(), 4),
            ("x".to_string(), 3),
            ("go".to_string(), 2)
        ]
    );
}

#[tokio::test]
async fn test_http_failures_do_not_abort_crawl() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        format!(
            r#"root <a href="{0}/missing">dead</a> <a href="{0}/alive">alive</a>"#,
            base_url
        ),
    )
    .await;
    mount_page(&server, "/alive", "survivor".to_string()).await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let parser = HttpPageParser::new(&ParserSettings::default()).unwrap();
    let engine = CrawlEngine::new(settings(3, 10), Arc::new(parser)).unwrap();
    let result = engine.crawl(&[format!("{}/", base_url)]).await;

    // The 404 page is claimed but contributes nothing
    assert_eq!(result.urls_visited, 3);
    assert_eq!(result.count_of("survivor"), Some(1));
    assert_eq!(result.count_of("root"), Some(1));
}

#[tokio::test]
async fn test_crawl_from_config() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        format!(
            r#"the ripple spreads <a href="{0}/skip.pdf">pdf</a> <a href="{0}/next">ripple</a>"#,
            base_url
        ),
    )
    .await;
    mount_page(&server, "/next", "the ripple fades".to_string()).await;

    let config = parse_config(&format!(
        r#"
starting-urls = ["{}/"]

[crawler]
timeout-seconds = 10
popular-word-count = 2
max-depth = 3
parallelism = 2
ignored-urls = [".*\\.pdf"]

[parser]
timeout-seconds = 5
ignored-words = ["the"]

[user-agent]
crawler-name = "TestBot"
crawler-version = "1.0.0"
contact-url = "https://example.com/contact"
contact-email = "test@example.com"
"#,
        base_url
    ))
    .unwrap();

    let result = crawl(&config).await.unwrap();

    // "/" and "/next"; the pdf link is ignored and never requested
    assert_eq!(result.urls_visited, 2);
    assert_eq!(
        result.word_counts,
        vec![("ripple".to_string(), 3), ("spreads".to_string(), 1)]
    );
    assert_eq!(result.count_of("the"), None);
}

/// Every page links to the same hub; the hub must be fetched exactly once
struct HubSite {
    fetches: HashMap<String, AtomicUsize>,
    spokes: usize,
}

impl HubSite {
    fn new(spokes: usize) -> Self {
        let mut fetches = HashMap::new();
        fetches.insert("hub".to_string(), AtomicUsize::new(0));
        fetches.insert("root".to_string(), AtomicUsize::new(0));
        for i in 0..spokes {
            fetches.insert(format!("spoke{}", i), AtomicUsize::new(0));
        }
        Self { fetches, spokes }
    }

    fn fetch_count(&self, url: &str) -> usize {
        self.fetches[url].load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageParser for HubSite {
    async fn parse(&self, url: &str) -> Result<PageResult, RippleError> {
        let counter = self.fetches.get(url).ok_or_else(|| RippleError::HttpStatus {
            url: url.to_string(),
            status: 404,
        })?;
        let previous = counter.fetch_add(1, Ordering::SeqCst);

        // Vary scheduling so spokes reach the hub in different interleavings
        for _ in 0..(previous + url.len()) % 4 {
            tokio::task::yield_now().await;
        }

        let links = match url {
            "root" => (0..self.spokes).map(|i| format!("spoke{}", i)).collect(),
            "hub" => vec!["root".to_string()],
            _ => vec!["hub".to_string(), "hub".to_string()],
        };

        Ok(PageResult {
            word_counts: HashMap::from([(url.to_string(), 1), ("common".to_string(), 1)]),
            links,
        })
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_hub_claimed_once_under_contention() {
    for _ in 0..20 {
        let site = Arc::new(HubSite::new(32));
        let engine = CrawlEngine::new(settings(5, 100), Arc::clone(&site) as Arc<dyn PageParser>)
            .unwrap();

        let result = engine.crawl(&["root".to_string()]).await;

        assert_eq!(site.fetch_count("hub"), 1);
        assert_eq!(site.fetch_count("root"), 1);
        assert_eq!(result.urls_visited, 34);
        assert_eq!(result.count_of("hub"), Some(1));
        assert_eq!(result.count_of("common"), Some(34));
    }
}

/// Slow single page that links onward
struct SlowSite {
    delay: Duration,
    fetches: AtomicUsize,
}

#[async_trait]
impl PageParser for SlowSite {
    async fn parse(&self, url: &str) -> Result<PageResult, RippleError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(PageResult {
            word_counts: HashMap::from([("slow".to_string(), 1)]),
            links: vec![format!("{}/next", url)],
        })
    }
}

#[tokio::test]
async fn test_children_created_after_deadline_do_nothing() {
    let site = Arc::new(SlowSite {
        delay: Duration::from_millis(200),
        fetches: AtomicUsize::new(0),
    });
    let mut short = settings(10, 10);
    short.timeout = Duration::from_millis(50);
    let engine = CrawlEngine::new(short, Arc::clone(&site) as Arc<dyn PageParser>).unwrap();

    let result = engine.crawl(&["seed".to_string()]).await;

    // The in-flight fetch finishes and is merged; its child starts too late
    assert_eq!(site.fetches.load(Ordering::SeqCst), 1);
    assert_eq!(result.urls_visited, 1);
    assert_eq!(result.count_of("slow"), Some(1));
}

/// Root answers immediately with a fan-out of slow children
struct FanOutSite {
    children: usize,
    delay: Duration,
    fetch_started: std::sync::Mutex<Vec<(String, tokio::time::Instant)>>,
}

#[async_trait]
impl PageParser for FanOutSite {
    async fn parse(&self, url: &str) -> Result<PageResult, RippleError> {
        self.fetch_started
            .lock()
            .unwrap()
            .push((url.to_string(), tokio::time::Instant::now()));

        if url == "root" {
            return Ok(PageResult {
                word_counts: HashMap::new(),
                links: (0..self.children).map(|i| format!("child{}", i)).collect(),
            });
        }
        tokio::time::sleep(self.delay).await;
        Ok(PageResult {
            word_counts: HashMap::from([("child".to_string(), 1)]),
            links: vec![],
        })
    }
}

#[tokio::test]
async fn test_queued_tasks_do_not_fetch_after_deadline() {
    let site = Arc::new(FanOutSite {
        children: 5,
        delay: Duration::from_millis(200),
        fetch_started: std::sync::Mutex::new(Vec::new()),
    });
    let mut serial = settings(3, 10);
    serial.parallelism = 1;
    serial.timeout = Duration::from_millis(100);
    let engine = CrawlEngine::new(serial, Arc::clone(&site) as Arc<dyn PageParser>).unwrap();

    let started = tokio::time::Instant::now();
    let result = engine.crawl(&["root".to_string()]).await;

    let deadline = started + Duration::from_millis(100);
    let fetches = site.fetch_started.lock().unwrap().clone();
    let late: Vec<_> = fetches.iter().filter(|(_, at)| *at >= deadline).collect();

    assert!(late.is_empty(), "fetches started after deadline: {:?}", late);
    assert_eq!(fetches.len(), 2);
    assert_eq!(result.urls_visited, 2);
    assert_eq!(result.count_of("child"), Some(1));
    // One slow child at most, not one per queued child
    assert!(started.elapsed() < Duration::from_millis(800));
}

#[tokio::test]
async fn test_zero_depth_fetches_nothing_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html("never"))
        .expect(0)
        .mount(&server)
        .await;

    let parser = HttpPageParser::new(&ParserSettings::default()).unwrap();
    let engine = CrawlEngine::new(settings(0, 10), Arc::new(parser)).unwrap();
    let result = engine.crawl(&[format!("{}/", server.uri())]).await;

    assert_eq!(result.urls_visited, 0);
    assert!(result.word_counts.is_empty());
}
