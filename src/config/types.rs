use serde::Deserialize;

/// Main configuration structure for Word-Ripple
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Seed URLs; one root crawl task is started per entry
    #[serde(rename = "starting-urls")]
    pub starting_urls: Vec<String>,

    pub crawler: CrawlerConfig,

    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Wall-clock budget for the whole crawl (seconds)
    #[serde(rename = "timeout-seconds")]
    pub timeout_seconds: u64,

    /// Number of most popular words to report
    #[serde(rename = "popular-word-count")]
    pub popular_word_count: usize,

    /// Maximum depth to crawl from seed URLs
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Requested number of simultaneous page fetches
    pub parallelism: usize,

    /// Regular expressions; a URL fully matching any of them is never visited
    #[serde(rename = "ignored-urls", default)]
    pub ignored_urls: Vec<String>,
}

/// Page parser configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Per-request HTTP timeout (seconds)
    #[serde(rename = "timeout-seconds", default = "default_parser_timeout")]
    pub timeout_seconds: u64,

    /// Regular expressions; a word fully matching any of them is not counted
    #[serde(rename = "ignored-words", default)]
    pub ignored_words: Vec<String>,
}

fn default_parser_timeout() -> u64 {
    10
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_parser_timeout(),
            ignored_words: Vec::new(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `CrawlerName/Version (+ContactURL; ContactEmail)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to write the JSON result; stdout when absent
    #[serde(rename = "result-path")]
    pub result_path: Option<String>,
}
