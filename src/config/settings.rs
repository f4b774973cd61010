use crate::config::types::Config;
use crate::url::IgnoredPatterns;
use crate::ConfigError;
use std::time::Duration;

/// Runtime settings for one crawl engine
///
/// Unlike [`Config`], patterns here are already compiled. Settings can be built
/// from a loaded configuration file or directly in code.
#[derive(Debug, Clone)]
pub struct CrawlSettings {
    /// Wall-clock budget; the deadline is `now + timeout` at the start of each crawl
    pub timeout: Duration,

    /// Maximum number of words in the result
    pub popular_word_count: usize,

    /// Depth budget given to each root task
    pub max_depth: u32,

    /// Requested parallelism, capped by hardware concurrency
    pub parallelism: usize,

    /// URLs fully matching any of these patterns are skipped
    pub ignored_urls: IgnoredPatterns,
}

impl CrawlSettings {
    /// Builds crawl settings from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let crawler = &config.crawler;
        let settings = Self {
            timeout: Duration::from_secs(crawler.timeout_seconds),
            popular_word_count: crawler.popular_word_count,
            max_depth: crawler.max_depth,
            parallelism: crawler.parallelism,
            ignored_urls: IgnoredPatterns::compile(&crawler.ignored_urls)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the invariants the crawl engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallelism < 1 {
            return Err(ConfigError::Validation(format!(
                "parallelism must be >= 1, got {}",
                self.parallelism
            )));
        }
        Ok(())
    }
}

/// Settings for the HTTP page parser
#[derive(Debug, Clone)]
pub struct ParserSettings {
    /// Per-request timeout
    pub timeout: Duration,

    /// Words fully matching any of these patterns are not counted
    pub ignored_words: IgnoredPatterns,

    /// User-Agent header value
    pub user_agent: String,
}

impl ParserSettings {
    /// Builds parser settings from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            timeout: Duration::from_secs(config.parser.timeout_seconds),
            ignored_words: IgnoredPatterns::compile(&config.parser.ignored_words)?,
            user_agent: config.user_agent.header_value(),
        })
    }
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            ignored_words: IgnoredPatterns::new(),
            user_agent: format!("word-ripple/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
