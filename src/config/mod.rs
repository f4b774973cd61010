//! Configuration module for Word-Ripple
//!
//! This module handles loading, parsing, and validating TOML configuration files,
//! and turning them into the compiled runtime settings used by the crawler.
//!
//! # Example
//!
//! ```no_run
//! use word_ripple::config::{load_config, CrawlSettings};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! let settings = CrawlSettings::from_config(&config).unwrap();
//! println!("Crawler will use max depth: {}", settings.max_depth);
//! ```

mod parser;
mod settings;
mod types;
mod validation;

// Re-export types
pub use settings::{CrawlSettings, ParserSettings};
pub use types::{Config, CrawlerConfig, OutputConfig, ParserConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
