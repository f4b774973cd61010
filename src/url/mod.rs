//! URL handling module for Word-Ripple
//!
//! Addresses are compared by exact string equality throughout the crawl core;
//! this module only provides the full-match pattern list used to skip ignored
//! URLs (and, in the page parser, ignored words).

mod matcher;

pub use matcher::IgnoredPatterns;
