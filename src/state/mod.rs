//! State module for tracking crawl progress
//!
//! This module provides the only mutable state shared between crawl tasks.
//! Both types are created fresh for each crawl invocation and dropped once the
//! final result has been ranked.
//!
//! # Components
//!
//! - `VisitedRegistry`: The set of URLs claimed so far, with an atomic claim
//! - `WordTally`: Cumulative word counts, with an atomic merge-increment

mod registry;
mod tally;

// Re-export main types
pub use registry::VisitedRegistry;
pub use tally::WordTally;
