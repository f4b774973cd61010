use crate::ConfigError;
use regex::Regex;

/// An ordered list of full-match patterns
///
/// A candidate is matched when any pattern matches the WHOLE candidate string,
/// not merely a substring of it. Patterns are anchored at compile time, so
/// `".*\\.pdf"` matches `"https://a.com/doc.pdf"` but `"pdf"` does not.
///
/// The same type is used for ignored URLs (crawl engine) and ignored words
/// (HTTP page parser).
#[derive(Debug, Clone, Default)]
pub struct IgnoredPatterns {
    patterns: Vec<Regex>,
}

impl IgnoredPatterns {
    /// Creates an empty pattern list that matches nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles a list of pattern sources
    ///
    /// # Arguments
    ///
    /// * `sources` - Regular expressions, in the order they should be tried
    ///
    /// # Returns
    ///
    /// * `Ok(IgnoredPatterns)` - All patterns compiled
    /// * `Err(ConfigError::InvalidPattern)` - The first pattern that failed to compile
    ///
    /// # Examples
    ///
    /// ```
    /// use word_ripple::url::IgnoredPatterns;
    ///
    /// let patterns = IgnoredPatterns::compile(&[".*\\.pdf", "https://ads\\..*"]).unwrap();
    /// assert!(patterns.matches("https://example.com/paper.pdf"));
    /// assert!(patterns.matches("https://ads.example.com/banner"));
    /// assert!(!patterns.matches("https://example.com/paper.pdf.html"));
    /// ```
    pub fn compile<S: AsRef<str>>(sources: &[S]) -> Result<Self, ConfigError> {
        let mut patterns = Vec::with_capacity(sources.len());

        for source in sources {
            let source = source.as_ref();
            let anchored = format!("^(?:{})$", source);
            let regex = Regex::new(&anchored).map_err(|e| {
                ConfigError::InvalidPattern(format!("'{}': {}", source, e))
            })?;
            patterns.push(regex);
        }

        Ok(Self { patterns })
    }

    /// Returns true if any pattern fully matches the candidate
    pub fn matches(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(candidate))
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
