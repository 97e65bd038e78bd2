//! Analyzer trait and built-in analyzers.
//!
//! An [`Analyzer`] turns the raw query text for one field into a sequence of
//! [`Token`]s. The request model treats this as a collaborator boundary: any
//! tokenization pipeline can sit behind the trait.

use std::sync::Arc;

use ahash::AHashMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Token;
use crate::error::Result;

/// Trait for analyzers that convert query text into tokens.
///
/// `Send + Sync` is required so a single analyzer instance can serve
/// concurrent query builds.
pub trait Analyzer: Send + Sync {
    /// Tokenize the given text for the given field.
    ///
    /// Empty or whitespace-only input yields an empty vec, not an error.
    /// Fails with an analysis error only on genuinely unanalyzable input.
    fn tokenize(&self, field: &str, text: &str) -> Result<Vec<Token>>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;
}

/// A standard analyzer: Unicode word segmentation plus lowercasing.
///
/// # Examples
///
/// ```
/// use lancea::analysis::{Analyzer, StandardAnalyzer};
///
/// let analyzer = StandardAnalyzer::new();
/// let tokens = analyzer.tokenize("title", "Hello World").unwrap();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "hello");
/// assert_eq!(tokens[1].text, "world");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StandardAnalyzer;

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Self {
        StandardAnalyzer
    }
}

impl Analyzer for StandardAnalyzer {
    fn tokenize(&self, _field: &str, text: &str) -> Result<Vec<Token>> {
        Ok(text
            .unicode_words()
            .enumerate()
            .map(|(position, word)| Token::new(word.to_lowercase(), position))
            .collect())
    }

    fn name(&self) -> &'static str {
        "standard"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// A keyword analyzer that treats the entire input as a single token.
///
/// Useful for ID, tag or category fields where the query text should be
/// matched exactly as provided.
#[derive(Debug, Clone, Default)]
pub struct KeywordAnalyzer;

impl KeywordAnalyzer {
    /// Create a new keyword analyzer.
    pub fn new() -> Self {
        KeywordAnalyzer
    }
}

impl Analyzer for KeywordAnalyzer {
    fn tokenize(&self, _field: &str, text: &str) -> Result<Vec<Token>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Token::new(trimmed, 0)])
    }

    fn name(&self) -> &'static str {
        "keyword"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// A per-field analyzer that applies different analyzers to different fields.
///
/// Fields without a specific analyzer fall back to the default. Reuse a
/// single instance with `Arc::clone` when several fields share an analyzer.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use lancea::analysis::{Analyzer, KeywordAnalyzer, PerFieldAnalyzer, StandardAnalyzer};
///
/// let mut analyzer = PerFieldAnalyzer::new(Arc::new(StandardAnalyzer::new()));
/// analyzer.add_analyzer("id", Arc::new(KeywordAnalyzer::new()));
///
/// let tokens = analyzer.tokenize("id", "user-123-abc").unwrap();
/// assert_eq!(tokens.len(), 1);
/// ```
#[derive(Clone)]
pub struct PerFieldAnalyzer {
    /// Default analyzer for fields not in the map.
    default_analyzer: Arc<dyn Analyzer>,

    /// Map of field names to their specific analyzers.
    field_analyzers: AHashMap<String, Arc<dyn Analyzer>>,
}

impl PerFieldAnalyzer {
    /// Create a new per-field analyzer with a default analyzer.
    pub fn new(default_analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            default_analyzer,
            field_analyzers: AHashMap::new(),
        }
    }

    /// Add a field-specific analyzer.
    pub fn add_analyzer(&mut self, field: impl Into<String>, analyzer: Arc<dyn Analyzer>) {
        self.field_analyzers.insert(field.into(), analyzer);
    }

    /// Get the analyzer for a specific field.
    pub fn get_analyzer(&self, field: &str) -> &Arc<dyn Analyzer> {
        self.field_analyzers
            .get(field)
            .unwrap_or(&self.default_analyzer)
    }

    /// Get the default analyzer.
    pub fn default_analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.default_analyzer
    }
}

impl Analyzer for PerFieldAnalyzer {
    fn tokenize(&self, field: &str, text: &str) -> Result<Vec<Token>> {
        self.get_analyzer(field).tokenize(field, text)
    }

    fn name(&self) -> &'static str {
        "per_field"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for PerFieldAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerFieldAnalyzer")
            .field("default_analyzer", &self.default_analyzer.name())
            .field("fields", &self.field_analyzers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new();
        let tokens = analyzer.tokenize("body", "The Quick, Brown Fox!").unwrap();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "quick", "brown", "fox"]);
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_standard_analyzer_empty_input() {
        let analyzer = StandardAnalyzer::new();
        assert!(analyzer.tokenize("body", "").unwrap().is_empty());
        assert!(analyzer.tokenize("body", "   \t ").unwrap().is_empty());
    }

    #[test]
    fn test_keyword_analyzer() {
        let analyzer = KeywordAnalyzer::new();
        let tokens = analyzer.tokenize("id", " user-123-abc ").unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "user-123-abc");
    }

    #[test]
    fn test_per_field_analyzer() {
        let mut analyzer = PerFieldAnalyzer::new(Arc::new(StandardAnalyzer::new()));
        analyzer.add_analyzer("id", Arc::new(KeywordAnalyzer::new()));

        let id_tokens = analyzer.tokenize("id", "Red Car").unwrap();
        assert_eq!(id_tokens.len(), 1);
        assert_eq!(id_tokens[0].text, "Red Car");

        let body_tokens = analyzer.tokenize("body", "Red Car").unwrap();
        assert_eq!(body_tokens.len(), 2);
        assert_eq!(body_tokens[0].text, "red");
    }
}
