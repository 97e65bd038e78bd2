//! Search field descriptor and per-field clause expansion.

use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::error::{LanceaError, Result};
use crate::query::{BooleanClause, BooleanQuery, Occur, PhraseQuery, TermQuery};

/// How a field combines multi-term query input into sub-clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseMode {
    /// Every analyzed term must match within the field.
    RequireAll,
    /// Any analyzed term may match within the field.
    #[default]
    AnyMatch,
}

fn default_boost() -> f32 {
    1.0
}

/// A descriptor of one searchable attribute of a request.
///
/// Immutable once added to a request; replace by remove + add. Field names
/// are not deduplicated: a request holding two fields with the same name
/// gets two contributions in the composite query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchField {
    /// The field name in the search index.
    name: String,
    /// How multi-term input expands into sub-clauses.
    #[serde(default)]
    mode: ClauseMode,
    /// Weighting pass-through applied to every clause this field emits.
    #[serde(default = "default_boost")]
    boost: f32,
    /// Whether multi-term input additionally emits a phrase clause.
    #[serde(default)]
    phrase: bool,
}

impl SearchField {
    /// Create a new search field.
    ///
    /// Fails with a field error if the name is empty. This is the only
    /// point where a field's own configuration can be rejected; `add_query`
    /// never fails for structural reasons.
    pub fn new<S: Into<String>>(name: S, mode: ClauseMode) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LanceaError::field("field name must not be empty"));
        }
        Ok(SearchField {
            name,
            mode,
            boost: 1.0,
            phrase: false,
        })
    }

    /// Set the boost factor applied to this field's clauses.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Enable a phrase clause over multi-term input.
    pub fn with_phrase(mut self, phrase: bool) -> Self {
        self.phrase = phrase;
        self
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the clause mode.
    pub fn mode(&self) -> ClauseMode {
        self.mode
    }

    /// Get the boost factor.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Check whether the phrase clause is enabled.
    pub fn is_phrase(&self) -> bool {
        self.phrase
    }

    /// Validate a field deserialized from configuration.
    ///
    /// Serde bypasses [`SearchField::new`], so the codec re-checks the
    /// construction invariant here.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LanceaError::field("field name must not be empty"));
        }
        Ok(())
    }

    /// Tokenize `query_text` and append this field's contribution to
    /// `target`, joined with `occur` relative to other fields.
    ///
    /// - zero tokens contribute nothing;
    /// - one token contributes a single term clause;
    /// - several tokens contribute a nested boolean group, required-all or
    ///   any-match per the clause mode, plus an optional phrase clause with
    ///   `phrase_slop` when the phrase flag is set.
    ///
    /// Analysis failures abort with the originating error.
    pub fn add_query(
        &self,
        analyzer: &dyn Analyzer,
        query_text: &str,
        target: &mut BooleanQuery,
        phrase_slop: u32,
        occur: Occur,
    ) -> Result<()> {
        let tokens = analyzer.tokenize(&self.name, query_text)?;
        match tokens.len() {
            0 => {}
            1 => {
                let term = TermQuery::new(&self.name, &tokens[0].text).with_boost(self.boost);
                target.add_clause(BooleanClause::new(Box::new(term), occur));
            }
            _ => {
                let term_occur = match self.mode {
                    ClauseMode::RequireAll => Occur::Must,
                    ClauseMode::AnyMatch => Occur::Should,
                };
                let mut group = BooleanQuery::new();
                for token in &tokens {
                    let term = TermQuery::new(&self.name, &token.text).with_boost(self.boost);
                    group.add_clause(BooleanClause::new(Box::new(term), term_occur));
                }
                if self.phrase {
                    let terms = tokens.iter().map(|t| t.text.clone()).collect();
                    let phrase = PhraseQuery::new(&self.name, terms)
                        .with_slop(phrase_slop)
                        .with_boost(self.boost);
                    group.add_should(Box::new(phrase));
                }
                target.add_clause(BooleanClause::new(Box::new(group), occur));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self.mode {
            ClauseMode::RequireAll => "require_all",
            ClauseMode::AnyMatch => "any_match",
        };
        write!(f, "{} ({mode}, boost={}", self.name, self.boost)?;
        if self.phrase {
            write!(f, ", phrase")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StandardAnalyzer;
    use crate::query::Query;

    #[test]
    fn test_search_field_creation() {
        let field = SearchField::new("title", ClauseMode::AnyMatch).unwrap();

        assert_eq!(field.name(), "title");
        assert_eq!(field.mode(), ClauseMode::AnyMatch);
        assert_eq!(field.boost(), 1.0);
        assert!(!field.is_phrase());
    }

    #[test]
    fn test_search_field_empty_name() {
        assert!(SearchField::new("", ClauseMode::AnyMatch).is_err());
        assert!(SearchField::new("   ", ClauseMode::RequireAll).is_err());
    }

    #[test]
    fn test_add_query_single_term() {
        let field = SearchField::new("title", ClauseMode::RequireAll).unwrap();
        let analyzer = StandardAnalyzer::new();

        let mut target = BooleanQuery::new();
        field
            .add_query(&analyzer, "Hello", &mut target, 0, Occur::Must)
            .unwrap();

        assert_eq!(target.clauses().len(), 1);
        assert_eq!(target.description(), "(+title:hello)");
    }

    #[test]
    fn test_add_query_multi_term_require_all() {
        let field = SearchField::new("title", ClauseMode::RequireAll).unwrap();
        let analyzer = StandardAnalyzer::new();

        let mut target = BooleanQuery::new();
        field
            .add_query(&analyzer, "red car", &mut target, 0, Occur::Should)
            .unwrap();

        assert_eq!(target.description(), "((+title:red +title:car))");
    }

    #[test]
    fn test_add_query_multi_term_any_match() {
        let field = SearchField::new("body", ClauseMode::AnyMatch).unwrap();
        let analyzer = StandardAnalyzer::new();

        let mut target = BooleanQuery::new();
        field
            .add_query(&analyzer, "red car", &mut target, 0, Occur::Should)
            .unwrap();

        assert_eq!(target.description(), "((body:red body:car))");
    }

    #[test]
    fn test_add_query_empty_text() {
        let field = SearchField::new("title", ClauseMode::AnyMatch).unwrap();
        let analyzer = StandardAnalyzer::new();

        let mut target = BooleanQuery::new();
        field
            .add_query(&analyzer, "  ", &mut target, 0, Occur::Must)
            .unwrap();

        assert!(target.is_empty());
    }

    #[test]
    fn test_add_query_phrase_clause() {
        let field = SearchField::new("title", ClauseMode::RequireAll)
            .unwrap()
            .with_phrase(true);
        let analyzer = StandardAnalyzer::new();

        let mut target = BooleanQuery::new();
        field
            .add_query(&analyzer, "red car", &mut target, 2, Occur::Must)
            .unwrap();

        let desc = target.description();
        assert!(desc.contains("title:\"red car\"~2"), "{desc}");
    }

    #[test]
    fn test_add_query_boost_pass_through() {
        let field = SearchField::new("title", ClauseMode::AnyMatch)
            .unwrap()
            .with_boost(2.0);
        let analyzer = StandardAnalyzer::new();

        let mut target = BooleanQuery::new();
        field
            .add_query(&analyzer, "hello", &mut target, 0, Occur::Should)
            .unwrap();

        assert_eq!(target.description(), "(title:hello^2)");
    }

    #[test]
    fn test_search_field_clone_is_independent() {
        let field = SearchField::new("title", ClauseMode::AnyMatch).unwrap();
        let copy = field.clone();

        assert_eq!(field, copy);
        drop(field);
        assert_eq!(copy.name(), "title");
    }

    #[test]
    fn test_search_field_serde() {
        let field = SearchField::new("title", ClauseMode::RequireAll)
            .unwrap()
            .with_boost(2.0)
            .with_phrase(true);

        let json = serde_json::to_string(&field).unwrap();
        let back: SearchField = serde_json::from_str(&json).unwrap();
        assert_eq!(field, back);
    }
}
