//! Composite query assembly over a field list and synonym set.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::error::Result;
use crate::query::{BooleanQuery, Occur, Query};
use crate::request::field::SearchField;
use crate::request::snippet::SnippetFieldRegistry;
use crate::request::synonyms::SynonymSet;

/// How the contributions of separate fields are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinPolicy {
    /// Every field's contribution is required (logical AND).
    All,
    /// Any field's contribution suffices (logical OR).
    #[default]
    Any,
}

impl JoinPolicy {
    /// The occurrence requirement this policy assigns to field clauses.
    pub fn occur(self) -> Occur {
        match self {
            JoinPolicy::All => Occur::Must,
            JoinPolicy::Any => Occur::Should,
        }
    }
}

/// Builds composite queries from a borrowed snapshot of request state.
///
/// Both entry points are pure functions of the state at call time: identical
/// field order, synonym set and query text produce structurally identical
/// output. Field contributions come in sequence order; synonym contributions
/// come per field in lexicographic order.
///
/// Synonym blending rule: synonym-expanded clauses are always appended as
/// optional (`Should`) clauses, regardless of the join policy. Under a
/// default-AND policy the original query terms stay required per field while
/// synonyms only widen the match set.
#[derive(Debug)]
pub struct QueryAssembler<'a> {
    fields: &'a [SearchField],
    synonyms: &'a SynonymSet,
    policy: JoinPolicy,
    phrase_slop: u32,
}

impl<'a> QueryAssembler<'a> {
    /// Create an assembler over the given state.
    pub fn new(
        fields: &'a [SearchField],
        synonyms: &'a SynonymSet,
        policy: JoinPolicy,
        phrase_slop: u32,
    ) -> Self {
        QueryAssembler {
            fields,
            synonyms,
            policy,
            phrase_slop,
        }
    }

    /// Build the composite query over all configured fields.
    ///
    /// Zero configured fields yield an empty boolean query (matches
    /// nothing), not an error. The first per-field analysis failure aborts
    /// the whole build.
    pub fn build_complex_query(
        &self,
        analyzer: &dyn Analyzer,
        query_text: &str,
    ) -> Result<BooleanQuery> {
        self.build(analyzer, query_text, None)
    }

    /// Build the composite query restricted to snippet-eligible fields.
    ///
    /// A field absent from the registry is skipped entirely and contributes
    /// zero clauses, synonym expansions included.
    pub fn build_snippet_query(
        &self,
        analyzer: &dyn Analyzer,
        query_text: &str,
        registry: &dyn SnippetFieldRegistry,
    ) -> Result<BooleanQuery> {
        self.build(analyzer, query_text, Some(registry))
    }

    fn build(
        &self,
        analyzer: &dyn Analyzer,
        query_text: &str,
        registry: Option<&dyn SnippetFieldRegistry>,
    ) -> Result<BooleanQuery> {
        let occur = self.policy.occur();
        let mut composite = BooleanQuery::new();

        for field in self.fields {
            if let Some(registry) = registry {
                if !registry.contains(field.name()) {
                    continue;
                }
            }
            field.add_query(analyzer, query_text, &mut composite, self.phrase_slop, occur)?;
            for synonym in self.synonyms.iter() {
                field.add_query(
                    analyzer,
                    synonym,
                    &mut composite,
                    self.phrase_slop,
                    Occur::Should,
                )?;
            }
        }

        debug!(
            "assembled composite query over {} field(s): {}",
            self.fields.len(),
            composite.description()
        );
        Ok(composite)
    }
}
