//! Request state: the mutable field list and synonym set behind a lock.

pub mod assembler;
pub mod field;
pub mod snippet;
pub mod synonyms;

pub use assembler::{JoinPolicy, QueryAssembler};
pub use field::{ClauseMode, SearchField};
pub use snippet::{SnippetFieldRegistry, SnippetFieldSet};
pub use synonyms::SynonymSet;

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::analysis::Analyzer;
use crate::error::Result;
use crate::query::BooleanQuery;

/// The guarded aggregate: field sequence plus synonym set.
///
/// `generation` increments on every structural mutation. A caching layer
/// above this component records the generation alongside any compiled query
/// it keeps; a mismatch means the compiled form predates a mutation and must
/// be discarded. Builds read state without touching the counter.
#[derive(Debug, Default)]
struct RequestState {
    fields: Vec<SearchField>,
    synonyms: SynonymSet,
    generation: u64,
}

impl RequestState {
    fn reset(&mut self) {
        self.generation += 1;
    }
}

/// A search request over multiple weighted fields.
///
/// Holds the mutable field list and synonym set behind a single
/// reader/writer lock: query-serving readers proceed concurrently, while a
/// mutation excludes all other access for its duration. Join policy, phrase
/// slop and the analyzer are fixed at construction; structural state changes
/// through the mutators.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use lancea::analysis::StandardAnalyzer;
/// use lancea::request::{ClauseMode, JoinPolicy, SearchField, SearchFieldRequest};
///
/// let request = SearchFieldRequest::new(Arc::new(StandardAnalyzer::new()))
///     .with_policy(JoinPolicy::Any);
/// request.add(SearchField::new("title", ClauseMode::AnyMatch).unwrap());
///
/// let query = request.build_complex_query("red car").unwrap();
/// assert!(!query.is_empty());
/// ```
pub struct SearchFieldRequest {
    state: RwLock<RequestState>,
    policy: JoinPolicy,
    phrase_slop: u32,
    analyzer: Arc<dyn Analyzer>,
}

impl SearchFieldRequest {
    /// Create a new empty request with default settings (OR policy,
    /// phrase slop 0).
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        SearchFieldRequest {
            state: RwLock::new(RequestState::default()),
            policy: JoinPolicy::default(),
            phrase_slop: 0,
            analyzer,
        }
    }

    /// Set the default join policy.
    pub fn with_policy(mut self, policy: JoinPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the phrase slop used by phrase-enabled fields.
    pub fn with_phrase_slop(mut self, phrase_slop: u32) -> Self {
        self.phrase_slop = phrase_slop;
        self
    }

    /// Get the default join policy.
    pub fn policy(&self) -> JoinPolicy {
        self.policy
    }

    /// Get the phrase slop.
    pub fn phrase_slop(&self) -> u32 {
        self.phrase_slop
    }

    /// Get the analyzer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Append a search field. Duplicate names are permitted and contribute
    /// separately; callers dedupe if they want unique fields.
    pub fn add(&self, field: SearchField) {
        let mut state = self.state.write();
        debug!("adding search field: {field}");
        state.fields.push(field);
        state.reset();
    }

    /// Remove the first field with the given name. Returns false if no
    /// field matched.
    pub fn remove(&self, name: &str) -> bool {
        let mut state = self.state.write();
        match state.fields.iter().position(|f| f.name() == name) {
            Some(index) => {
                state.fields.remove(index);
                state.reset();
                true
            }
            None => false,
        }
    }

    /// Insert a synonym string. Idempotent; returns false if already
    /// present.
    pub fn add_synonyms<S: Into<String>>(&self, text: S) -> bool {
        let mut state = self.state.write();
        let inserted = state.synonyms.add(text);
        if inserted {
            state.reset();
        }
        inserted
    }

    /// Remove a synonym string. Idempotent; returns false if absent.
    pub fn remove_synonyms(&self, text: &str) -> bool {
        let mut state = self.state.write();
        let removed = state.synonyms.remove(text);
        if removed {
            state.reset();
        }
        removed
    }

    /// Snapshot of the field sequence, in insertion order.
    ///
    /// A defensive copy: later mutations do not affect the returned vec.
    pub fn search_fields(&self) -> Vec<SearchField> {
        self.state.read().fields.clone()
    }

    /// Snapshot of the synonym set, in lexicographic order.
    pub fn synonyms(&self) -> Vec<String> {
        self.state.read().synonyms.to_vec()
    }

    /// Number of configured fields.
    pub fn field_count(&self) -> usize {
        self.state.read().fields.len()
    }

    /// Current mutation generation. Increments on every add/remove of a
    /// field or synonym; a compiled query cached at generation N is stale
    /// once the counter moves past N.
    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    /// Diagnostic dump of the current field configuration.
    pub fn info(&self) -> String {
        let state = self.state.read();
        let fields: Vec<String> = state.fields.iter().map(|f| f.to_string()).collect();
        format!("[{}]", fields.join(", "))
    }

    /// Build the composite query over all configured fields from the
    /// current state.
    pub fn build_complex_query(&self, query_text: &str) -> Result<BooleanQuery> {
        let state = self.state.read();
        let assembler = QueryAssembler::new(
            &state.fields,
            &state.synonyms,
            self.policy,
            self.phrase_slop,
        );
        assembler.build_complex_query(self.analyzer.as_ref(), query_text)
    }

    /// Build the composite query restricted to snippet-eligible fields
    /// from the current state.
    pub fn build_snippet_query(
        &self,
        query_text: &str,
        registry: &dyn SnippetFieldRegistry,
    ) -> Result<BooleanQuery> {
        let state = self.state.read();
        let assembler = QueryAssembler::new(
            &state.fields,
            &state.synonyms,
            self.policy,
            self.phrase_slop,
        );
        assembler.build_snippet_query(self.analyzer.as_ref(), query_text, registry)
    }

    /// Replace this request's state with a deep copy of another request's
    /// state. Every field is cloned and the whole synonym set is copied; the
    /// two requests share no structure afterwards.
    pub fn copy_from(&self, other: &SearchFieldRequest) {
        let (fields, synonyms) = {
            let other_state = other.state.read();
            (other_state.fields.clone(), other_state.synonyms.clone())
        };
        let mut state = self.state.write();
        state.fields = fields;
        state.synonyms = synonyms;
        state.reset();
    }
}

impl std::fmt::Debug for SearchFieldRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("SearchFieldRequest")
            .field("fields", &state.fields)
            .field("synonyms", &state.synonyms)
            .field("policy", &self.policy)
            .field("phrase_slop", &self.phrase_slop)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
