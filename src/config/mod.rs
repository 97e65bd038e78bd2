//! Configuration codec for search-field requests.
//!
//! Maps request state to and from a structured JSON document so requests can
//! be saved, reloaded and compared. The document carries one `query` section
//! holding the field list (sequence order preserved, duplicates included)
//! and the synonym strings (lexicographic order).
//!
//! ```json
//! {
//!   "query": {
//!     "policy": "any",
//!     "phrase_slop": 0,
//!     "fields": [
//!       { "name": "title", "mode": "any_match", "boost": 2.0, "phrase": true }
//!     ],
//!     "synonyms": ["automobile", "car"]
//!   }
//! }
//! ```
//!
//! Loading is strict and fail-fast: the first structurally invalid node
//! aborts the load with a config error and no request is produced.

use std::io::Write;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::error::{LanceaError, Result};
use crate::request::{JoinPolicy, SearchField, SearchFieldRequest};

/// Root of the persisted request document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestConfig {
    /// The single query section.
    pub query: QuerySection,
}

/// The `query` section: join policy, phrase slop, fields and synonyms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuerySection {
    /// Default join policy across fields.
    #[serde(default)]
    pub policy: JoinPolicy,
    /// Phrase slop used by phrase-enabled fields.
    #[serde(default)]
    pub phrase_slop: u32,
    /// Field descriptors in sequence order. Duplicates are preserved.
    #[serde(default)]
    pub fields: Vec<SearchField>,
    /// Synonym strings. Persisted in lexicographic order; deduplicated by
    /// the synonym set on load.
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// Capture a request's current state as a configuration document.
pub fn to_config(request: &SearchFieldRequest) -> RequestConfig {
    RequestConfig {
        query: QuerySection {
            policy: request.policy(),
            phrase_slop: request.phrase_slop(),
            fields: request.search_fields(),
            synonyms: request.synonyms(),
        },
    }
}

/// Construct a request from a configuration document.
///
/// Every field node is validated; the first invalid one aborts with a
/// config error. A request that failed to load must be discarded, never
/// partially used.
pub fn from_config(config: RequestConfig, analyzer: Arc<dyn Analyzer>) -> Result<SearchFieldRequest> {
    let section = config.query;
    for field in &section.fields {
        field
            .validate()
            .map_err(|e| LanceaError::config(format!("invalid field node: {e}")))?;
    }

    let request = SearchFieldRequest::new(analyzer)
        .with_policy(section.policy)
        .with_phrase_slop(section.phrase_slop);
    for field in section.fields {
        request.add(field);
    }
    for synonym in section.synonyms {
        request.add_synonyms(synonym);
    }
    Ok(request)
}

/// Load a request from a JSON document node.
pub fn load(value: &serde_json::Value, analyzer: Arc<dyn Analyzer>) -> Result<SearchFieldRequest> {
    let config: RequestConfig = serde_json::from_value(value.clone())
        .map_err(|e| LanceaError::config(format!("malformed request document: {e}")))?;
    from_config(config, analyzer)
}

/// Serialize a request's current state as a JSON document node.
pub fn to_json_value(request: &SearchFieldRequest) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(to_config(request))?)
}

/// Write a request's current state as pretty JSON.
pub fn save(request: &SearchFieldRequest, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &to_config(request))?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StandardAnalyzer;
    use crate::request::ClauseMode;

    fn analyzer() -> Arc<dyn Analyzer> {
        Arc::new(StandardAnalyzer::new())
    }

    fn sample_request() -> SearchFieldRequest {
        let request = SearchFieldRequest::new(analyzer()).with_policy(JoinPolicy::All);
        request.add(
            SearchField::new("title", ClauseMode::AnyMatch)
                .unwrap()
                .with_boost(2.0),
        );
        request.add(SearchField::new("body", ClauseMode::RequireAll).unwrap());
        request.add_synonyms("car");
        request.add_synonyms("automobile");
        request
    }

    #[test]
    fn test_round_trip() {
        let request = sample_request();

        let value = to_json_value(&request).unwrap();
        let reloaded = load(&value, analyzer()).unwrap();

        assert_eq!(reloaded.search_fields(), request.search_fields());
        assert_eq!(reloaded.synonyms(), request.synonyms());
        assert_eq!(reloaded.policy(), request.policy());
        assert_eq!(reloaded.phrase_slop(), request.phrase_slop());
    }

    #[test]
    fn test_round_trip_preserves_duplicate_fields() {
        let request = SearchFieldRequest::new(analyzer());
        request.add(SearchField::new("title", ClauseMode::AnyMatch).unwrap());
        request.add(SearchField::new("title", ClauseMode::RequireAll).unwrap());

        let value = to_json_value(&request).unwrap();
        let reloaded = load(&value, analyzer()).unwrap();

        assert_eq!(reloaded.field_count(), 2);
        assert_eq!(reloaded.search_fields(), request.search_fields());
    }

    #[test]
    fn test_save_emits_sorted_synonyms() {
        let request = SearchFieldRequest::new(analyzer());
        request.add_synonyms("vehicle");
        request.add_synonyms("automobile");

        let mut buffer = Vec::new();
        save(&request, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let automobile = text.find("automobile").unwrap();
        let vehicle = text.find("vehicle").unwrap();
        assert!(automobile < vehicle);
    }

    #[test]
    fn test_load_rejects_missing_field_name() {
        let value = serde_json::json!({
            "query": { "fields": [ { "mode": "any_match" } ] }
        });

        let err = load(&value, analyzer()).unwrap_err();
        assert!(matches!(err, LanceaError::Config(_)));
    }

    #[test]
    fn test_load_rejects_empty_field_name() {
        let value = serde_json::json!({
            "query": { "fields": [ { "name": "" } ] }
        });

        let err = load(&value, analyzer()).unwrap_err();
        assert!(matches!(err, LanceaError::Config(_)));
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let value = serde_json::json!({
            "query": { "fields": [], "ranking": "bm25" }
        });

        let err = load(&value, analyzer()).unwrap_err();
        assert!(matches!(err, LanceaError::Config(_)));
    }

    #[test]
    fn test_load_defaults() {
        let value = serde_json::json!({ "query": {} });
        let request = load(&value, analyzer()).unwrap();

        assert_eq!(request.field_count(), 0);
        assert_eq!(request.policy(), JoinPolicy::Any);
        assert_eq!(request.phrase_slop(), 0);
    }

    #[test]
    fn test_load_dedupes_synonyms() {
        let value = serde_json::json!({
            "query": { "synonyms": ["car", "car", "automobile"] }
        });
        let request = load(&value, analyzer()).unwrap();

        assert_eq!(request.synonyms(), vec!["automobile", "car"]);
    }
}
