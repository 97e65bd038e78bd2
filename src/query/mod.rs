//! Composite query representation.
//!
//! These types are the accumulator that query assembly appends clauses into.
//! Execution (matching, scoring, retrieval) belongs to the search-index
//! collaborator; this crate only builds the boolean tree and hands it over.

pub mod boolean;
pub mod phrase;
#[allow(clippy::module_inception)]
pub mod query;
pub mod term;

pub use boolean::{BooleanClause, BooleanQuery, Occur};
pub use phrase::PhraseQuery;
pub use query::Query;
pub use term::TermQuery;
