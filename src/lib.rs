//! # Lancea
//!
//! A multi-field query assembly and synonym expansion library for Rust.
//!
//! Lancea builds a single composite boolean query from a free-text query
//! string and a configured list of weighted search fields, plus a restricted
//! variant limited to fields eligible for snippet highlighting. Index
//! storage, scoring and document retrieval belong to an external search
//! backend; Lancea owns request modeling only.
//!
//! ## Features
//!
//! - Per-field clause expansion (require-all or any-match)
//! - Synonym sets folded into the same composite query
//! - Thread-safe request state with a read/write lock
//! - Lossless JSON configuration round-trip

pub mod analysis;
pub mod config;
pub mod error;
pub mod query;
pub mod request;

pub mod prelude {
    pub use crate::analysis::{Analyzer, StandardAnalyzer};
    pub use crate::error::{LanceaError, Result};
    pub use crate::query::{BooleanQuery, Occur};
    pub use crate::request::{
        ClauseMode, JoinPolicy, SearchField, SearchFieldRequest, SnippetFieldSet,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
