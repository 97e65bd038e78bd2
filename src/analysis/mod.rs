//! Text analysis for query assembly.
//!
//! Tokenization of query text is an external concern: the request model only
//! consumes the [`Analyzer`] trait. The analyzers shipped here cover the
//! common cases so the crate is usable out of the box.

pub mod analyzer;
pub mod token;

pub use analyzer::{Analyzer, KeywordAnalyzer, PerFieldAnalyzer, StandardAnalyzer};
pub use token::Token;
