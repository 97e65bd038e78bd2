//! Error types for the Lancea library.
//!
//! All failures are represented by the [`LanceaError`] enum. Errors are
//! deterministic: the same input always produces the same error, so callers
//! surface them as request-level failures rather than retrying.
//!
//! # Examples
//!
//! ```
//! use lancea::error::{LanceaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LanceaError::field("field name must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Lancea operations.
///
/// This enum represents all possible errors that can occur while assembling
/// queries or loading and saving request configuration. It uses the
/// `thiserror` crate for automatic `Error` trait implementation and provides
/// convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum LanceaError {
    /// I/O errors (configuration read/write)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A field's static configuration is malformed (construction time)
    #[error("Field error: {0}")]
    Field(String),

    /// Analysis-related errors (tokenization of query text)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors (structural failures while assembling)
    #[error("Query error: {0}")]
    Query(String),

    /// The persisted configuration document is structurally invalid
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LanceaError.
pub type Result<T> = std::result::Result<T, LanceaError>;

impl LanceaError {
    /// Create a new field error.
    pub fn field<S: Into<String>>(msg: S) -> Self {
        LanceaError::Field(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LanceaError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LanceaError::Query(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LanceaError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LanceaError::Other(msg.into())
    }
}
