//! Base query trait.

use std::any::Any;
use std::fmt::Debug;

/// Trait for clauses of a composite query.
///
/// Implementations are inert descriptions of what to match; they carry no
/// matcher or scorer. The search-index collaborator consumes the tree and
/// owns execution.
pub trait Query: Send + Sync + Debug {
    /// Get the boost factor for this query.
    fn boost(&self) -> f32;

    /// Set the boost factor for this query.
    fn set_boost(&mut self, boost: f32);

    /// Get a human-readable description of this query.
    ///
    /// The description is a canonical rendering of the tree: two queries
    /// with equal descriptions are structurally identical.
    fn description(&self) -> String;

    /// Clone this query.
    fn clone_box(&self) -> Box<dyn Query>;

    /// Get this query as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get the field name this query searches in, if applicable.
    /// Returns None for queries that don't target a specific field
    /// (e.g., BooleanQuery).
    fn field(&self) -> Option<&str> {
        None
    }
}
