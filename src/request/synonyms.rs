//! Ordered-unique synonym set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of synonym expansion strings attached to a request.
///
/// Iteration order is lexicographic, not insertion order, so persisted
/// output is deterministic across save and reload regardless of add order.
/// Duplicates collapse silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymSet {
    entries: BTreeSet<String>,
}

impl SynonymSet {
    /// Create a new empty synonym set.
    pub fn new() -> Self {
        SynonymSet {
            entries: BTreeSet::new(),
        }
    }

    /// Insert a synonym string. Returns false if it was already present.
    pub fn add<S: Into<String>>(&mut self, text: S) -> bool {
        self.entries.insert(text.into())
    }

    /// Remove a synonym string. Returns false if it was not present.
    pub fn remove(&mut self, text: &str) -> bool {
        self.entries.remove(text)
    }

    /// Check whether a synonym string is present.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains(text)
    }

    /// Number of stored synonyms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the synonyms in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    /// Snapshot of the synonyms in lexicographic order.
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SynonymSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SynonymSet {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
