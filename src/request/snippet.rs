//! Snippet field eligibility registry.

use ahash::AHashSet;

/// Lookup deciding which fields participate in snippet-query construction.
///
/// The highlighting subsystem owns the real registry; query assembly only
/// asks membership questions through this trait.
pub trait SnippetFieldRegistry: Send + Sync {
    /// Check whether the named field is eligible for snippeting.
    fn contains(&self, field: &str) -> bool;
}

/// A simple set-backed snippet field registry.
#[derive(Debug, Clone, Default)]
pub struct SnippetFieldSet {
    fields: AHashSet<String>,
}

impl SnippetFieldSet {
    /// Create a new empty snippet field set.
    pub fn new() -> Self {
        SnippetFieldSet {
            fields: AHashSet::new(),
        }
    }

    /// Mark a field as snippet-eligible. Returns false if already present.
    pub fn insert<S: Into<String>>(&mut self, field: S) -> bool {
        self.fields.insert(field.into())
    }

    /// Remove a field. Returns false if it was not present.
    pub fn remove(&mut self, field: &str) -> bool {
        self.fields.remove(field)
    }

    /// Number of eligible fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl SnippetFieldRegistry for SnippetFieldSet {
    fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }
}

impl<S: Into<String>> FromIterator<S> for SnippetFieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SnippetFieldSet {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_field_set() {
        let mut set = SnippetFieldSet::new();
        assert!(set.insert("title"));
        assert!(!set.insert("title"));

        assert!(set.contains("title"));
        assert!(!set.contains("body"));

        assert!(set.remove("title"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let set: SnippetFieldSet = ["title", "body"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("body"));
    }
}
