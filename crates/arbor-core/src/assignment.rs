//! Variable assignments built up while joining edge relations.

use std::collections::BTreeMap;

/// A mapping from variable names to bound node positions.
///
/// Assignments are values: two assignments merge only when every variable
/// they share is bound to the same position.
///
/// # Example
///
/// ```
/// use arbor_core::Assignment;
///
/// let left = Assignment::new().bind("child", 1).bind("parent", 3);
/// let right = Assignment::new().bind("parent", 3).bind("other", 4);
/// let merged = left.try_merge(&right).expect("compatible");
/// assert_eq!(merged.get("other"), Some(4));
///
/// let conflicting = Assignment::new().bind("parent", 2);
/// assert!(left.try_merge(&conflicting).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Assignment {
    bindings: BTreeMap<String, usize>,
}

impl Assignment {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the assignment extended with one more binding.
    ///
    /// An existing binding for the same name is replaced.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, position: usize) -> Self {
        self.bindings.insert(name.into(), position);
        self
    }

    /// Returns the position bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.bindings.get(name).copied()
    }

    /// Returns whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns whether no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.bindings
            .iter()
            .map(|(name, position)| (name.as_str(), *position))
    }

    /// Merges two assignments, or returns `None` when they bind a shared
    /// variable to different positions.
    #[must_use]
    pub fn try_merge(&self, other: &Self) -> Option<Self> {
        let mut merged = self.clone();
        for (name, position) in &other.bindings {
            match merged.bindings.get(name) {
                Some(existing) if existing != position => return None,
                Some(_) => {}
                None => {
                    merged.bindings.insert(name.clone(), *position);
                }
            }
        }
        Some(merged)
    }

    /// Drops every binding whose name fails `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.bindings.retain(|name, _| keep(name));
    }

    /// Consumes the assignment, returning its bindings.
    #[must_use]
    pub fn into_bindings(self) -> BTreeMap<String, usize> {
        self.bindings
    }
}
