//! Match results handed to the rewrite step.

use std::collections::{BTreeMap, BTreeSet};

/// One surviving assignment of a pattern against a sentence.
///
/// Only captured variables are present. Edge labels are keyed by the
/// (child, parent) positions of the pairs that satisfied an edge constraint.
///
/// # Example
///
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use arbor_core::MatchingResult;
///
/// let tokens = BTreeMap::from([(String::from("subject"), 1), (String::from("verb"), 3)]);
/// let edges = BTreeMap::from([((1, 3), BTreeSet::from([String::from("nsubj")]))]);
/// let result = MatchingResult::new(tokens, edges);
///
/// assert_eq!(result.token("subject"), Some(1));
/// assert_eq!(result.token("missing"), None);
/// assert!(result.edge(1, 3).contains("nsubj"));
/// assert!(result.edge(3, 1).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchingResult {
    tokens: BTreeMap<String, usize>,
    edges: BTreeMap<(usize, usize), BTreeSet<String>>,
}

impl MatchingResult {
    /// Creates a match result.
    #[must_use]
    pub const fn new(
        tokens: BTreeMap<String, usize>,
        edges: BTreeMap<(usize, usize), BTreeSet<String>>,
    ) -> Self {
        Self { tokens, edges }
    }

    /// Returns the position bound to a captured variable.
    ///
    /// Returns `None` when the name is unknown, not captured, or belongs to an
    /// optional variable that matched nothing.
    #[must_use]
    pub fn token(&self, name: &str) -> Option<usize> {
        self.tokens.get(name).copied()
    }

    /// Returns the labels captured on the edge from `child` to `parent`.
    ///
    /// The set is empty when no labels were captured for the pair.
    #[must_use]
    pub fn edge(&self, child: usize, parent: usize) -> BTreeSet<&str> {
        self.edges
            .get(&(child, parent))
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Returns the captured bindings in name order.
    #[must_use]
    pub const fn tokens(&self) -> &BTreeMap<String, usize> {
        &self.tokens
    }

    /// Returns every captured edge with its labels.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &BTreeSet<String>)> {
        self.edges
            .iter()
            .map(|(&(child, parent), labels)| (child, parent, labels))
    }
}
