//! Edge constraints between two pattern variables.

use serde::{Deserialize, Serialize};

use crate::label::LabelPredicate;

/// Requires an edge from the `child` variable's node to the `parent`
/// variable's node whose labels satisfy every predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConstraint {
    child: String,
    parent: String,
    labels: Vec<LabelPredicate>,
}

impl EdgeConstraint {
    /// Creates an edge constraint with a single label predicate.
    #[must_use]
    pub fn new(child: impl Into<String>, parent: impl Into<String>, label: LabelPredicate) -> Self {
        Self {
            child: child.into(),
            parent: parent.into(),
            labels: vec![label],
        }
    }

    /// Adds another predicate that the same edge must satisfy.
    #[must_use]
    pub fn and_label(mut self, label: LabelPredicate) -> Self {
        self.labels.push(label);
        self
    }

    /// Returns the child variable name.
    #[must_use]
    pub fn child(&self) -> &str {
        &self.child
    }

    /// Returns the parent variable name.
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Returns the label predicates.
    #[must_use]
    pub fn labels(&self) -> &[LabelPredicate] {
        &self.labels
    }
}
