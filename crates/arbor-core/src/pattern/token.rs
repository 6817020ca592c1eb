//! Node-level constraints attached to a single pattern variable.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeKind;
use crate::label::LabelPredicate;

/// Accepted values for one attribute kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeConstraint {
    kind: AttributeKind,
    values: BTreeSet<String>,
}

impl AttributeConstraint {
    /// Creates a constraint accepting any of `values` for `kind`.
    #[must_use]
    pub fn new<I, S>(kind: AttributeKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the attribute kind inspected.
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Returns the accepted values.
    #[must_use]
    pub const fn values(&self) -> &BTreeSet<String> {
        &self.values
    }

    /// Returns whether `value` is accepted.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.values.contains(value)
    }
}

const fn captured_by_default() -> bool {
    true
}

/// Constraints on the node bound to one pattern variable.
///
/// Attribute constraints and label predicates are conjunctive: a node must
/// satisfy every one of them.
///
/// # Example
///
/// ```
/// use arbor_core::{AttributeKind, LabelPredicate, TokenSpec};
///
/// let spec = TokenSpec::new("verb")
///     .with_attribute(AttributeKind::Pos, ["VERB"])
///     .with_incoming(LabelPredicate::has_label(["nsubj"]));
/// assert_eq!(spec.name(), "verb");
/// assert!(spec.is_captured());
/// assert!(!spec.is_optional());
/// assert_eq!(spec.incoming().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpec {
    pub(crate) name: String,
    #[serde(default)]
    optional: bool,
    #[serde(default = "captured_by_default")]
    capture: bool,
    #[serde(default)]
    attributes: Vec<AttributeConstraint>,
    #[serde(default)]
    incoming: Vec<LabelPredicate>,
    #[serde(default)]
    outgoing: Vec<LabelPredicate>,
}

impl TokenSpec {
    /// Creates a required, captured variable with no constraints.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            capture: true,
            attributes: Vec::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Marks the variable as optional: it may be absent from a match.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Marks the variable as scaffolding that is not reported in results.
    #[must_use]
    pub const fn uncaptured(mut self) -> Self {
        self.capture = false;
        self
    }

    /// Adds an attribute constraint accepting any of `values`.
    #[must_use]
    pub fn with_attribute<I, S>(self, kind: AttributeKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_constraint(AttributeConstraint::new(kind, values))
    }

    /// Adds a prebuilt attribute constraint.
    #[must_use]
    pub fn with_constraint(mut self, constraint: AttributeConstraint) -> Self {
        self.attributes.push(constraint);
        self
    }

    /// Adds a predicate over the labels of edges arriving from children.
    #[must_use]
    pub fn with_incoming(mut self, predicate: LabelPredicate) -> Self {
        self.incoming.push(predicate);
        self
    }

    /// Adds a predicate over the labels of edges leaving towards parents.
    #[must_use]
    pub fn with_outgoing(mut self, predicate: LabelPredicate) -> Self {
        self.outgoing.push(predicate);
        self
    }

    /// Returns the variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the variable may be absent from a match.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns whether the variable is reported in results.
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        self.capture
    }

    /// Returns the attribute constraints.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeConstraint] {
        &self.attributes
    }

    /// Returns the incoming label predicates.
    #[must_use]
    pub fn incoming(&self) -> &[LabelPredicate] {
        &self.incoming
    }

    /// Returns the outgoing label predicates.
    #[must_use]
    pub fn outgoing(&self) -> &[LabelPredicate] {
        &self.outgoing
    }
}
