//! Predicates over the relation labels found on edges.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A predicate over a set of actual edge labels.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use arbor_core::LabelPredicate;
///
/// let actual: BTreeSet<&str> = ["nsubj", "dep"].into_iter().collect();
/// let wanted = LabelPredicate::has_label(["nsubj", "obj"]);
/// let captured = wanted.satisfied_by(&actual).expect("satisfied");
/// assert_eq!(captured.into_iter().collect::<Vec<_>>(), ["nsubj"]);
///
/// let forbidden = LabelPredicate::has_no_label(["nsubj"]);
/// assert!(forbidden.satisfied_by(&actual).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPredicate {
    /// Satisfied when at least one actual label is in the set.
    HasLabel(BTreeSet<String>),
    /// Satisfied when no actual label is in the set, including when there
    /// are no actual labels at all.
    HasNoLabel(BTreeSet<String>),
}

impl LabelPredicate {
    /// Creates a predicate requiring one of `labels`.
    #[must_use]
    pub fn has_label<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::HasLabel(labels.into_iter().map(Into::into).collect())
    }

    /// Creates a predicate forbidding every one of `labels`.
    #[must_use]
    pub fn has_no_label<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::HasNoLabel(labels.into_iter().map(Into::into).collect())
    }

    /// Returns whether this predicate asks for a label to be present.
    ///
    /// Only positive predicates are safe to hoist onto the edge endpoints.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        matches!(self, Self::HasLabel(_))
    }

    /// Returns the labels named by the predicate.
    #[must_use]
    pub const fn labels(&self) -> &BTreeSet<String> {
        match self {
            Self::HasLabel(labels) | Self::HasNoLabel(labels) => labels,
        }
    }

    /// Tests the predicate against the actual labels.
    ///
    /// Returns `None` when unsatisfied, otherwise the labels the predicate
    /// matched. A satisfied negative predicate matches no labels.
    #[must_use]
    pub fn satisfied_by(&self, actual: &BTreeSet<&str>) -> Option<BTreeSet<String>> {
        match self {
            Self::HasLabel(accepted) => {
                let matched: BTreeSet<String> = actual
                    .iter()
                    .copied()
                    .filter(|label| accepted.contains(*label))
                    .map(str::to_owned)
                    .collect();
                (!matched.is_empty()).then_some(matched)
            }
            Self::HasNoLabel(forbidden) => actual
                .iter()
                .all(|label| !forbidden.contains(*label))
                .then(BTreeSet::new),
        }
    }
}

/// Tests a conjunction of predicates against the actual labels.
///
/// Returns `None` when any predicate fails, otherwise the union of the labels
/// every predicate matched. An empty conjunction is satisfied and matches
/// nothing.
#[must_use]
pub fn satisfy_all(
    predicates: &[LabelPredicate],
    actual: &BTreeSet<&str>,
) -> Option<BTreeSet<String>> {
    predicates
        .iter()
        .try_fold(BTreeSet::new(), |mut captured, predicate| {
            captured.extend(predicate.satisfied_by(actual)?);
            Some(captured)
        })
}
