//! Positional distance constraints.

use serde::{Deserialize, Serialize};

/// How the gap between two bound tokens is constrained.
///
/// The gap is the number of tokens strictly between the first and the second
/// token, `position(second) - position(first) - 1`. It is negative when the
/// second token precedes the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceKind {
    /// The gap must equal the value; `Exact(0)` means adjacent.
    Exact(i64),
    /// The gap must not exceed the value.
    UpTo(i64),
}

impl DistanceKind {
    /// Returns whether `gap` satisfies this kind.
    #[must_use]
    pub const fn admits(self, gap: i64) -> bool {
        match self {
            Self::Exact(distance) => gap == distance,
            Self::UpTo(bound) => gap <= bound,
        }
    }
}

/// Constrains the gap between the tokens bound to two variables.
///
/// # Example
///
/// ```
/// use arbor_core::{DistanceConstraint, DistanceKind};
///
/// let adjacent = DistanceConstraint::new("det", "noun", DistanceKind::Exact(0));
/// assert!(adjacent.satisfied(3, 4));
/// assert!(!adjacent.satisfied(3, 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistanceConstraint {
    first: String,
    second: String,
    kind: DistanceKind,
}

impl DistanceConstraint {
    /// Creates a distance constraint.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>, kind: DistanceKind) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            kind,
        }
    }

    /// Returns the first variable name.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the second variable name.
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Returns the distance kind.
    #[must_use]
    pub const fn kind(&self) -> DistanceKind {
        self.kind
    }

    /// Returns whether tokens at the given positions satisfy the constraint.
    #[must_use]
    pub fn satisfied(&self, first: usize, second: usize) -> bool {
        self.kind.admits(gap(first, second))
    }
}

fn gap(first: usize, second: usize) -> i64 {
    let from = i64::try_from(first).unwrap_or(i64::MAX);
    let to = i64::try_from(second).unwrap_or(i64::MAX);
    to.saturating_sub(from).saturating_sub(1)
}
