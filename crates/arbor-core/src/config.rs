//! Matcher configuration.

use serde::{Deserialize, Serialize};

/// The order in which edge relations are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinOrder {
    /// Join edges in the order they were declared.
    #[default]
    Declared,
    /// Join edges with the fewest candidate pairs first.
    Selectivity,
}

/// Matcher configuration controlling optimisation behaviour.
///
/// Neither setting changes which results are produced, only how much work
/// is done to produce them.
///
/// # Defaults
///
/// - `join_order`: [`JoinOrder::Declared`]
/// - `hoist_constraints`: `true`
///
/// # Example
///
/// ```
/// use arbor_core::{JoinOrder, MatcherConfig};
///
/// let config = MatcherConfig::default();
/// assert_eq!(config.join_order(), JoinOrder::Declared);
/// assert!(config.hoist_constraints());
///
/// let tuned = config.with_join_order(JoinOrder::Selectivity);
/// assert_eq!(tuned.join_order(), JoinOrder::Selectivity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Order in which edge relations are joined.
    join_order: JoinOrder,
    /// Whether edge and phrase constraints are pushed down to the per-node
    /// matcher before matching.
    hoist_constraints: bool,
}

impl MatcherConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(join_order: JoinOrder, hoist_constraints: bool) -> Self {
        Self {
            join_order,
            hoist_constraints,
        }
    }

    /// Returns the configuration with a different join order.
    #[must_use]
    pub const fn with_join_order(mut self, join_order: JoinOrder) -> Self {
        self.join_order = join_order;
        self
    }

    /// Returns the configuration with hoisting switched on or off.
    #[must_use]
    pub const fn with_hoisting(mut self, hoist_constraints: bool) -> Self {
        self.hoist_constraints = hoist_constraints;
        self
    }

    /// Returns the join order.
    #[must_use]
    pub const fn join_order(&self) -> JoinOrder {
        self.join_order
    }

    /// Returns whether constraints are hoisted.
    #[must_use]
    pub const fn hoist_constraints(&self) -> bool {
        self.hoist_constraints
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            join_order: JoinOrder::Declared,
            hoist_constraints: true,
        }
    }
}
