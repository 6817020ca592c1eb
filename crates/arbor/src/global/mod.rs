//! Global matching: joining candidates into complete assignments.
//!
//! Given the candidate nodes of every variable, the global matcher builds one
//! relation per edge constraint from the candidate pairs whose connecting
//! labels satisfy the constraint, joins those relations, and filters the
//! joined assignments by distance and phrase constraints. The labels that
//! satisfied each edge are cached while relations are built and attached to
//! the results.

mod edges;
mod filter;
mod join;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::vec;

use arbor_core::{Assignment, JoinOrder, MatchingResult, Pattern, SentenceGraph, TokenSpec};
use tracing::trace;

use crate::node::CandidateMap;

use edges::LabelCache;

const GLOBAL_TARGET: &str = "arbor::global";

/// Joins per-variable candidates into the results of one pattern.
///
/// # Example
///
/// ```
/// use arbor::{
///     CandidateMap, EdgeConstraint, GlobalMatcher, JoinOrder, LabelPredicate, Pattern, Sentence,
///     TokenSpec,
/// };
///
/// let mut sentence = Sentence::from_words(["dogs", "bark"]);
/// sentence.add_edge(0, 1, "nsubj")?;
/// let pattern = Pattern::builder()
///     .token(TokenSpec::new("child"))
///     .token(TokenSpec::new("parent"))
///     .edge(EdgeConstraint::new("child", "parent", LabelPredicate::has_label(["nsubj"])))
///     .build()?;
///
/// let candidates = CandidateMap::new().with("child", [0, 1]).with("parent", [0, 1]);
/// let matcher = GlobalMatcher::new(pattern, JoinOrder::Declared);
/// let results: Vec<_> = matcher.matches(&candidates, &sentence).collect();
/// assert_eq!(results.len(), 1);
/// assert!(results.iter().all(|result| result.edge(0, 1).contains("nsubj")));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct GlobalMatcher {
    pattern: Pattern,
    join_order: JoinOrder,
}

impl GlobalMatcher {
    /// Creates a global matcher for `pattern`.
    #[must_use]
    pub const fn new(pattern: Pattern, join_order: JoinOrder) -> Self {
        Self {
            pattern,
            join_order,
        }
    }

    /// Returns the pattern whose constraints are enforced.
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the results of the pattern against `sentence`.
    ///
    /// Edge relations are joined before this returns; distance and phrase
    /// filtering and result construction happen as the sequence is consumed.
    /// A required variable without candidates yields no results.
    pub fn matches<'a>(
        &'a self,
        candidates: &CandidateMap,
        sentence: &'a dyn SentenceGraph,
    ) -> Matches<'a> {
        let steps = join::plan(&self.pattern, candidates, self.join_order);
        let mut cache = LabelCache::default();
        let assignments = join::join_all(&steps, candidates, sentence, &mut cache);
        trace!(
            target: GLOBAL_TARGET,
            steps = steps.len(),
            assignments = assignments.len(),
            "join complete"
        );
        Matches {
            pattern: &self.pattern,
            sentence,
            assignments: assignments.into_iter(),
            cache,
        }
    }
}

/// The lazily filtered results of one pattern against one sentence.
///
/// Each item is a [`MatchingResult`] holding the captured variables and the
/// labels of the edges that satisfied the pattern's edge constraints.
pub struct Matches<'a> {
    pattern: &'a Pattern,
    sentence: &'a dyn SentenceGraph,
    assignments: vec::IntoIter<Assignment>,
    cache: LabelCache,
}

impl<'a> Matches<'a> {
    pub(crate) fn empty(pattern: &'a Pattern, sentence: &'a dyn SentenceGraph) -> Self {
        Self {
            pattern,
            sentence,
            assignments: Vec::new().into_iter(),
            cache: LabelCache::default(),
        }
    }

    fn build(&self, mut assignment: Assignment) -> MatchingResult {
        let mut edges: BTreeMap<(usize, usize), BTreeSet<String>> = BTreeMap::new();
        for edge in self.pattern.edges() {
            let (Some(child), Some(parent)) =
                (assignment.get(edge.child()), assignment.get(edge.parent()))
            else {
                continue;
            };
            let Some(labels) = self.cache.labels(edge, child, parent) else {
                continue;
            };
            if !labels.is_empty() {
                edges
                    .entry((child, parent))
                    .or_default()
                    .extend(labels.iter().cloned());
            }
        }
        assignment.retain(|name| {
            self.pattern
                .token(name)
                .is_some_and(TokenSpec::is_captured)
        });
        MatchingResult::new(assignment.into_bindings(), edges)
    }
}

impl Iterator for Matches<'_> {
    type Item = MatchingResult;

    fn next(&mut self) -> Option<Self::Item> {
        let (pattern, sentence) = (self.pattern, self.sentence);
        let assignment = self
            .assignments
            .by_ref()
            .find(|candidate| filter::admits(pattern, candidate, sentence))?;
        Some(self.build(assignment))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.assignments.size_hint().1)
    }
}

impl fmt::Debug for Matches<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matches")
            .field("pattern", &self.pattern)
            .field("remaining", &self.assignments.len())
            .finish_non_exhaustive()
    }
}
