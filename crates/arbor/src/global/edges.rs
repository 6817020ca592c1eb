//! Relations produced by edge constraints and unbound variables.

use std::collections::{BTreeMap, BTreeSet};

use arbor_core::{Assignment, EdgeConstraint, Pattern, SentenceGraph, TokenSpec, satisfy_all};

use crate::node::CandidateMap;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct EdgeKey {
    child: String,
    child_position: usize,
    parent: String,
    parent_position: usize,
}

impl EdgeKey {
    fn new(edge: &EdgeConstraint, child_position: usize, parent_position: usize) -> Self {
        Self {
            child: edge.child().to_owned(),
            child_position,
            parent: edge.parent().to_owned(),
            parent_position,
        }
    }
}

/// Labels that satisfied an edge constraint, keyed by both variables and
/// both positions.
#[derive(Debug, Default)]
pub(super) struct LabelCache {
    labels: BTreeMap<EdgeKey, BTreeSet<String>>,
}

impl LabelCache {
    fn record(
        &mut self,
        edge: &EdgeConstraint,
        child: usize,
        parent: usize,
        labels: BTreeSet<String>,
    ) {
        self.labels
            .entry(EdgeKey::new(edge, child, parent))
            .or_default()
            .extend(labels);
    }

    pub(super) fn labels(
        &self,
        edge: &EdgeConstraint,
        child: usize,
        parent: usize,
    ) -> Option<&BTreeSet<String>> {
        self.labels.get(&EdgeKey::new(edge, child, parent))
    }
}

/// One relation taking part in the join.
#[derive(Debug, Clone, Copy)]
pub(super) enum Step<'p> {
    /// Pairs of candidates connected by a satisfying edge.
    Edge(&'p EdgeConstraint),
    /// The candidates of a variable that no edge relation binds.
    Unary(&'p TokenSpec),
}

/// Returns whether `name` is an optional variable without candidates.
///
/// Such a variable is absent from every assignment and the constraints
/// naming it hold vacuously.
pub(super) fn is_absent(pattern: &Pattern, candidates: &CandidateMap, name: &str) -> bool {
    pattern.token(name).is_some_and(TokenSpec::is_optional) && candidates.get(name).is_empty()
}

/// Returns the number of assignments `step` can produce at most.
pub(super) fn estimate(step: Step<'_>, candidates: &CandidateMap) -> usize {
    match step {
        Step::Edge(edge) => candidates
            .get(edge.child())
            .len()
            .saturating_mul(candidates.get(edge.parent()).len()),
        Step::Unary(spec) => candidates.get(spec.name()).len(),
    }
}

/// Generates the relation for `step`.
pub(super) fn relation(
    step: Step<'_>,
    candidates: &CandidateMap,
    sentence: &dyn SentenceGraph,
    cache: &mut LabelCache,
) -> Vec<Assignment> {
    match step {
        Step::Edge(edge) => edge_relation(edge, candidates, sentence, cache),
        Step::Unary(spec) => candidates
            .get(spec.name())
            .iter()
            .map(|&position| Assignment::new().bind(spec.name(), position))
            .collect(),
    }
}

fn edge_relation(
    edge: &EdgeConstraint,
    candidates: &CandidateMap,
    sentence: &dyn SentenceGraph,
    cache: &mut LabelCache,
) -> Vec<Assignment> {
    let mut pairs = Vec::new();
    for &child in candidates.get(edge.child()) {
        for &parent in candidates.get(edge.parent()) {
            let Some(labels) = satisfy_all(edge.labels(), &sentence.labels(child, parent)) else {
                continue;
            };
            cache.record(edge, child, parent, labels);
            pairs.push(
                Assignment::new()
                    .bind(edge.child(), child)
                    .bind(edge.parent(), parent),
            );
        }
    }
    pairs
}
