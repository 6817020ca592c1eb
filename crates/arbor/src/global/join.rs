//! Natural join of relations with early termination.

use std::collections::BTreeSet;

use arbor_core::{Assignment, JoinOrder, Pattern, SentenceGraph};
use tracing::trace;

use super::GLOBAL_TARGET;
use super::edges::{self, LabelCache, Step};
use crate::node::CandidateMap;

/// Orders the relations of `pattern` for joining.
///
/// Edge relations come first, in declaration order or by ascending size
/// estimate, followed by one unary relation per present variable that no
/// remaining edge binds. Edges touching an absent variable hold vacuously
/// and are left out.
pub(super) fn plan<'p>(
    pattern: &'p Pattern,
    candidates: &CandidateMap,
    order: JoinOrder,
) -> Vec<Step<'p>> {
    let present = |name: &str| !edges::is_absent(pattern, candidates, name);
    let mut steps: Vec<Step<'p>> = pattern
        .edges()
        .iter()
        .filter(|edge| present(edge.child()) && present(edge.parent()))
        .map(Step::Edge)
        .collect();
    if order == JoinOrder::Selectivity {
        steps.sort_by_key(|step| edges::estimate(*step, candidates));
    }

    let bound: BTreeSet<&str> = steps
        .iter()
        .flat_map(|step| match *step {
            Step::Edge(edge) => vec![edge.child(), edge.parent()],
            Step::Unary(spec) => vec![spec.name()],
        })
        .collect();
    steps.extend(
        pattern
            .tokens()
            .iter()
            .filter(|spec| present(spec.name()) && !bound.contains(spec.name()))
            .map(Step::Unary),
    );
    steps
}

/// Joins the relations of `steps` in order, starting from the single empty
/// assignment.
///
/// Relations are generated one at a time. As soon as a relation or an
/// intermediate join is empty the result is empty and no later relation is
/// generated.
pub(super) fn join_all(
    steps: &[Step<'_>],
    candidates: &CandidateMap,
    sentence: &dyn SentenceGraph,
    cache: &mut LabelCache,
) -> Vec<Assignment> {
    let mut joined = vec![Assignment::new()];
    for (index, step) in steps.iter().enumerate() {
        let relation = edges::relation(*step, candidates, sentence, cache);
        if relation.is_empty() {
            trace!(target: GLOBAL_TARGET, step = index, "relation is empty");
            return Vec::new();
        }
        joined = join(&joined, &relation);
        trace!(
            target: GLOBAL_TARGET,
            step = index,
            relation = relation.len(),
            joined = joined.len(),
            "joined relation"
        );
        if joined.is_empty() {
            return Vec::new();
        }
    }
    joined
}

/// Merges every compatible pair from `left` and `right`.
pub(super) fn join(left: &[Assignment], right: &[Assignment]) -> Vec<Assignment> {
    left.iter()
        .flat_map(|partial| right.iter().filter_map(|other| partial.try_merge(other)))
        .collect()
}
