//! Constraints checked on complete assignments.

use arbor_core::{Assignment, DistanceConstraint, Pattern, PhraseConstraint, SentenceGraph};

/// Returns whether `assignment` satisfies every distance and phrase
/// constraint of `pattern`. Constraints naming an absent variable hold.
pub(super) fn admits(
    pattern: &Pattern,
    assignment: &Assignment,
    sentence: &dyn SentenceGraph,
) -> bool {
    pattern
        .distances()
        .iter()
        .all(|distance| distance_holds(distance, assignment))
        && pattern
            .phrases()
            .iter()
            .all(|phrase| phrase_holds(phrase, assignment, sentence))
}

fn distance_holds(distance: &DistanceConstraint, assignment: &Assignment) -> bool {
    match (assignment.get(distance.first()), assignment.get(distance.second())) {
        (Some(first), Some(second)) => distance.satisfied(first, second),
        _ => true,
    }
}

fn phrase_holds(
    phrase: &PhraseConstraint,
    assignment: &Assignment,
    sentence: &dyn SentenceGraph,
) -> bool {
    let mut words = Vec::with_capacity(phrase.arity());
    for name in phrase.variables() {
        let Some(position) = assignment.get(name) else {
            return true;
        };
        let Some(text) = sentence.text(position) else {
            return false;
        };
        words.push(text);
    }
    phrase.accepts(words)
}
