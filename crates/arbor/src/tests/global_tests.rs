//! Tests for [`GlobalMatcher`]: joining, filtering, and result construction.

use std::collections::BTreeSet;

use rstest::rstest;

use super::support::{Instrumented, gave};
use crate::{
    AttributeKind, CandidateMap, DistanceConstraint, DistanceKind, EdgeConstraint, GlobalMatcher,
    JoinOrder, LabelPredicate, MatchingResult, Pattern, PhraseConstraint, Sentence,
    SentenceGraph, TokenSpec,
};

fn has(labels: &[&str]) -> LabelPredicate {
    LabelPredicate::has_label(labels.iter().copied())
}

fn run(
    pattern: Pattern,
    candidates: &CandidateMap,
    sentence: &dyn SentenceGraph,
    order: JoinOrder,
) -> Vec<MatchingResult> {
    GlobalMatcher::new(pattern, order)
        .matches(candidates, sentence)
        .collect()
}

fn every_node(sentence: &Sentence, names: &[&str]) -> CandidateMap {
    names.iter().fold(CandidateMap::new(), |map, name| {
        map.with(*name, 0..sentence.len())
    })
}

#[rstest]
fn edge_relation_keeps_only_labelled_pairs(gave: Sentence) {
    let pattern = Pattern::builder()
        .token(TokenSpec::new("c"))
        .token(TokenSpec::new("p"))
        .edge(EdgeConstraint::new("c", "p", has(&["iobj", "nsubj"])))
        .build()
        .expect("valid pattern");
    let candidates = every_node(&gave, &["c", "p"]);
    let results = run(pattern, &candidates, &gave, JoinOrder::Declared);
    let children: Vec<_> = results.iter().filter_map(|result| result.token("c")).collect();
    assert_eq!(children, [0, 2]);
    assert!(results.iter().all(|result| result.token("p") == Some(1)));
}

#[rstest]
fn captured_labels_are_the_matched_subset(gave: Sentence) {
    let pattern = Pattern::builder()
        .token(TokenSpec::new("c"))
        .token(TokenSpec::new("p"))
        .edge(
            EdgeConstraint::new("c", "p", has(&["obj", "dobj", "iobj"]))
                .and_label(LabelPredicate::has_no_label(["conj"])),
        )
        .build()
        .expect("valid pattern");
    let candidates = CandidateMap::new().with("c", [3]).with("p", [1]);
    let results = run(pattern, &candidates, &gave, JoinOrder::Declared);
    let [result] = results.as_slice() else {
        panic!("expected exactly one result, got {results:?}");
    };
    let labels: Vec<_> = result.edge(3, 1).into_iter().collect();
    assert_eq!(labels, ["dobj", "obj"]);
    assert!(result.edge(1, 3).is_empty());
}

#[rstest]
fn shared_variables_must_agree(gave: Sentence) {
    // books -obj-> gave <-nsubj- She, but pens is not an object of gave.
    let pattern = Pattern::builder()
        .token(TokenSpec::new("subject"))
        .token(TokenSpec::new("verb"))
        .token(TokenSpec::new("object"))
        .edge(EdgeConstraint::new("subject", "verb", has(&["nsubj"])))
        .edge(EdgeConstraint::new("object", "verb", has(&["obj"])))
        .build()
        .expect("valid pattern");
    let candidates = every_node(&gave, &["subject", "verb", "object"]);
    let results = run(pattern, &candidates, &gave, JoinOrder::Declared);
    let [result] = results.as_slice() else {
        panic!("expected exactly one result, got {results:?}");
    };
    assert_eq!(result.token("subject"), Some(0));
    assert_eq!(result.token("verb"), Some(1));
    assert_eq!(result.token("object"), Some(3));
    assert_eq!(result.edges().count(), 2);
}

#[rstest]
#[case::declared(JoinOrder::Declared)]
#[case::selectivity(JoinOrder::Selectivity)]
fn empty_relation_stops_before_later_edges(gave: Sentence, #[case] order: JoinOrder) {
    // Nouns are never subjects of nouns, so the first edge is unsatisfiable.
    // Declared order must not query the pronoun/verb pairs of the second
    // edge; selectivity order joins the smaller second edge first.
    let pattern = Pattern::builder()
        .token(TokenSpec::new("a"))
        .token(TokenSpec::new("b"))
        .token(TokenSpec::new("c"))
        .token(TokenSpec::new("d"))
        .edge(EdgeConstraint::new("a", "b", has(&["nsubj"])))
        .edge(EdgeConstraint::new("c", "d", has(&["nsubj"])))
        .build()
        .expect("valid pattern");
    let candidates = CandidateMap::new()
        .with("a", [3, 5])
        .with("b", [3, 5])
        .with("c", [0, 2])
        .with("d", [1]);
    let sentence = Instrumented::new(gave);
    assert!(run(pattern, &candidates, &sentence, order).is_empty());
    let queried = sentence.queried();
    assert!(queried.iter().any(|&(child, _)| child == 3 || child == 5));
    if order == JoinOrder::Declared {
        assert!(queried.iter().all(|&(child, _)| child == 3 || child == 5));
    }
}

#[rstest]
fn empty_join_stops_before_later_edges(gave: Sentence) {
    // She is the subject, him the indirect object: no pronoun is both.
    let pattern = Pattern::builder()
        .token(TokenSpec::new("pronoun"))
        .token(TokenSpec::new("verb"))
        .token(TokenSpec::new("other"))
        .token(TokenSpec::new("coordinator"))
        .token(TokenSpec::new("conjunct"))
        .edge(EdgeConstraint::new("pronoun", "verb", has(&["nsubj"])))
        .edge(EdgeConstraint::new("pronoun", "other", has(&["iobj"])))
        .edge(EdgeConstraint::new("coordinator", "conjunct", has(&["cc"])))
        .build()
        .expect("valid pattern");
    let candidates = CandidateMap::new()
        .with("pronoun", [0, 2])
        .with("verb", [1])
        .with("other", 0..6)
        .with("coordinator", [4])
        .with("conjunct", 0..6);
    let sentence = Instrumented::new(gave);
    assert!(run(pattern, &candidates, &sentence, JoinOrder::Declared).is_empty());
    assert!(sentence.queried().iter().all(|&(child, _)| child != 4));
}

#[rstest]
fn optional_variable_without_candidates_is_vacuous(gave: Sentence) {
    let pattern = Pattern::builder()
        .token(TokenSpec::new("noun"))
        .token(TokenSpec::new("adjective").optional())
        .edge(EdgeConstraint::new("adjective", "noun", has(&["amod"])))
        .build()
        .expect("valid pattern");
    let candidates = CandidateMap::new()
        .with("noun", [3, 5])
        .with("adjective", []);
    let results = run(pattern, &candidates, &gave, JoinOrder::Declared);
    let nouns: Vec<_> = results.iter().filter_map(|result| result.token("noun")).collect();
    assert_eq!(nouns, [3, 5]);
    assert!(results.iter().all(|result| result.token("adjective").is_none()));
    assert!(results.iter().all(|result| result.edges().count() == 0));
}

#[rstest]
fn optional_variable_with_candidates_is_enforced(gave: Sentence) {
    let pattern = Pattern::builder()
        .token(TokenSpec::new("noun"))
        .token(TokenSpec::new("coordinator").optional())
        .edge(EdgeConstraint::new("coordinator", "noun", has(&["cc"])))
        .build()
        .expect("valid pattern");
    let candidates = CandidateMap::new()
        .with("noun", [3, 5])
        .with("coordinator", [4]);
    let results = run(pattern, &candidates, &gave, JoinOrder::Declared);
    let [result] = results.as_slice() else {
        panic!("expected exactly one result, got {results:?}");
    };
    assert_eq!(result.token("noun"), Some(5));
    assert_eq!(result.token("coordinator"), Some(4));
}

#[rstest]
fn required_variable_without_candidates_yields_nothing(gave: Sentence) {
    let pattern = Pattern::builder()
        .token(TokenSpec::new("a"))
        .build()
        .expect("valid pattern");
    let candidates = CandidateMap::new().with("a", []);
    assert!(run(pattern, &candidates, &gave, JoinOrder::Declared).is_empty());
}

#[rstest]
fn uncaptured_variables_are_stripped(gave: Sentence) {
    let pattern = Pattern::builder()
        .token(TokenSpec::new("subject"))
        .token(TokenSpec::new("verb").uncaptured())
        .edge(EdgeConstraint::new("subject", "verb", has(&["nsubj"])))
        .build()
        .expect("valid pattern");
    let candidates = every_node(&gave, &["subject", "verb"]);
    let results = run(pattern, &candidates, &gave, JoinOrder::Declared);
    let [result] = results.as_slice() else {
        panic!("expected exactly one result, got {results:?}");
    };
    assert_eq!(result.token("subject"), Some(0));
    assert_eq!(result.token("verb"), None);
    assert_eq!(
        result.tokens().keys().map(String::as_str).collect::<Vec<_>>(),
        ["subject"]
    );
    assert!(result.edge(0, 1).contains("nsubj"));
}

#[rstest]
#[case::exact(DistanceKind::Exact(1), vec![(0, 2), (3, 5)])]
#[case::up_to(DistanceKind::UpTo(0), vec![(2, 2), (2, 3), (3, 2), (3, 3)])]
fn distance_filters_joined_assignments(
    gave: Sentence,
    #[case] kind: DistanceKind,
    #[case] expected: Vec<(usize, usize)>,
) {
    // Variables appear in no edge, so each contributes its candidates alone.
    let pattern = Pattern::builder()
        .token(TokenSpec::new("first"))
        .token(TokenSpec::new("second"))
        .distance(DistanceConstraint::new("first", "second", kind))
        .build()
        .expect("valid pattern");
    let candidates = CandidateMap::new()
        .with("first", [0, 2, 3])
        .with("second", [2, 3, 5]);
    let pairs: BTreeSet<_> = run(pattern, &candidates, &gave, JoinOrder::Declared)
        .iter()
        .filter_map(|result| Some((result.token("first")?, result.token("second")?)))
        .collect();
    assert_eq!(pairs, expected.into_iter().collect::<BTreeSet<_>>());
}

#[rstest]
fn phrase_filters_joined_assignments(gave: Sentence) {
    let pattern = Pattern::builder()
        .token(TokenSpec::new("first"))
        .token(TokenSpec::new("second"))
        .phrase(PhraseConstraint::pair("first", "second", ["books_and", "and_pens"]))
        .build()
        .expect("valid pattern");
    let candidates = every_node(&gave, &["first", "second"]);
    let pairs: Vec<_> = run(pattern, &candidates, &gave, JoinOrder::Declared)
        .iter()
        .filter_map(|result| Some((result.token("first")?, result.token("second")?)))
        .collect();
    assert_eq!(pairs, [(3, 4), (4, 5)]);
}

#[rstest]
fn constraints_on_absent_variables_hold(gave: Sentence) {
    let pattern = Pattern::builder()
        .token(TokenSpec::new("noun").with_attribute(AttributeKind::Pos, ["NOUN"]))
        .token(TokenSpec::new("missing").optional())
        .distance(DistanceConstraint::new("noun", "missing", DistanceKind::Exact(0)))
        .phrase(PhraseConstraint::pair("noun", "missing", ["x_y"]))
        .build()
        .expect("valid pattern");
    let candidates = CandidateMap::new()
        .with("noun", [3, 5])
        .with("missing", []);
    assert_eq!(
        run(pattern, &candidates, &gave, JoinOrder::Declared).len(),
        2
    );
}

#[rstest]
fn repeated_runs_produce_identical_sequences(gave: Sentence) {
    let pattern = Pattern::builder()
        .token(TokenSpec::new("c"))
        .token(TokenSpec::new("p"))
        .edge(EdgeConstraint::new("c", "p", LabelPredicate::has_no_label(["punct"])))
        .build()
        .expect("valid pattern");
    let candidates = every_node(&gave, &["c", "p"]);
    let matcher = GlobalMatcher::new(pattern, JoinOrder::Selectivity);
    let first: Vec<_> = matcher.matches(&candidates, &gave).collect();
    let second: Vec<_> = matcher.matches(&candidates, &gave).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), gave.len() * gave.len());
}
