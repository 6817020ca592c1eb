//! Shared fixtures for engine tests: annotated sentences, an instrumented
//! sentence graph, and a brute-force reference matcher.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use rstest::fixture;

use crate::{
    AttributeKind, Matcher, MatcherConfig, Pattern, Sentence, SentenceGraph, Token, satisfy_all,
};

/// One set of bindings per result, keyed by variable name.
pub(super) type Bindings = BTreeSet<BTreeMap<String, usize>>;

/// Builds a sentence from `(word, pos)` pairs and `(child, parent, label)`
/// edges. The fine tag mirrors the coarse tag.
pub(super) fn annotated(tokens: &[(&str, &str)], edges: &[(usize, usize, &str)]) -> Sentence {
    let mut sentence = Sentence::new(
        tokens
            .iter()
            .map(|(word, pos)| {
                Token::new(*word)
                    .with_attribute(AttributeKind::Lemma, word.to_lowercase())
                    .with_attribute(AttributeKind::Pos, *pos)
                    .with_attribute(AttributeKind::Tag, *pos)
            })
            .collect(),
    );
    for (child, parent, label) in edges {
        sentence
            .add_edge(*child, *parent, *label)
            .expect("fixture edge is valid");
    }
    sentence
}

/// "The quick dog chased the cat in New York".
#[fixture]
pub(super) fn chased() -> Sentence {
    annotated(
        &[
            ("The", "DET"),
            ("quick", "ADJ"),
            ("dog", "NOUN"),
            ("chased", "VERB"),
            ("the", "DET"),
            ("cat", "NOUN"),
            ("in", "ADP"),
            ("New", "PROPN"),
            ("York", "PROPN"),
        ],
        &[
            (0, 2, "det"),
            (1, 2, "amod"),
            (2, 3, "nsubj"),
            (4, 5, "det"),
            (5, 3, "obj"),
            (6, 8, "case"),
            (7, 8, "compound"),
            (8, 3, "obl"),
        ],
    )
}

/// "She gave him books and pens", with a doubly labelled object edge.
#[fixture]
pub(super) fn gave() -> Sentence {
    annotated(
        &[
            ("She", "PRON"),
            ("gave", "VERB"),
            ("him", "PRON"),
            ("books", "NOUN"),
            ("and", "CCONJ"),
            ("pens", "NOUN"),
        ],
        &[
            (0, 1, "nsubj"),
            (2, 1, "iobj"),
            (3, 1, "obj"),
            (3, 1, "dobj"),
            (4, 5, "cc"),
            (5, 3, "conj"),
        ],
    )
}

/// A sentence graph that records every pair whose labels are queried.
pub(super) struct Instrumented {
    inner: Sentence,
    queried: RefCell<Vec<(usize, usize)>>,
}

impl Instrumented {
    pub(super) const fn new(inner: Sentence) -> Self {
        Self {
            inner,
            queried: RefCell::new(Vec::new()),
        }
    }

    pub(super) fn queried(&self) -> Vec<(usize, usize)> {
        self.queried.borrow().clone()
    }
}

impl SentenceGraph for Instrumented {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn text(&self, position: usize) -> Option<&str> {
        self.inner.text(position)
    }

    fn attribute_values(&self, position: usize, kind: AttributeKind) -> Vec<&str> {
        self.inner.attribute_values(position, kind)
    }

    fn labels(&self, child: usize, parent: usize) -> BTreeSet<&str> {
        self.queried.borrow_mut().push((child, parent));
        self.inner.labels(child, parent)
    }

    fn incoming_labels(&self, position: usize) -> BTreeSet<&str> {
        self.inner.incoming_labels(position)
    }

    fn outgoing_labels(&self, position: usize) -> BTreeSet<&str> {
        self.inner.outgoing_labels(position)
    }
}

/// Runs `pattern` through a [`Matcher`] and collects the bindings.
pub(super) fn engine_bindings(
    pattern: &Pattern,
    sentence: &Sentence,
    config: MatcherConfig,
) -> Bindings {
    let matcher = Matcher::new([("pattern", pattern.clone())], config).expect("compiles");
    matcher
        .attach(sentence)
        .matches_for("pattern")
        .expect("known pattern")
        .map(|result| result.tokens().clone())
        .collect()
}

/// Enumerates every assignment of variables to nodes and keeps those that
/// satisfy the pattern as written, without hoisting or joining.
pub(super) fn reference_bindings(pattern: &Pattern, sentence: &Sentence) -> Bindings {
    let mut present: Vec<(String, Vec<usize>)> = Vec::new();
    for spec in pattern.tokens() {
        let positions: Vec<usize> = (0..sentence.len())
            .filter(|&position| {
                spec.attributes().iter().all(|constraint| {
                    sentence
                        .attribute_values(position, constraint.kind())
                        .into_iter()
                        .any(|value| constraint.accepts(value))
                }) && satisfy_all(spec.incoming(), &sentence.incoming_labels(position)).is_some()
                    && satisfy_all(spec.outgoing(), &sentence.outgoing_labels(position))
                        .is_some()
            })
            .collect();
        if positions.is_empty() {
            if spec.is_optional() {
                continue;
            }
            return Bindings::new();
        }
        present.push((spec.name().to_owned(), positions));
    }

    let mut assignments = vec![BTreeMap::new()];
    for (name, positions) in &present {
        assignments = assignments
            .into_iter()
            .flat_map(|partial: BTreeMap<String, usize>| {
                positions.iter().map(move |&position| {
                    let mut extended = partial.clone();
                    extended.insert(name.clone(), position);
                    extended
                })
            })
            .collect();
    }

    assignments
        .into_iter()
        .filter(|bindings| satisfies(pattern, sentence, bindings))
        .collect()
}

fn satisfies(pattern: &Pattern, sentence: &Sentence, bindings: &BTreeMap<String, usize>) -> bool {
    let edges_hold = pattern.edges().iter().all(|edge| {
        match (bindings.get(edge.child()), bindings.get(edge.parent())) {
            (Some(&child), Some(&parent)) => {
                satisfy_all(edge.labels(), &sentence.labels(child, parent)).is_some()
            }
            _ => true,
        }
    });
    let distances_hold = pattern.distances().iter().all(|distance| {
        match (bindings.get(distance.first()), bindings.get(distance.second())) {
            (Some(&first), Some(&second)) => distance.satisfied(first, second),
            _ => true,
        }
    });
    let phrases_hold = pattern.phrases().iter().all(|phrase| {
        let words: Option<Vec<&str>> = phrase
            .variables()
            .into_iter()
            .map(|name| bindings.get(name).and_then(|&position| sentence.text(position)))
            .collect();
        words.is_none_or(|found| phrase.accepts(found))
    });
    edges_hold && distances_hold && phrases_hold
}
