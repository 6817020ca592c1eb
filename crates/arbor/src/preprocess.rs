//! Constraint hoisting.
//!
//! Edge and phrase constraints can only be checked once variables are bound,
//! but each implies a condition on a single node that the per-node matcher
//! can check early: the child of an edge labelled `nsubj` must have an
//! outgoing `nsubj` edge, and the first word of a `New_York` phrase must be
//! `New`. Pushing those conditions down shrinks the candidate sets the
//! global matcher joins.
//!
//! Hoisting only adds necessary conditions, so it never changes which
//! results are produced. Constraints touching an optional variable are left
//! alone: an optional variable may end up absent, in which case its
//! constraints are vacuous and must not restrict the other endpoint.

use std::collections::{BTreeMap, BTreeSet};

use arbor_core::{AttributeConstraint, AttributeKind, LabelPredicate, Pattern, TokenSpec};

#[derive(Default)]
struct Hoisted {
    incoming: Vec<LabelPredicate>,
    outgoing: Vec<LabelPredicate>,
    words: Vec<BTreeSet<String>>,
}

/// Returns a copy of `pattern` with edge and phrase constraints hoisted onto
/// the variables they involve.
///
/// Every positive edge predicate becomes an outgoing-label predicate on the
/// child and an incoming-label predicate on the parent. Every phrase
/// constraint adds, to each participating variable, a word predicate
/// accepting the words that appear at that variable's place in some phrase.
/// Negative edge predicates are never hoisted. The input is not modified and
/// hoisting twice adds nothing new.
///
/// # Example
///
/// ```
/// use arbor::{EdgeConstraint, LabelPredicate, Pattern, TokenSpec, preprocess};
///
/// let pattern = Pattern::builder()
///     .token(TokenSpec::new("child"))
///     .token(TokenSpec::new("parent"))
///     .edge(EdgeConstraint::new("child", "parent", LabelPredicate::has_label(["nsubj"])))
///     .build()?;
/// let hoisted = preprocess(&pattern);
///
/// let child = hoisted.token("child").expect("declared");
/// assert_eq!(child.outgoing(), [LabelPredicate::has_label(["nsubj"])]);
/// let parent = hoisted.token("parent").expect("declared");
/// assert_eq!(parent.incoming(), [LabelPredicate::has_label(["nsubj"])]);
/// # Ok::<(), arbor::MatchError>(())
/// ```
#[must_use]
pub fn preprocess(pattern: &Pattern) -> Pattern {
    let required = |name: &str| pattern.token(name).is_some_and(|spec| !spec.is_optional());
    let mut hoisted: BTreeMap<&str, Hoisted> = BTreeMap::new();

    for edge in pattern.edges() {
        if !(required(edge.child()) && required(edge.parent())) {
            continue;
        }
        for label in edge.labels().iter().filter(|label| label.is_positive()) {
            hoisted
                .entry(edge.child())
                .or_default()
                .outgoing
                .push(label.clone());
            hoisted
                .entry(edge.parent())
                .or_default()
                .incoming
                .push(label.clone());
        }
    }

    for phrase in pattern.phrases() {
        let variables = phrase.variables();
        if !variables.iter().all(|name| required(*name)) {
            continue;
        }
        let Ok(columns) = phrase.words_by_position() else {
            continue;
        };
        for (name, words) in variables.into_iter().zip(columns) {
            hoisted.entry(name).or_default().words.push(words);
        }
    }

    pattern.map_tokens(|spec| {
        let extra = hoisted.get(spec.name());
        extra.into_iter().fold(spec, refine)
    })
}

fn refine(spec: TokenSpec, extra: &Hoisted) -> TokenSpec {
    let with_outgoing = extra.outgoing.iter().fold(spec, |acc, label| {
        if acc.outgoing().contains(label) {
            acc
        } else {
            acc.with_outgoing(label.clone())
        }
    });
    let with_incoming = extra.incoming.iter().fold(with_outgoing, |acc, label| {
        if acc.incoming().contains(label) {
            acc
        } else {
            acc.with_incoming(label.clone())
        }
    });
    extra.words.iter().fold(with_incoming, |acc, words| {
        let constraint = AttributeConstraint::new(AttributeKind::Word, words.iter().cloned());
        if acc.attributes().contains(&constraint) {
            acc
        } else {
            acc.with_constraint(constraint)
        }
    })
}
