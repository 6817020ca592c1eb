//! Arbor: structural pattern matching over dependency sentence graphs.
//!
//! This facade crate re-exports the stable model types from [`arbor_core`]
//! and provides the [`Matcher`] entrypoint. A matcher compiles a set of named
//! [`Pattern`]s once; attaching it to a sentence yields a [`Match`] from which
//! the results of each pattern are drawn lazily.
//!
//! Matching runs in two phases. The per-node phase ([`NodeMatcher`]) computes
//! the candidate nodes of every pattern variable from its attribute and label
//! constraints, after the [`preprocess`] step has pushed edge and phrase
//! constraints down to the variables they involve. The global phase
//! ([`GlobalMatcher`]) joins the edge relations between candidates and
//! filters the joined assignments by distance and phrase constraints.
//!
//! # Example
//!
//! ```
//! use arbor::{
//!     AttributeKind, EdgeConstraint, LabelPredicate, Matcher, MatcherConfig, Pattern, Sentence,
//!     Token, TokenSpec,
//! };
//!
//! let mut sentence = Sentence::new(vec![
//!     Token::new("Dogs").with_attribute(AttributeKind::Pos, "NOUN"),
//!     Token::new("bark").with_attribute(AttributeKind::Pos, "VERB"),
//! ]);
//! sentence.add_edge(0, 1, "nsubj")?;
//!
//! let pattern = Pattern::builder()
//!     .token(TokenSpec::new("subject"))
//!     .token(TokenSpec::new("verb").with_attribute(AttributeKind::Pos, ["VERB"]))
//!     .edge(EdgeConstraint::new("subject", "verb", LabelPredicate::has_label(["nsubj"])))
//!     .build()?;
//! let matcher = Matcher::new([("subject", pattern)], MatcherConfig::default())?;
//!
//! let results: Vec<_> = matcher.attach(&sentence).matches_for("subject")?.collect();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results.first().and_then(|result| result.token("verb")), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod attributes;
mod global;
mod matcher;
mod node;
mod preprocess;

pub use arbor_core::{
    Assignment, AttributeConstraint, AttributeKind, DependencyEdge, DistanceConstraint,
    DistanceKind, EdgeConstraint, JoinOrder, LabelPredicate, MatchError, MatcherConfig,
    MatchingResult, PHRASE_SEPARATOR, Pattern, PatternBuilder, PhraseConstraint, Sentence,
    SentenceError, SentenceGraph, Token, TokenSpec, satisfy_all,
};

pub use attributes::{AttributeMatcher, CompiledAttributes, LiteralAttributeMatcher};
pub use global::{GlobalMatcher, Matches};
pub use matcher::{Match, Matcher};
pub use node::{CandidateMap, NodeMatcher};
pub use preprocess::preprocess;

#[cfg(test)]
mod tests;
