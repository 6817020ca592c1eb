//! Core data model for the Arbor structural matching engine.
//!
//! This crate provides the canonical type definitions shared by the Arbor
//! crates: annotated sentence graphs, declarative patterns, assignments,
//! match results, matcher configuration, and errors. It is re-exported by the
//! `arbor` engine crate for stable public consumption.
//!
//! # Core types
//!
//! - [`Sentence`], [`Token`], and [`SentenceGraph`]: annotated sentence graphs
//! - [`Pattern`] and [`TokenSpec`]: variables and their node-level constraints
//! - [`EdgeConstraint`], [`DistanceConstraint`], [`PhraseConstraint`]:
//!   constraints relating variables
//! - [`LabelPredicate`]: predicates over edge labels
//! - [`Assignment`] and [`MatchingResult`]: bindings of variables to nodes
//! - [`MatcherConfig`]: optimisation settings
//! - [`MatchError`] and [`SentenceError`]: structured errors
//!
//! # Example
//!
//! ```
//! use arbor_core::{AttributeKind, Pattern, Sentence, SentenceGraph, Token, TokenSpec};
//!
//! let sentence = Sentence::new(vec![
//!     Token::new("Dogs").with_attribute(AttributeKind::Pos, "NOUN"),
//!     Token::new("bark").with_attribute(AttributeKind::Pos, "VERB"),
//! ]);
//! assert_eq!(sentence.len(), 2);
//!
//! let pattern = Pattern::builder()
//!     .token(TokenSpec::new("noun").with_attribute(AttributeKind::Pos, ["NOUN"]))
//!     .build()?;
//! assert_eq!(pattern.tokens().len(), 1);
//! # Ok::<(), arbor_core::MatchError>(())
//! ```

mod assignment;
mod attribute;
mod config;
mod error;
mod label;
mod pattern;
mod result;
mod sentence;

pub use assignment::Assignment;
pub use attribute::AttributeKind;
pub use config::{JoinOrder, MatcherConfig};
pub use error::{MatchError, SentenceError};
pub use label::{LabelPredicate, satisfy_all};
pub use pattern::{
    AttributeConstraint, DistanceConstraint, DistanceKind, EdgeConstraint, PHRASE_SEPARATOR,
    Pattern, PatternBuilder, PhraseConstraint, TokenSpec,
};
pub use result::MatchingResult;
pub use sentence::{DependencyEdge, Sentence, SentenceGraph, Token};

#[cfg(test)]
mod tests;
