//! The single-token matching boundary.
//!
//! The per-node matcher delegates attribute predicates to an
//! [`AttributeMatcher`], which compiles a conjunction of predicates once per
//! pattern variable and then reports the spans of nodes that satisfy it in
//! each sentence. [`LiteralAttributeMatcher`] is the built-in implementation;
//! callers with their own token-level engine can plug it in through
//! [`Matcher::with_attribute_matcher`](crate::Matcher::with_attribute_matcher).

use std::fmt;
use std::ops::Range;

use arbor_core::{AttributeConstraint, MatchError, SentenceGraph};

/// Compiles attribute predicates into reusable token matchers.
///
/// # Example
///
/// ```
/// use std::ops::Range;
/// use arbor::{AttributeConstraint, AttributeMatcher, CompiledAttributes, MatchError, SentenceGraph};
///
/// /// Matches every node, ignoring the predicates.
/// #[derive(Debug)]
/// struct Everything;
///
/// impl CompiledAttributes for Everything {
///     fn find(&self, sentence: &dyn SentenceGraph) -> Vec<Range<usize>> {
///         (0..sentence.len()).map(|position| position..position + 1).collect()
///     }
/// }
///
/// struct EverythingMatcher;
///
/// impl AttributeMatcher for EverythingMatcher {
///     fn compile(
///         &self,
///         _constraints: &[AttributeConstraint],
///     ) -> Result<Box<dyn CompiledAttributes>, MatchError> {
///         Ok(Box::new(Everything))
///     }
/// }
/// ```
pub trait AttributeMatcher {
    /// Compiles the conjunction of `constraints`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidPatternShape`] when the predicates cannot
    /// be expressed by this matcher.
    fn compile(
        &self,
        constraints: &[AttributeConstraint],
    ) -> Result<Box<dyn CompiledAttributes>, MatchError>;
}

/// A compiled conjunction of attribute predicates.
///
/// Compiled matchers are shared between threads by the facade, so they must
/// be immutable once built.
pub trait CompiledAttributes: fmt::Debug + Send + Sync {
    /// Returns the spans of nodes satisfying the predicates.
    ///
    /// Each span is expected to cover exactly one node.
    fn find(&self, sentence: &dyn SentenceGraph) -> Vec<Range<usize>>;
}

/// Matches attribute values by literal string equality.
///
/// A node satisfies a constraint when any of its values for the
/// constraint's attribute kind is accepted. Constraints are conjoined, so a
/// variable without constraints matches every node.
///
/// # Example
///
/// ```
/// use arbor::{
///     AttributeConstraint, AttributeKind, AttributeMatcher, CompiledAttributes,
///     LiteralAttributeMatcher, Sentence, Token,
/// };
///
/// let sentence = Sentence::new(vec![
///     Token::new("the").with_attribute(AttributeKind::Pos, "DET"),
///     Token::new("dog").with_attribute(AttributeKind::Pos, "NOUN"),
/// ]);
/// let nouns = LiteralAttributeMatcher
///     .compile(&[AttributeConstraint::new(AttributeKind::Pos, ["NOUN"])])?;
/// assert_eq!(nouns.find(&sentence), [1..2]);
/// # Ok::<(), arbor::MatchError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralAttributeMatcher;

impl AttributeMatcher for LiteralAttributeMatcher {
    fn compile(
        &self,
        constraints: &[AttributeConstraint],
    ) -> Result<Box<dyn CompiledAttributes>, MatchError> {
        Ok(Box::new(LiteralAttributes {
            constraints: constraints.to_vec(),
        }))
    }
}

#[derive(Debug)]
struct LiteralAttributes {
    constraints: Vec<AttributeConstraint>,
}

impl LiteralAttributes {
    fn accepts(&self, sentence: &dyn SentenceGraph, position: usize) -> bool {
        self.constraints.iter().all(|constraint| {
            sentence
                .attribute_values(position, constraint.kind())
                .into_iter()
                .any(|value| constraint.accepts(value))
        })
    }
}

impl CompiledAttributes for LiteralAttributes {
    fn find(&self, sentence: &dyn SentenceGraph) -> Vec<Range<usize>> {
        (0..sentence.len())
            .filter(|&position| self.accepts(sentence, position))
            .map(|position| position..position + 1)
            .collect()
    }
}
