//! Declarative structural patterns over sentence graphs.
//!
//! A [`Pattern`] names a set of variables ([`TokenSpec`]) and constrains how
//! the nodes bound to them relate: through labelled edges
//! ([`EdgeConstraint`]), linear distance ([`DistanceConstraint`]), and joined
//! surface text ([`PhraseConstraint`]). Patterns are validated when built or
//! deserialized, so every constraint refers to a declared variable.

mod distance;
mod edge;
mod phrase;
mod token;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

pub use distance::{DistanceConstraint, DistanceKind};
pub use edge::EdgeConstraint;
pub use phrase::{PHRASE_SEPARATOR, PhraseConstraint};
pub use token::{AttributeConstraint, TokenSpec};

/// A validated, immutable structural pattern.
///
/// # Example
///
/// ```
/// use arbor_core::{AttributeKind, EdgeConstraint, LabelPredicate, Pattern, TokenSpec};
///
/// let pattern = Pattern::builder()
///     .token(TokenSpec::new("subject"))
///     .token(TokenSpec::new("verb").with_attribute(AttributeKind::Pos, ["VERB"]))
///     .edge(EdgeConstraint::new(
///         "subject",
///         "verb",
///         LabelPredicate::has_label(["nsubj"]),
///     ))
///     .build()?;
/// assert_eq!(pattern.tokens().len(), 2);
/// assert!(pattern.token("verb").is_some());
/// # Ok::<(), arbor_core::MatchError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PatternSpec")]
pub struct Pattern {
    tokens: Vec<TokenSpec>,
    edges: Vec<EdgeConstraint>,
    distances: Vec<DistanceConstraint>,
    phrases: Vec<PhraseConstraint>,
}

impl Pattern {
    /// Starts building a pattern.
    #[must_use]
    pub fn builder() -> PatternBuilder {
        PatternBuilder::default()
    }

    /// Returns the variable specifications in declaration order.
    #[must_use]
    pub fn tokens(&self) -> &[TokenSpec] {
        &self.tokens
    }

    /// Returns the specification of the named variable.
    #[must_use]
    pub fn token(&self, name: &str) -> Option<&TokenSpec> {
        self.tokens.iter().find(|token| token.name() == name)
    }

    /// Returns the edge constraints in declaration order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeConstraint] {
        &self.edges
    }

    /// Returns the distance constraints.
    #[must_use]
    pub fn distances(&self) -> &[DistanceConstraint] {
        &self.distances
    }

    /// Returns the phrase constraints.
    #[must_use]
    pub fn phrases(&self) -> &[PhraseConstraint] {
        &self.phrases
    }

    /// Returns a copy of the pattern with every token specification passed
    /// through `refine`.
    ///
    /// Variable names are restored after refinement, so the set of variables
    /// and every constraint referring to them stay valid.
    #[must_use]
    pub fn map_tokens<F>(&self, mut refine: F) -> Self
    where
        F: FnMut(TokenSpec) -> TokenSpec,
    {
        let tokens = self
            .tokens
            .iter()
            .cloned()
            .map(|spec| {
                let name = spec.name.clone();
                let mut refined = refine(spec);
                refined.name = name;
                refined
            })
            .collect();
        Self {
            tokens,
            ..self.clone()
        }
    }

    fn validate(self) -> Result<Self, MatchError> {
        if self.tokens.is_empty() {
            return Err(MatchError::invalid_shape("pattern declares no tokens"));
        }

        let mut names = BTreeSet::new();
        for token in &self.tokens {
            if token.name().is_empty() {
                return Err(MatchError::invalid_shape("token name must not be empty"));
            }
            if !names.insert(token.name()) {
                return Err(MatchError::invalid_shape(format!(
                    "token '{}' is declared more than once",
                    token.name()
                )));
            }
        }

        let require = |name: &str, context: &str| {
            if names.contains(name) {
                Ok(())
            } else {
                Err(MatchError::invalid_shape(format!(
                    "{context} refers to undeclared token '{name}'"
                )))
            }
        };

        for edge in &self.edges {
            require(edge.child(), "edge")?;
            require(edge.parent(), "edge")?;
            if edge.child() == edge.parent() {
                return Err(MatchError::invalid_shape(format!(
                    "edge connects token '{}' to itself",
                    edge.child()
                )));
            }
            if edge.labels().is_empty() {
                return Err(MatchError::invalid_shape(format!(
                    "edge from '{}' to '{}' has no label predicate",
                    edge.child(),
                    edge.parent()
                )));
            }
        }

        for distance in &self.distances {
            require(distance.first(), "distance")?;
            require(distance.second(), "distance")?;
        }

        for phrase in &self.phrases {
            for name in phrase.variables() {
                require(name, "phrase")?;
            }
            if phrase.phrases().is_empty() {
                return Err(MatchError::invalid_shape("phrase constraint accepts no phrases"));
            }
            phrase.words_by_position()?;
        }

        Ok(self)
    }
}

/// Incrementally assembles a [`Pattern`].
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    tokens: Vec<TokenSpec>,
    edges: Vec<EdgeConstraint>,
    distances: Vec<DistanceConstraint>,
    phrases: Vec<PhraseConstraint>,
}

impl PatternBuilder {
    /// Declares a variable.
    #[must_use]
    pub fn token(mut self, spec: TokenSpec) -> Self {
        self.tokens.push(spec);
        self
    }

    /// Adds an edge constraint.
    #[must_use]
    pub fn edge(mut self, edge: EdgeConstraint) -> Self {
        self.edges.push(edge);
        self
    }

    /// Adds a distance constraint.
    #[must_use]
    pub fn distance(mut self, distance: DistanceConstraint) -> Self {
        self.distances.push(distance);
        self
    }

    /// Adds a phrase constraint.
    #[must_use]
    pub fn phrase(mut self, phrase: PhraseConstraint) -> Self {
        self.phrases.push(phrase);
        self
    }

    /// Validates and returns the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidPatternShape`] when the pattern has no
    /// tokens, repeats a variable name, refers to an undeclared variable, has
    /// an edge without predicates or between a variable and itself, or holds
    /// a phrase that does not split into the constraint's arity.
    pub fn build(self) -> Result<Pattern, MatchError> {
        Pattern {
            tokens: self.tokens,
            edges: self.edges,
            distances: self.distances,
            phrases: self.phrases,
        }
        .validate()
    }
}

/// Unvalidated wire form of a [`Pattern`].
#[derive(Deserialize)]
struct PatternSpec {
    tokens: Vec<TokenSpec>,
    #[serde(default)]
    edges: Vec<EdgeConstraint>,
    #[serde(default)]
    distances: Vec<DistanceConstraint>,
    #[serde(default, alias = "concats")]
    phrases: Vec<PhraseConstraint>,
}

impl TryFrom<PatternSpec> for Pattern {
    type Error = MatchError;

    fn try_from(spec: PatternSpec) -> Result<Self, Self::Error> {
        Self {
            tokens: spec.tokens,
            edges: spec.edges,
            distances: spec.distances,
            phrases: spec.phrases,
        }
        .validate()
    }
}
