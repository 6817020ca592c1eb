//! The match facade: named compiled patterns applied to one sentence.
//!
//! A [`Matcher`] owns every compiled pattern and never changes after
//! construction, so it can be shared between threads. Attaching it to a
//! sentence yields a [`Match`], which re-runs the pattern on every
//! [`matches_for`](Match::matches_for) call and caches nothing.

use std::collections::BTreeMap;

use arbor_core::{MatchError, MatcherConfig, Pattern, SentenceGraph};
use tracing::debug;

use crate::attributes::{AttributeMatcher, LiteralAttributeMatcher};
use crate::global::{GlobalMatcher, Matches};
use crate::node::NodeMatcher;
use crate::preprocess::preprocess;

const MATCHER_TARGET: &str = "arbor::matcher";

#[derive(Debug)]
struct CompiledPattern {
    nodes: NodeMatcher,
    global: GlobalMatcher,
}

/// A set of named, compiled patterns.
///
/// # Example
///
/// ```
/// use arbor::{AttributeKind, Matcher, MatcherConfig, Pattern, Sentence, Token, TokenSpec};
///
/// let nouns = Pattern::builder()
///     .token(TokenSpec::new("noun").with_attribute(AttributeKind::Pos, ["NOUN"]))
///     .build()?;
/// let matcher = Matcher::new([("nouns", nouns)], MatcherConfig::default())?;
/// assert_eq!(matcher.names().collect::<Vec<_>>(), ["nouns"]);
///
/// let sentence = Sentence::new(vec![
///     Token::new("cats").with_attribute(AttributeKind::Pos, "NOUN"),
///     Token::new("and").with_attribute(AttributeKind::Pos, "CCONJ"),
///     Token::new("dogs").with_attribute(AttributeKind::Pos, "NOUN"),
/// ]);
/// let found = matcher.attach(&sentence).matches_for("nouns")?.count();
/// assert_eq!(found, 2);
/// # Ok::<(), arbor::MatchError>(())
/// ```
#[derive(Debug)]
pub struct Matcher {
    patterns: BTreeMap<String, CompiledPattern>,
    config: MatcherConfig,
}

impl Matcher {
    /// Compiles `patterns` with the literal attribute matcher.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidPatternShape`] when two patterns share a
    /// name.
    pub fn new<I, S>(patterns: I, config: MatcherConfig) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = (S, Pattern)>,
        S: Into<String>,
    {
        Self::with_attribute_matcher(patterns, config, &LiteralAttributeMatcher)
    }

    /// Compiles `patterns`, delegating attribute predicates to `attributes`.
    ///
    /// When the configuration enables hoisting, each pattern is preprocessed
    /// before its per-node matcher is compiled. The global matcher always
    /// enforces the pattern as written.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidPatternShape`] when two patterns share a
    /// name, and propagates any error from `attributes`.
    pub fn with_attribute_matcher<I, S>(
        patterns: I,
        config: MatcherConfig,
        attributes: &dyn AttributeMatcher,
    ) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = (S, Pattern)>,
        S: Into<String>,
    {
        let mut compiled = BTreeMap::new();
        for (raw_name, pattern) in patterns {
            let name: String = raw_name.into();
            if compiled.contains_key(&name) {
                return Err(MatchError::invalid_shape(format!(
                    "pattern '{name}' is registered more than once"
                )));
            }
            let nodes = if config.hoist_constraints() {
                NodeMatcher::compile(&preprocess(&pattern), attributes)?
            } else {
                NodeMatcher::compile(&pattern, attributes)?
            };
            debug!(
                target: MATCHER_TARGET,
                pattern = name.as_str(),
                tokens = pattern.tokens().len(),
                edges = pattern.edges().len(),
                hoisted = config.hoist_constraints(),
                "compiled pattern"
            );
            let global = GlobalMatcher::new(pattern, config.join_order());
            compiled.insert(name, CompiledPattern { nodes, global });
        }
        Ok(Self {
            patterns: compiled,
            config,
        })
    }

    /// Returns the configuration the patterns were compiled with.
    #[must_use]
    pub const fn config(&self) -> MatcherConfig {
        self.config
    }

    /// Returns the pattern names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    /// Binds the matcher to one sentence.
    #[must_use]
    pub fn attach<'a>(&'a self, sentence: &'a dyn SentenceGraph) -> Match<'a> {
        Match {
            matcher: self,
            sentence,
        }
    }
}

/// A [`Matcher`] bound to one sentence.
pub struct Match<'a> {
    matcher: &'a Matcher,
    sentence: &'a dyn SentenceGraph,
}

impl<'a> Match<'a> {
    /// Returns the pattern names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.matcher.names()
    }

    /// Matches the named pattern against the sentence.
    ///
    /// A required variable without candidates is not an error here: the
    /// returned sequence is simply empty.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownPattern`] when no pattern has this name,
    /// and [`MatchError::InvalidPatternShape`] when a custom attribute matcher
    /// reports a span wider than one node.
    pub fn matches_for(&self, name: &str) -> Result<Matches<'a>, MatchError> {
        let compiled = self
            .matcher
            .patterns
            .get(name)
            .ok_or_else(|| MatchError::unknown_pattern(name))?;
        let pattern = compiled.global.pattern();
        match compiled.nodes.match_nodes(self.sentence) {
            Ok(candidates) => {
                debug!(target: MATCHER_TARGET, pattern = name, "matching pattern");
                Ok(compiled.global.matches(&candidates, self.sentence))
            }
            Err(MatchError::UnsatisfiedRequiredVariable { variable }) => {
                debug!(
                    target: MATCHER_TARGET,
                    pattern = name,
                    variable = variable.as_str(),
                    "required variable has no candidates"
                );
                Ok(Matches::empty(pattern, self.sentence))
            }
            Err(other) => Err(other),
        }
    }
}
