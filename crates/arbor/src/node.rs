//! Per-node matching: candidate nodes for every pattern variable.

use std::collections::{BTreeMap, BTreeSet};

use arbor_core::{LabelPredicate, MatchError, Pattern, SentenceGraph, satisfy_all};
use tracing::trace;

use crate::attributes::{AttributeMatcher, CompiledAttributes};

const NODE_TARGET: &str = "arbor::node";

static NO_CANDIDATES: BTreeSet<usize> = BTreeSet::new();

/// The candidate node positions of each pattern variable.
///
/// Optional variables without candidates are present with an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateMap {
    candidates: BTreeMap<String, BTreeSet<usize>>,
}

impl CandidateMap {
    /// Creates an empty candidate map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with the candidates of `name` replaced.
    #[must_use]
    pub fn with<I>(mut self, name: impl Into<String>, positions: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.candidates
            .insert(name.into(), positions.into_iter().collect());
        self
    }

    /// Returns the candidates of `name`, empty when the name is unknown.
    #[must_use]
    pub fn get(&self, name: &str) -> &BTreeSet<usize> {
        self.candidates.get(name).unwrap_or(&NO_CANDIDATES)
    }

    /// Returns the variables and their candidates in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<usize>)> {
        self.candidates
            .iter()
            .map(|(name, positions)| (name.as_str(), positions))
    }
}

#[derive(Debug)]
struct CompiledNode {
    name: String,
    optional: bool,
    attributes: Box<dyn CompiledAttributes>,
    incoming: Vec<LabelPredicate>,
    outgoing: Vec<LabelPredicate>,
}

impl CompiledNode {
    fn candidates(&self, sentence: &dyn SentenceGraph) -> Result<BTreeSet<usize>, MatchError> {
        let mut positions = BTreeSet::new();
        for span in self.attributes.find(sentence) {
            if span.len() != 1 || span.start >= sentence.len() {
                return Err(MatchError::invalid_shape(format!(
                    "token '{}' matched span {span:?}, expected a single node",
                    self.name
                )));
            }
            positions.insert(span.start);
        }
        positions.retain(|&position| {
            satisfy_all(&self.incoming, &sentence.incoming_labels(position)).is_some()
                && satisfy_all(&self.outgoing, &sentence.outgoing_labels(position)).is_some()
        });
        Ok(positions)
    }
}

/// Computes candidate nodes for every variable of one pattern.
///
/// A node is a candidate when it satisfies the variable's attribute
/// constraints, as judged by the [`AttributeMatcher`] the pattern was
/// compiled with, and its incoming and outgoing edge labels satisfy the
/// variable's label predicates.
///
/// # Example
///
/// ```
/// use arbor::{
///     AttributeKind, LiteralAttributeMatcher, NodeMatcher, Pattern, Sentence, Token, TokenSpec,
/// };
///
/// let sentence = Sentence::new(vec![
///     Token::new("the").with_attribute(AttributeKind::Pos, "DET"),
///     Token::new("dog").with_attribute(AttributeKind::Pos, "NOUN"),
/// ]);
/// let pattern = Pattern::builder()
///     .token(TokenSpec::new("noun").with_attribute(AttributeKind::Pos, ["NOUN"]))
///     .build()?;
/// let matcher = NodeMatcher::compile(&pattern, &LiteralAttributeMatcher)?;
/// let candidates = matcher.match_nodes(&sentence)?;
/// assert_eq!(candidates.get("noun").iter().copied().collect::<Vec<_>>(), [1]);
/// # Ok::<(), arbor::MatchError>(())
/// ```
#[derive(Debug)]
pub struct NodeMatcher {
    nodes: Vec<CompiledNode>,
}

impl NodeMatcher {
    /// Compiles the node-level constraints of every variable in `pattern`.
    ///
    /// # Errors
    ///
    /// Propagates any error from `attributes` compiling a variable's
    /// attribute constraints.
    pub fn compile(
        pattern: &Pattern,
        attributes: &dyn AttributeMatcher,
    ) -> Result<Self, MatchError> {
        let nodes = pattern
            .tokens()
            .iter()
            .map(|spec| -> Result<CompiledNode, MatchError> {
                Ok(CompiledNode {
                    name: spec.name().to_owned(),
                    optional: spec.is_optional(),
                    attributes: attributes.compile(spec.attributes())?,
                    incoming: spec.incoming().to_vec(),
                    outgoing: spec.outgoing().to_vec(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { nodes })
    }

    /// Computes the candidate map for `sentence`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnsatisfiedRequiredVariable`] for the first
    /// required variable without candidates, and
    /// [`MatchError::InvalidPatternShape`] when the attribute matcher reports
    /// a span that is not exactly one node of the sentence.
    pub fn match_nodes(&self, sentence: &dyn SentenceGraph) -> Result<CandidateMap, MatchError> {
        let mut map = CandidateMap::new();
        for node in &self.nodes {
            let positions = node.candidates(sentence)?;
            trace!(
                target: NODE_TARGET,
                variable = node.name.as_str(),
                candidates = positions.len(),
                "computed candidates"
            );
            if positions.is_empty() && !node.optional {
                return Err(MatchError::unsatisfied(node.name.clone()));
            }
            map = map.with(node.name.clone(), positions);
        }
        Ok(map)
    }
}
