//! Sentence graphs with bidirectional edge indexing.
//!
//! A sentence is an arena of tokens addressed by linear position plus a list
//! of labelled dependency edges directed from a child to its governing
//! parent. Adjacency in both directions is kept as an index of edge slots per
//! position, so no token ever holds a reference to another.

use std::collections::{BTreeMap, BTreeSet};

use crate::attribute::AttributeKind;
use crate::error::SentenceError;

/// Read access to an annotated sentence graph.
///
/// This is the boundary the matching engine consumes. Edges run from a child
/// to its parent: a token's *outgoing* labels are those on edges to its
/// parents, and its *incoming* labels are those on edges from its children.
pub trait SentenceGraph {
    /// Returns the number of tokens in the sentence.
    fn len(&self) -> usize;

    /// Returns whether the sentence has no tokens.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the surface text of the token at `position`.
    fn text(&self, position: usize) -> Option<&str>;

    /// Returns the values the token at `position` carries for `kind`.
    fn attribute_values(&self, position: usize, kind: AttributeKind) -> Vec<&str>;

    /// Returns the labels on edges from `child` to `parent`.
    fn labels(&self, child: usize, parent: usize) -> BTreeSet<&str>;

    /// Returns the labels on edges arriving at `position` from its children.
    fn incoming_labels(&self, position: usize) -> BTreeSet<&str>;

    /// Returns the labels on edges leaving `position` towards its parents.
    fn outgoing_labels(&self, position: usize) -> BTreeSet<&str>;
}

/// A single annotated token.
///
/// # Example
///
/// ```
/// use arbor_core::{AttributeKind, Token};
///
/// let token = Token::new("dogs")
///     .with_attribute(AttributeKind::Lemma, "dog")
///     .with_attribute(AttributeKind::Pos, "NOUN");
/// assert_eq!(token.text(), "dogs");
/// assert_eq!(token.values(AttributeKind::Lemma).collect::<Vec<_>>(), ["dog"]);
/// assert_eq!(token.values(AttributeKind::Word).collect::<Vec<_>>(), ["dogs"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    attributes: BTreeMap<AttributeKind, Vec<String>>,
}

impl Token {
    /// Creates a token whose word attribute is its surface text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut attributes = BTreeMap::new();
        attributes.insert(AttributeKind::Word, vec![text.clone()]);
        Self { text, attributes }
    }

    /// Adds a value for the given attribute kind.
    #[must_use]
    pub fn with_attribute(mut self, kind: AttributeKind, value: impl Into<String>) -> Self {
        self.attributes.entry(kind).or_default().push(value.into());
        self
    }

    /// Returns the surface text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the values carried for `kind`, in insertion order.
    pub fn values(&self, kind: AttributeKind) -> impl Iterator<Item = &str> {
        self.attributes
            .get(&kind)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

/// A labelled dependency edge from a child token to its parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    child: usize,
    parent: usize,
    label: String,
}

impl DependencyEdge {
    /// Returns the child position.
    #[must_use]
    pub const fn child(&self) -> usize {
        self.child
    }

    /// Returns the parent position.
    #[must_use]
    pub const fn parent(&self) -> usize {
        self.parent
    }

    /// Returns the relation label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An owned sentence graph.
///
/// # Example
///
/// ```
/// use arbor_core::{Sentence, SentenceGraph, Token};
///
/// let mut sentence = Sentence::new(vec![Token::new("dogs"), Token::new("bark")]);
/// sentence.add_edge(0, 1, "nsubj")?;
/// assert_eq!(sentence.labels(0, 1).into_iter().collect::<Vec<_>>(), ["nsubj"]);
/// assert!(sentence.labels(1, 0).is_empty());
/// # Ok::<(), arbor_core::SentenceError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
    edges: Vec<DependencyEdge>,
    /// Edge slots leaving each position (towards its parents).
    heads_index: Vec<Vec<usize>>,
    /// Edge slots arriving at each position (from its children).
    dependents_index: Vec<Vec<usize>>,
}

impl Sentence {
    /// Creates a sentence with the given tokens and no edges.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let len = tokens.len();
        Self {
            tokens,
            edges: Vec::new(),
            heads_index: vec![Vec::new(); len],
            dependents_index: vec![Vec::new(); len],
        }
    }

    /// Creates a sentence of bare tokens from whitespace-free words.
    #[must_use]
    pub fn from_words<'w>(words: impl IntoIterator<Item = &'w str>) -> Self {
        Self::new(words.into_iter().map(Token::new).collect())
    }

    /// Adds a labelled edge from `child` to `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`SentenceError::PositionOutOfRange`] when either endpoint is
    /// not a token of this sentence, and [`SentenceError::SelfLoop`] when both
    /// endpoints are the same token.
    pub fn add_edge(
        &mut self,
        child: usize,
        parent: usize,
        label: impl Into<String>,
    ) -> Result<(), SentenceError> {
        let len = self.tokens.len();
        for position in [child, parent] {
            if position >= len {
                return Err(SentenceError::PositionOutOfRange { position, len });
            }
        }
        if child == parent {
            return Err(SentenceError::SelfLoop { position: child });
        }

        let slot = self.edges.len();
        self.edges.push(DependencyEdge {
            child,
            parent,
            label: label.into(),
        });
        if let Some(heads) = self.heads_index.get_mut(child) {
            heads.push(slot);
        }
        if let Some(dependents) = self.dependents_index.get_mut(parent) {
            dependents.push(slot);
        }
        Ok(())
    }

    /// Returns the token at `position`.
    #[must_use]
    pub fn token(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    /// Returns an iterator over all tokens in linear order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Returns an iterator over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &DependencyEdge> {
        self.edges.iter()
    }

    /// Returns the edges leaving `position` towards its parents.
    pub fn head_edges(&self, position: usize) -> impl Iterator<Item = &DependencyEdge> {
        self.indexed_edges(self.heads_index.get(position))
    }

    /// Returns the edges arriving at `position` from its children.
    pub fn dependent_edges(&self, position: usize) -> impl Iterator<Item = &DependencyEdge> {
        self.indexed_edges(self.dependents_index.get(position))
    }

    fn indexed_edges<'s>(
        &'s self,
        slots: Option<&'s Vec<usize>>,
    ) -> impl Iterator<Item = &'s DependencyEdge> {
        slots
            .into_iter()
            .flatten()
            .filter_map(|&slot| self.edges.get(slot))
    }
}

impl SentenceGraph for Sentence {
    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn text(&self, position: usize) -> Option<&str> {
        self.tokens.get(position).map(Token::text)
    }

    fn attribute_values(&self, position: usize, kind: AttributeKind) -> Vec<&str> {
        self.tokens
            .get(position)
            .map(|token| token.values(kind).collect())
            .unwrap_or_default()
    }

    fn labels(&self, child: usize, parent: usize) -> BTreeSet<&str> {
        self.head_edges(child)
            .filter(|edge| edge.parent == parent)
            .map(DependencyEdge::label)
            .collect()
    }

    fn incoming_labels(&self, position: usize) -> BTreeSet<&str> {
        self.dependent_edges(position)
            .map(DependencyEdge::label)
            .collect()
    }

    fn outgoing_labels(&self, position: usize) -> BTreeSet<&str> {
        self.head_edges(position).map(DependencyEdge::label).collect()
    }
}
