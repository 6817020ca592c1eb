//! JSON line records describing each match.

use std::collections::BTreeMap;

use arbor::{MatchingResult, SentenceGraph};
use serde::Serialize;

/// A captured variable and the token it bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Zero-based token position.
    pub position: usize,
    /// Surface text of the token.
    pub text: String,
}

/// A pattern edge and the labels that satisfied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    /// Position of the dependent token.
    pub child: usize,
    /// Position of the governing token.
    pub parent: usize,
    /// Satisfying labels in sorted order.
    pub labels: Vec<String>,
}

/// One match of one pattern in one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Zero-based index of the sentence in the input.
    pub sentence: usize,
    /// Name of the pattern that matched.
    pub pattern: String,
    /// Captured variables by name.
    pub tokens: BTreeMap<String, TokenRecord>,
    /// Edges that satisfied the pattern's edge constraints.
    pub edges: Vec<EdgeRecord>,
}

impl MatchRecord {
    /// Describes `result` using the token text of `graph`.
    #[must_use]
    pub fn new(
        sentence: usize,
        pattern: &str,
        result: &MatchingResult,
        graph: &dyn SentenceGraph,
    ) -> Self {
        let tokens = result
            .tokens()
            .iter()
            .map(|(name, &position)| {
                let text = graph.text(position).unwrap_or_default().to_owned();
                (name.clone(), TokenRecord { position, text })
            })
            .collect();
        let edges = result
            .edges()
            .map(|(child, parent, labels)| EdgeRecord {
                child,
                parent,
                labels: labels.iter().cloned().collect(),
            })
            .collect();
        Self {
            sentence,
            pattern: pattern.to_owned(),
            tokens,
            edges,
        }
    }
}
