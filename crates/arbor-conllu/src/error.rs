//! Error types for reading CoNLL-U text.

use arbor_core::SentenceError;
use thiserror::Error;

/// Errors from parsing CoNLL-U text or converting it to a sentence graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConlluError {
    /// A token line has fewer than the ten CoNLL-U columns.
    #[error("line {line}: expected 10 columns, found {found}")]
    MissingColumns {
        /// One-based line number in the input.
        line: usize,
        /// Number of columns present.
        found: usize,
    },

    /// A token line describes a multiword token range.
    #[error("line {line}: multiword token '{id}' is not supported in basic CoNLL-U")]
    MultiwordToken {
        /// One-based line number in the input.
        line: usize,
        /// The range identifier.
        id: String,
    },

    /// A token line uses enhanced CoNLL-U (an empty node or enhanced deps).
    #[error("line {line}: expected basic CoNLL-U, found enhanced annotation")]
    EnhancedAnnotation {
        /// One-based line number in the input.
        line: usize,
    },

    /// A numeric column does not hold a number.
    #[error("line {line}: column {column} is not a number: '{value}'")]
    InvalidNumber {
        /// One-based line number in the input.
        line: usize,
        /// Name of the offending column.
        column: &'static str,
        /// The text found in the column.
        value: String,
    },

    /// Token identifiers do not run 1, 2, 3, … within a sentence.
    #[error("line {line}: expected token id {expected}, found {found}")]
    NonSequentialId {
        /// One-based line number in the input.
        line: usize,
        /// The identifier that should have appeared.
        expected: usize,
        /// The identifier that did appear.
        found: usize,
    },

    /// A head points outside its sentence.
    #[error("token {id} has head {head} in a sentence of {len} tokens")]
    HeadOutOfRange {
        /// The dependent token identifier.
        id: usize,
        /// The head identifier.
        head: usize,
        /// Number of tokens in the sentence.
        len: usize,
    },

    /// The converted graph was rejected.
    #[error(transparent)]
    Sentence(#[from] SentenceError),
}
