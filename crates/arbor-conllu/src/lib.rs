//! Basic CoNLL-U input and output for Arbor.
//!
//! This crate reads treebank text in the basic CoNLL-U format into
//! [`ConlluSentence`] blocks, converts each block into the
//! [`arbor_core::Sentence`] graph the matcher consumes, and writes blocks
//! back out as text. Multiword tokens, empty nodes, and enhanced
//! dependencies are outside the basic format and are rejected.
//!
//! # Example
//!
//! ```
//! use arbor_core::{AttributeKind, SentenceGraph};
//!
//! let input = "1\tDogs\tdog\tNOUN\t_\t_\t2\tnsubj\t_\t_\n\
//!              2\tbark\tbark\tVERB\t_\t_\t0\troot\t_\t_\n\n";
//! let blocks = arbor_conllu::parse(input)?;
//! let sentence = blocks[0].to_sentence()?;
//! assert_eq!(sentence.attribute_values(0, AttributeKind::Tag), ["NOUN"]);
//! assert!(sentence.outgoing_labels(0).contains("nsubj"));
//! # Ok::<(), arbor_conllu::ConlluError>(())
//! ```

mod error;
mod parse;
mod row;
mod sentence;
mod serialize;

pub use error::ConlluError;
pub use parse::parse;
pub use row::ConlluRow;
pub use sentence::ConlluSentence;
pub use serialize::{ConlluOptions, serialize};

#[cfg(test)]
mod tests;
