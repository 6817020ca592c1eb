//! Error types for pattern construction, sentence building, and matching.
//!
//! Pattern shape violations are always detected when a pattern is built or
//! compiled, never while matching. The "required variable had no candidates"
//! outcome is represented as an error value here so the per-node matcher can
//! report it, but the match facade turns it into an empty result sequence.

use thiserror::Error;

/// Errors produced while building, compiling, or matching patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatchError {
    /// The pattern violates a structural contract: a dangling or duplicated
    /// variable, a phrase with the wrong arity, or a multi-node token span.
    #[error("invalid pattern shape: {message}")]
    InvalidPatternShape {
        /// Description of the violation.
        message: String,
    },

    /// A required variable produced no candidate nodes in the sentence.
    #[error("required variable '{variable}' matched no token")]
    UnsatisfiedRequiredVariable {
        /// The variable with no candidates.
        variable: String,
    },

    /// No compiled pattern is registered under the requested name.
    #[error("unknown pattern: {name}")]
    UnknownPattern {
        /// The name that was requested.
        name: String,
    },
}

impl MatchError {
    /// Creates an invalid pattern shape error.
    #[must_use]
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidPatternShape {
            message: message.into(),
        }
    }

    /// Creates an unsatisfied required variable error.
    #[must_use]
    pub fn unsatisfied(variable: impl Into<String>) -> Self {
        Self::UnsatisfiedRequiredVariable {
            variable: variable.into(),
        }
    }

    /// Creates an unknown pattern error.
    #[must_use]
    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern { name: name.into() }
    }
}

/// Errors produced while assembling a sentence graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SentenceError {
    /// An edge endpoint does not name a token of the sentence.
    #[error("edge endpoint {position} is outside a sentence of {len} tokens")]
    PositionOutOfRange {
        /// The offending position.
        position: usize,
        /// The number of tokens in the sentence.
        len: usize,
    },

    /// An edge connects a token to itself.
    #[error("token {position} cannot be its own head")]
    SelfLoop {
        /// The offending position.
        position: usize,
    },
}
