//! Multi-token phrase constraints.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Separator between the words of a literal phrase.
pub const PHRASE_SEPARATOR: &str = "_";

/// Requires the surface texts of two or three bound tokens, joined with `_`,
/// to form one of the accepted phrases.
///
/// # Example
///
/// ```
/// use arbor_core::PhraseConstraint;
///
/// let city = PhraseConstraint::pair("first", "second", ["New_York", "Los_Angeles"]);
/// assert_eq!(city.variables(), ["first", "second"]);
/// assert!(city.accepts(["New", "York"]));
/// assert!(!city.accepts(["New", "Delhi"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseConstraint {
    /// A two-word phrase.
    Pair {
        /// Variable bound to the first word.
        first: String,
        /// Variable bound to the second word.
        second: String,
        /// Accepted underscore-joined phrases.
        phrases: BTreeSet<String>,
    },
    /// A three-word phrase.
    Triple {
        /// Variable bound to the first word.
        first: String,
        /// Variable bound to the second word.
        second: String,
        /// Variable bound to the third word.
        third: String,
        /// Accepted underscore-joined phrases.
        phrases: BTreeSet<String>,
    },
}

impl PhraseConstraint {
    /// Creates a two-word phrase constraint.
    #[must_use]
    pub fn pair<I, S>(first: impl Into<String>, second: impl Into<String>, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Pair {
            first: first.into(),
            second: second.into(),
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a three-word phrase constraint.
    #[must_use]
    pub fn triple<I, S>(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
        phrases: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Triple {
            first: first.into(),
            second: second.into(),
            third: third.into(),
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the variable names in phrase order.
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        match self {
            Self::Pair { first, second, .. } => vec![first.as_str(), second.as_str()],
            Self::Triple {
                first,
                second,
                third,
                ..
            } => vec![first.as_str(), second.as_str(), third.as_str()],
        }
    }

    /// Returns the accepted phrases.
    #[must_use]
    pub const fn phrases(&self) -> &BTreeSet<String> {
        match self {
            Self::Pair { phrases, .. } | Self::Triple { phrases, .. } => phrases,
        }
    }

    /// Returns the number of words in each phrase.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Pair { .. } => 2,
            Self::Triple { .. } => 3,
        }
    }

    /// Returns whether the given words, joined with `_`, form an accepted
    /// phrase.
    #[must_use]
    pub fn accepts<'w>(&self, words: impl IntoIterator<Item = &'w str>) -> bool {
        let joined = words.into_iter().collect::<Vec<_>>().join(PHRASE_SEPARATOR);
        self.phrases().contains(&joined)
    }

    /// Splits every accepted phrase into its per-position words.
    ///
    /// The result holds one set per variable, in phrase order.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidPatternShape`] when a phrase does not
    /// split into exactly [`arity`](Self::arity) non-empty words.
    pub fn words_by_position(&self) -> Result<Vec<BTreeSet<String>>, MatchError> {
        let arity = self.arity();
        let mut columns = vec![BTreeSet::new(); arity];
        for phrase in self.phrases() {
            let words: Vec<&str> = phrase.split(PHRASE_SEPARATOR).collect();
            if words.len() != arity || words.iter().any(|word| word.is_empty()) {
                return Err(MatchError::invalid_shape(format!(
                    "phrase '{phrase}' does not split into {arity} words"
                )));
            }
            for (column, word) in columns.iter_mut().zip(words) {
                column.insert(word.to_owned());
            }
        }
        Ok(columns)
    }
}
