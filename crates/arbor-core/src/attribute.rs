//! Attribute kinds carried by sentence tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of annotation a token attribute predicate inspects.
///
/// Attribute values are opaque strings supplied by the annotation provider;
/// the matcher only compares them for equality.
///
/// # Example
///
/// ```
/// use arbor_core::AttributeKind;
///
/// let kind = AttributeKind::Lemma;
/// assert_eq!(format!("{kind}"), "lemma");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// The surface form of the token.
    Word,
    /// The normalised (dictionary) form of the token.
    Lemma,
    /// The coarse part-of-speech tag.
    Pos,
    /// The fine-grained, language-specific tag.
    Tag,
    /// The named-entity class, when the token belongs to an entity.
    Entity,
}

impl AttributeKind {
    /// Every attribute kind, in declaration order.
    pub const ALL: [Self; 5] = [Self::Word, Self::Lemma, Self::Pos, Self::Tag, Self::Entity];
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word => f.write_str("word"),
            Self::Lemma => f.write_str("lemma"),
            Self::Pos => f.write_str("pos"),
            Self::Tag => f.write_str("tag"),
            Self::Entity => f.write_str("entity"),
        }
    }
}
