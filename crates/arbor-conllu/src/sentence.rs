//! A parsed CoNLL-U sentence and its conversion to a sentence graph.

use arbor_core::{AttributeKind, Sentence, Token};

use crate::error::ConlluError;
use crate::row::ConlluRow;

/// One sentence block: its comment lines and token rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConlluSentence {
    comments: Vec<String>,
    rows: Vec<ConlluRow>,
}

impl ConlluSentence {
    /// Creates a sentence block from comments (without the leading `#`) and
    /// rows whose ids run from 1.
    #[must_use]
    pub const fn new(comments: Vec<String>, rows: Vec<ConlluRow>) -> Self {
        Self { comments, rows }
    }

    /// Returns the comment lines, without their leading `#`.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Returns the token rows in order.
    #[must_use]
    pub fn rows(&self) -> &[ConlluRow] {
        &self.rows
    }

    /// Builds the sentence graph the matcher consumes.
    ///
    /// Each row becomes the token at position `id - 1`. The form is its
    /// surface text; lemma, UPOS and XPOS become the lemma, coarse and fine
    /// tag attributes. A row with a non-zero head gets one edge to the head's
    /// token labelled with its relation. Root rows get no edge.
    ///
    /// # Errors
    ///
    /// Returns [`ConlluError::HeadOutOfRange`] when a head names no row of the
    /// sentence, and [`ConlluError::Sentence`] when a row is its own head.
    ///
    /// # Example
    ///
    /// ```
    /// use arbor_conllu::{ConlluRow, ConlluSentence};
    /// use arbor_core::SentenceGraph;
    ///
    /// let block = ConlluSentence::new(
    ///     Vec::new(),
    ///     vec![
    ///         ConlluRow::new(1, "Dogs").with_head(2).with_deprel("nsubj"),
    ///         ConlluRow::new(2, "bark").with_deprel("root"),
    ///     ],
    /// );
    /// let sentence = block.to_sentence()?;
    /// assert_eq!(sentence.len(), 2);
    /// assert!(sentence.labels(0, 1).contains("nsubj"));
    /// # Ok::<(), arbor_conllu::ConlluError>(())
    /// ```
    pub fn to_sentence(&self) -> Result<Sentence, ConlluError> {
        let len = self.rows.len();
        let mut sentence = Sentence::new(self.rows.iter().map(token).collect());
        for (position, row) in self.rows.iter().enumerate() {
            let Some(head) = row.head().checked_sub(1) else {
                continue;
            };
            if head >= len {
                return Err(ConlluError::HeadOutOfRange {
                    id: row.id(),
                    head: row.head(),
                    len,
                });
            }
            sentence.add_edge(position, head, row.deprel())?;
        }
        Ok(sentence)
    }
}

fn token(row: &ConlluRow) -> Token {
    [
        (AttributeKind::Lemma, row.lemma()),
        (AttributeKind::Pos, row.upos()),
        (AttributeKind::Tag, row.xpos()),
    ]
    .into_iter()
    .filter(|(_, value)| *value != "_")
    .fold(Token::new(row.form()), |built, (kind, value)| {
        built.with_attribute(kind, value)
    })
}
