//! Writing sentences back out as CoNLL-U text.

use crate::sentence::ConlluSentence;

/// Options controlling CoNLL-U output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConlluOptions {
    preserve_comments: bool,
}

impl ConlluOptions {
    /// Creates options that keep comment lines.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            preserve_comments: true,
        }
    }

    /// Sets whether comment lines are written before each sentence.
    #[must_use]
    pub const fn with_preserve_comments(mut self, preserve: bool) -> Self {
        self.preserve_comments = preserve;
        self
    }

    /// Returns whether comment lines are written.
    #[must_use]
    pub const fn preserve_comments(self) -> bool {
        self.preserve_comments
    }
}

impl Default for ConlluOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `sentences` as CoNLL-U, one tab-separated row per line and a
/// blank line after every sentence.
///
/// # Example
///
/// ```
/// use arbor_conllu::{ConlluOptions, ConlluRow, ConlluSentence, serialize};
///
/// let block = ConlluSentence::new(
///     vec![" sent_id = 1".to_owned()],
///     vec![ConlluRow::new(1, "Hi").with_deprel("root")],
/// );
/// let text = serialize(&[block], ConlluOptions::new().with_preserve_comments(false));
/// assert_eq!(text, "1\tHi\t_\t_\t_\t_\t0\troot\t_\t_\n\n");
/// ```
#[must_use]
pub fn serialize(sentences: &[ConlluSentence], options: ConlluOptions) -> String {
    let mut out = String::new();
    for sentence in sentences {
        if options.preserve_comments() {
            for comment in sentence.comments() {
                out.push('#');
                out.push_str(comment);
                out.push('\n');
            }
        }
        for row in sentence.rows() {
            out.push_str(&row.to_line());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
