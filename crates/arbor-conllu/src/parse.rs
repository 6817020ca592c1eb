//! Reading basic CoNLL-U text.
//!
//! Sentences are separated by blank lines. Lines starting with `#` are
//! comments attached to the sentence that follows them. Every other line is
//! a token row with ten columns, separated by tabs or, failing that, by
//! runs of whitespace. Multiword token ranges, empty nodes, and enhanced
//! dependencies are rejected.

use tracing::debug;

use crate::error::ConlluError;
use crate::row::ConlluRow;
use crate::sentence::ConlluSentence;

const PARSE_TARGET: &str = "arbor_conllu::parse";
const COLUMNS: usize = 10;

/// Parses every sentence in `input`.
///
/// A missing XPOS (`_`) is filled with the UPOS so both tag attributes are
/// available to patterns.
///
/// # Errors
///
/// Returns the first [`ConlluError`] met while reading a row.
///
/// # Example
///
/// ```
/// let input = "# text = Dogs bark\n\
///              1\tDogs\tdog\tNOUN\tNNS\t_\t2\tnsubj\t_\t_\n\
///              2\tbark\tbark\tVERB\tVBP\t_\t0\troot\t_\t_\n";
/// let sentences = arbor_conllu::parse(input)?;
/// assert_eq!(sentences.len(), 1);
/// assert_eq!(sentences[0].comments(), [" text = Dogs bark"]);
/// # Ok::<(), arbor_conllu::ConlluError>(())
/// ```
pub fn parse(input: &str) -> Result<Vec<ConlluSentence>, ConlluError> {
    let mut sentences = Vec::new();
    let mut block = Block::default();
    for (index, line) in input.lines().enumerate() {
        let number = index + 1;
        let trimmed = line.trim_end_matches('\r');
        if trimmed.trim().is_empty() {
            sentences.extend(block.finish());
        } else if let Some(comment) = trimmed.strip_prefix('#') {
            block.comments.push(comment.to_owned());
        } else {
            let row = parse_row(number, trimmed, block.rows.len() + 1)?;
            block.rows.push(row);
        }
    }
    sentences.extend(block.finish());
    debug!(target: PARSE_TARGET, sentences = sentences.len(), "parsed CoNLL-U input");
    Ok(sentences)
}

#[derive(Debug, Default)]
struct Block {
    comments: Vec<String>,
    rows: Vec<ConlluRow>,
}

impl Block {
    /// Takes the accumulated sentence, if it has any rows.
    ///
    /// Comments with no following rows are dropped.
    fn finish(&mut self) -> Option<ConlluSentence> {
        let comments = std::mem::take(&mut self.comments);
        let rows = std::mem::take(&mut self.rows);
        (!rows.is_empty()).then(|| ConlluSentence::new(comments, rows))
    }
}

fn split_columns(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        line.split('\t').collect()
    } else {
        line.split_whitespace().collect()
    }
}

fn parse_row(line: usize, text: &str, expected: usize) -> Result<ConlluRow, ConlluError> {
    let columns = split_columns(text);
    let found = columns.len();
    let Some(&[id, form, lemma, upos, xpos, feats, head, deprel, deps, misc]) = columns
        .get(..COLUMNS)
        .and_then(|slice| <&[&str; COLUMNS]>::try_from(slice).ok())
    else {
        return Err(ConlluError::MissingColumns { line, found });
    };

    if id.contains('-') {
        return Err(ConlluError::MultiwordToken {
            line,
            id: id.to_owned(),
        });
    }
    if id.contains('.') || deps != "_" {
        return Err(ConlluError::EnhancedAnnotation { line });
    }

    let id_number = number(line, "ID", id)?;
    if id_number != expected {
        return Err(ConlluError::NonSequentialId {
            line,
            expected,
            found: id_number,
        });
    }
    let head_number = number(line, "HEAD", head)?;
    let fine = if xpos == "_" { upos } else { xpos };

    Ok(ConlluRow::new(id_number, form)
        .with_lemma(lemma)
        .with_upos(upos)
        .with_xpos(fine)
        .with_feats(feats)
        .with_head(head_number)
        .with_deprel(deprel)
        .with_deps(deps)
        .with_misc(misc))
}

fn number(line: usize, column: &'static str, value: &str) -> Result<usize, ConlluError> {
    value.parse().map_err(|_| ConlluError::InvalidNumber {
        line,
        column,
        value: value.to_owned(),
    })
}
