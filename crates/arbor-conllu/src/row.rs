//! One CoNLL-U token line.

/// The ten columns of a basic CoNLL-U token line.
///
/// Rows are immutable values; the `with_*` methods return an updated copy.
///
/// # Example
///
/// ```
/// use arbor_conllu::ConlluRow;
///
/// let row = ConlluRow::new(1, "Dogs").with_lemma("dog").with_upos("NOUN");
/// let renamed = row.clone().with_deprel("nsubj").with_head(2);
/// assert_eq!(row.head(), 0);
/// assert_eq!(renamed.head(), 2);
/// assert_eq!(renamed.deprel(), "nsubj");
/// assert_eq!(renamed.form(), "Dogs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConlluRow {
    id: usize,
    form: String,
    lemma: String,
    upos: String,
    xpos: String,
    feats: String,
    head: usize,
    deprel: String,
    deps: String,
    misc: String,
}

const EMPTY: &str = "_";

impl ConlluRow {
    /// Creates a root row with every other column empty (`_`).
    #[must_use]
    pub fn new(id: usize, form: impl Into<String>) -> Self {
        Self {
            id,
            form: form.into(),
            lemma: EMPTY.to_owned(),
            upos: EMPTY.to_owned(),
            xpos: EMPTY.to_owned(),
            feats: EMPTY.to_owned(),
            head: 0,
            deprel: EMPTY.to_owned(),
            deps: EMPTY.to_owned(),
            misc: EMPTY.to_owned(),
        }
    }

    /// Returns the row with a different identifier.
    #[must_use]
    pub const fn with_id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    /// Returns the row with a different surface form.
    #[must_use]
    pub fn with_form(mut self, form: impl Into<String>) -> Self {
        self.form = form.into();
        self
    }

    /// Returns the row with a different lemma.
    #[must_use]
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Returns the row with a different universal tag.
    #[must_use]
    pub fn with_upos(mut self, upos: impl Into<String>) -> Self {
        self.upos = upos.into();
        self
    }

    /// Returns the row with a different language-specific tag.
    #[must_use]
    pub fn with_xpos(mut self, xpos: impl Into<String>) -> Self {
        self.xpos = xpos.into();
        self
    }

    /// Returns the row with different morphological features.
    #[must_use]
    pub fn with_feats(mut self, feats: impl Into<String>) -> Self {
        self.feats = feats.into();
        self
    }

    /// Returns the row with a different head; `0` marks the root.
    #[must_use]
    pub const fn with_head(mut self, head: usize) -> Self {
        self.head = head;
        self
    }

    /// Returns the row with a different relation to its head.
    #[must_use]
    pub fn with_deprel(mut self, deprel: impl Into<String>) -> Self {
        self.deprel = deprel.into();
        self
    }

    /// Returns the row with a different enhanced dependency column.
    #[must_use]
    pub fn with_deps(mut self, deps: impl Into<String>) -> Self {
        self.deps = deps.into();
        self
    }

    /// Returns the row with a different miscellaneous column.
    #[must_use]
    pub fn with_misc(mut self, misc: impl Into<String>) -> Self {
        self.misc = misc.into();
        self
    }

    /// Returns the one-based token identifier.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Returns the surface form.
    #[must_use]
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Returns the lemma.
    #[must_use]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Returns the universal part-of-speech tag.
    #[must_use]
    pub fn upos(&self) -> &str {
        &self.upos
    }

    /// Returns the language-specific tag.
    #[must_use]
    pub fn xpos(&self) -> &str {
        &self.xpos
    }

    /// Returns the morphological features.
    #[must_use]
    pub fn feats(&self) -> &str {
        &self.feats
    }

    /// Returns the head identifier, `0` for the root.
    #[must_use]
    pub const fn head(&self) -> usize {
        self.head
    }

    /// Returns the relation to the head.
    #[must_use]
    pub fn deprel(&self) -> &str {
        &self.deprel
    }

    /// Returns the enhanced dependency column.
    #[must_use]
    pub fn deps(&self) -> &str {
        &self.deps
    }

    /// Returns the miscellaneous column.
    #[must_use]
    pub fn misc(&self) -> &str {
        &self.misc
    }

    /// Returns the columns rendered as a tab-separated line, without a
    /// newline.
    #[must_use]
    pub fn to_line(&self) -> String {
        let id = self.id.to_string();
        let head = self.head.to_string();
        [
            id.as_str(),
            self.form.as_str(),
            self.lemma.as_str(),
            self.upos.as_str(),
            self.xpos.as_str(),
            self.feats.as_str(),
            head.as_str(),
            self.deprel.as_str(),
            self.deps.as_str(),
            self.misc.as_str(),
        ]
        .join("\t")
    }
}
