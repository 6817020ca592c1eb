//! Tests for [`parse`](crate::parse).

use rstest::rstest;

use crate::{ConlluError, parse};

const TWO_SENTENCES: &str = "\
# sent_id = 1
# text = Dogs bark
1\tDogs\tdog\tNOUN\tNNS\t_\t2\tnsubj\t_\t_
2\tbark\tbark\tVERB\tVBP\t_\t0\troot\t_\t_

# sent_id = 2
1\tCats\tcat\tNOUN\t_\t_\t2\tnsubj\t_\t_
2\tsleep\tsleep\tVERB\t_\t_\t0\troot\t_\tSpaceAfter=No
";

#[rstest]
fn sentences_are_split_on_blank_lines() {
    let sentences = parse(TWO_SENTENCES).expect("parses");
    assert_eq!(sentences.len(), 2);
    let first = sentences.first().expect("first sentence");
    assert_eq!(first.comments(), [" sent_id = 1", " text = Dogs bark"]);
    assert_eq!(first.rows().len(), 2);
    let second = sentences.get(1).expect("second sentence");
    assert_eq!(second.comments(), [" sent_id = 2"]);
    let sleep = second.rows().get(1).expect("second row");
    assert_eq!(sleep.misc(), "SpaceAfter=No");
    assert_eq!(sleep.head(), 0);
}

#[rstest]
fn missing_xpos_falls_back_to_upos() {
    let sentences = parse(TWO_SENTENCES).expect("parses");
    let cats = sentences
        .get(1)
        .and_then(|sentence| sentence.rows().first())
        .expect("row");
    assert_eq!(cats.xpos(), "NOUN");
    let dogs = sentences
        .first()
        .and_then(|sentence| sentence.rows().first())
        .expect("row");
    assert_eq!(dogs.xpos(), "NNS");
}

#[rstest]
#[case::empty("")]
#[case::blank_lines("\n\n  \n")]
#[case::dangling_comment("# orphan\n")]
fn input_without_rows_has_no_sentences(#[case] input: &str) {
    assert!(parse(input).expect("parses").is_empty());
}

#[rstest]
fn whitespace_separated_columns_are_accepted() {
    let sentences = parse("1 Hi hi INTJ UH _ 0 root _ _\n").expect("parses");
    let row = sentences
        .first()
        .and_then(|sentence| sentence.rows().first())
        .expect("row");
    assert_eq!(row.form(), "Hi");
    assert_eq!(row.deprel(), "root");
}

#[rstest]
fn carriage_returns_are_ignored() {
    let sentences = parse("1\tHi\thi\tINTJ\tUH\t_\t0\troot\t_\t_\r\n\r\n").expect("parses");
    assert_eq!(sentences.len(), 1);
    let row = sentences
        .first()
        .and_then(|sentence| sentence.rows().first())
        .expect("row");
    assert_eq!(row.misc(), "_");
}

#[rstest]
#[case::short_row(
    "1\tHi\thi\n",
    ConlluError::MissingColumns { line: 1, found: 3 }
)]
#[case::multiword(
    "1-2\tdon't\t_\t_\t_\t_\t_\t_\t_\t_\n",
    ConlluError::MultiwordToken { line: 1, id: "1-2".to_owned() }
)]
#[case::empty_node(
    "1\tHi\thi\tINTJ\tUH\t_\t0\troot\t_\t_\n1.1\tgone\t_\t_\t_\t_\t_\t_\t_\t_\n",
    ConlluError::EnhancedAnnotation { line: 2 }
)]
#[case::enhanced_deps(
    "1\tHi\thi\tINTJ\tUH\t_\t0\troot\t0:root\t_\n",
    ConlluError::EnhancedAnnotation { line: 1 }
)]
#[case::bad_id(
    "x\tHi\thi\tINTJ\tUH\t_\t0\troot\t_\t_\n",
    ConlluError::InvalidNumber { line: 1, column: "ID", value: "x".to_owned() }
)]
#[case::bad_head(
    "1\tHi\thi\tINTJ\tUH\t_\t_\troot\t_\t_\n",
    ConlluError::InvalidNumber { line: 1, column: "HEAD", value: "_".to_owned() }
)]
#[case::skipped_id(
    "1\tA\ta\tX\tX\t_\t0\troot\t_\t_\n3\tB\tb\tX\tX\t_\t1\tdep\t_\t_\n",
    ConlluError::NonSequentialId { line: 2, expected: 2, found: 3 }
)]
fn malformed_rows_are_rejected(#[case] input: &str, #[case] expected: ConlluError) {
    assert_eq!(parse(input), Err(expected));
}

#[rstest]
fn ids_restart_in_each_sentence() {
    let input = "1\tA\ta\tX\tX\t_\t0\troot\t_\t_\n\n1\tB\tb\tX\tX\t_\t0\troot\t_\t_\n";
    assert_eq!(parse(input).expect("parses").len(), 2);
}
