//! Pattern and treebank files shared by the runtime tests.

use std::ffi::OsString;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use rstest::fixture;
use tempfile::TempDir;

pub(super) const PATTERNS: &str = r#"{
    "subject": {
        "tokens": [
            {"name": "subj"},
            {"name": "verb", "attributes": [{"kind": "pos", "values": ["VERB"]}]}
        ],
        "edges": [
            {"child": "subj", "parent": "verb", "labels": [{"has_label": ["nsubj"]}]}
        ]
    },
    "object": {
        "tokens": [
            {"name": "obj"},
            {"name": "verb", "capture": false}
        ],
        "edges": [
            {"child": "obj", "parent": "verb", "labels": [{"has_label": ["obj"]}]}
        ]
    }
}"#;

pub(super) const TREEBANK: &str = "\
# text = Dogs bark
1\tDogs\tdog\tNOUN\tNNS\t_\t2\tnsubj\t_\t_
2\tbark\tbark\tVERB\tVBP\t_\t0\troot\t_\t_

# text = She gave him books
1\tShe\tshe\tPRON\tPRP\t_\t2\tnsubj\t_\t_
2\tgave\tgive\tVERB\tVBD\t_\t0\troot\t_\t_
3\thim\the\tPRON\tPRP\t_\t2\tiobj\t_\t_
4\tbooks\tbook\tNOUN\tNNS\t_\t2\tobj\t_\t_
";

/// A temporary directory holding a pattern file and a treebank.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) patterns: Utf8PathBuf,
    pub(super) input: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn with_files(patterns: &str, treebank: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let patterns_path = root.join("patterns.json");
        let input_path = root.join("input.conllu");
        std::fs::write(&patterns_path, patterns).expect("write patterns");
        std::fs::write(&input_path, treebank).expect("write treebank");
        Self {
            _dir: dir,
            patterns: patterns_path,
            input: input_path,
        }
    }

    /// Arguments naming both files, followed by `extra`.
    pub(super) fn args(&self, extra: &[&str]) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "arbor".into(),
            "--patterns".into(),
            self.patterns.as_str().into(),
            "--input".into(),
            self.input.as_str().into(),
            "--log-filter".into(),
            "off".into(),
        ];
        args.extend(extra.iter().map(OsString::from));
        args
    }
}

#[fixture]
pub(super) fn workspace() -> Workspace {
    Workspace::with_files(PATTERNS, TREEBANK)
}

/// Output captured from one in-process run.
pub(super) struct Captured {
    pub(super) exit: ExitCode,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

impl Captured {
    pub(super) fn records(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect()
    }
}

pub(super) fn run_cli(args: Vec<OsString>) -> Captured {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let exit = crate::run(args, &mut stdout, &mut stderr);
    Captured {
        exit,
        stdout: String::from_utf8(stdout).expect("utf-8 stdout"),
        stderr: String::from_utf8(stderr).expect("utf-8 stderr"),
    }
}
