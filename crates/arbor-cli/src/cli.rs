//! Command-line argument definitions.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

use arbor::{JoinOrder, MatcherConfig};

use crate::logging::LogFormat;

/// Join ordering selectable from the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum JoinOrderArg {
    /// Join edge relations in the order the pattern declares them.
    #[default]
    Declared,
    /// Join the smallest candidate products first.
    Selectivity,
}

impl From<JoinOrderArg> for JoinOrder {
    fn from(value: JoinOrderArg) -> Self {
        match value {
            JoinOrderArg::Declared => Self::Declared,
            JoinOrderArg::Selectivity => Self::Selectivity,
        }
    }
}

/// Matches dependency patterns against CoNLL-U sentences.
#[derive(Parser, Debug)]
#[command(name = "arbor", version)]
pub(crate) struct Cli {
    /// JSON file mapping pattern names to patterns.
    #[arg(long, value_name = "FILE")]
    pub(crate) patterns: Utf8PathBuf,
    /// CoNLL-U file holding the sentences to match.
    #[arg(long, value_name = "FILE")]
    pub(crate) input: Utf8PathBuf,
    /// Restricts matching to the named pattern. Repeatable; all patterns run
    /// when omitted.
    #[arg(long = "pattern", value_name = "NAME")]
    pub(crate) selected: Vec<String>,
    /// Order in which edge relations are joined.
    #[arg(long, value_enum, default_value_t = JoinOrderArg::Declared)]
    pub(crate) join_order: JoinOrderArg,
    /// Disables hoisting of edge and phrase constraints onto single tokens.
    #[arg(long)]
    pub(crate) no_hoist: bool,
    /// Tracing filter directives, in `RUST_LOG` syntax.
    #[arg(long, value_name = "EXPR", default_value = "info")]
    pub(crate) log_filter: String,
    /// Log line format written to stderr.
    #[arg(long, value_name = "FORMAT", default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}

impl Cli {
    /// Returns the matcher configuration selected by the flags.
    pub(crate) fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig::default()
            .with_join_order(self.join_order.into())
            .with_hoisting(!self.no_hoist)
    }
}
