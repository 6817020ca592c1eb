//! Error types for the CLI runtime.

use std::io;

use arbor::MatchError;
use arbor_conllu::ConlluError;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {path}: {source}")]
    Read { path: Utf8PathBuf, source: io::Error },
    #[error("failed to parse patterns in {path}: {source}")]
    ParsePatterns {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },
    #[error("{path}: {source}")]
    Conllu {
        path: Utf8PathBuf,
        source: ConlluError,
    },
    #[error("{path}: sentence {sentence}: {source}")]
    Convert {
        path: Utf8PathBuf,
        sentence: usize,
        source: ConlluError,
    },
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("failed to serialise match record: {0}")]
    SerialiseRecord(serde_json::Error),
    #[error("failed to write output: {0}")]
    Write(io::Error),
}

impl AppError {
    pub(crate) fn read(path: &Utf8Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}
