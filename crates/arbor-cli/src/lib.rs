//! Command-line runtime for the Arbor structural matcher.
//!
//! The runtime reads a JSON object mapping pattern names to patterns and a
//! CoNLL-U file, matches every selected pattern against every sentence, and
//! writes one [`MatchRecord`] per line to stdout. Errors are reported on
//! stderr with a failing exit code. The IO streams are parameters so tests
//! can drive the runtime in process.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use arbor::{MatchError, Matcher, Pattern};
use camino::Utf8Path;
use clap::Parser;
use tracing::{debug, info};

mod cli;
mod errors;
mod logging;
mod output;
mod telemetry;

use cli::Cli;
use errors::AppError;
pub use logging::LogFormat;
pub use output::{EdgeRecord, MatchRecord, TokenRecord};

const CLI_TARGET: &str = "arbor_cli";

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let result = Cli::try_parse_from(args)
        .map_err(AppError::CliUsage)
        .and_then(|cli| {
            telemetry::initialise(&cli.log_filter, cli.log_format)?;
            execute(&cli, stdout)
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::CliUsage(error)) if !error.use_stderr() => {
            let _ = write!(stdout, "{error}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn execute<W: Write>(cli: &Cli, stdout: &mut W) -> Result<(), AppError> {
    let patterns = load_patterns(&cli.patterns)?;
    let matcher = Matcher::new(patterns, cli.matcher_config())?;
    let selected: Vec<&str> = if cli.selected.is_empty() {
        matcher.names().collect()
    } else {
        cli.selected.iter().map(String::as_str).collect()
    };
    if let Some(unknown) = selected
        .iter()
        .find(|name| !matcher.names().any(|known| known == **name))
    {
        return Err(MatchError::unknown_pattern(*unknown).into());
    }

    let text = read(&cli.input)?;
    let blocks = arbor_conllu::parse(&text).map_err(|source| AppError::Conllu {
        path: cli.input.clone(),
        source,
    })?;
    info!(
        target: CLI_TARGET,
        sentences = blocks.len(),
        patterns = selected.len(),
        "matching input"
    );

    let mut emitted = 0_usize;
    for (index, block) in blocks.iter().enumerate() {
        let sentence = block.to_sentence().map_err(|source| AppError::Convert {
            path: cli.input.clone(),
            sentence: index,
            source,
        })?;
        let attached = matcher.attach(&sentence);
        for name in &selected {
            for result in attached.matches_for(name)? {
                let record = MatchRecord::new(index, name, &result, &sentence);
                serde_json::to_writer(&mut *stdout, &record).map_err(AppError::SerialiseRecord)?;
                stdout.write_all(b"\n").map_err(AppError::Write)?;
                emitted += 1;
            }
        }
    }
    stdout.flush().map_err(AppError::Write)?;
    info!(target: CLI_TARGET, matches = emitted, "matching complete");
    Ok(())
}

fn read(path: &Utf8Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::read(path, source))
}

fn load_patterns(path: &Utf8Path) -> Result<BTreeMap<String, Pattern>, AppError> {
    let text = read(path)?;
    let patterns: BTreeMap<String, Pattern> =
        serde_json::from_str(&text).map_err(|source| AppError::ParsePatterns {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(target: CLI_TARGET, path = %path, patterns = patterns.len(), "loaded patterns");
    Ok(patterns)
}

#[cfg(test)]
mod tests;
