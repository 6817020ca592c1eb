//! CLI entrypoint for the Arbor structural matcher.
//!
//! The binary delegates to [`arbor_cli::run`], which parses arguments,
//! installs logging, and writes one JSON line per match to stdout.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    arbor_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
