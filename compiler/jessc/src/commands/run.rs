//! File mode: run a script once and exit with its status.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use jess_diagnostic::emitter::{DiagnosticEmitter, TextEmitter};
use jess_eval::stdout_handler;
use tracing::debug;

use super::run_source;
use crate::{CliError, Config, RunOutcome, Session};

/// Run the script at `path`, printing to stdout and reporting to stderr.
pub fn run_file(path: &Path, config: &Config) -> ExitCode {
    let mut session = Session::new(config.interpreter(stdout_handler()));
    let mut emitter = TextEmitter::stderr();
    match run_file_with(path, &mut session, &mut emitter) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}

/// Read `path` and run it in `session`.
///
/// Fails only if the file cannot be read; errors in the script itself are
/// emitted and reflected in the returned outcome.
pub fn run_file_with(
    path: &Path,
    session: &mut Session,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<RunOutcome, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "running script");
    Ok(run_source(session, &source, emitter))
}
