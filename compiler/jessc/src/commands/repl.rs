//! Interactive mode: evaluate one line at a time until end of input.

use std::io::{BufRead, Write};

use jess_diagnostic::emitter::DiagnosticEmitter;

use super::run_source;
use crate::{CliError, Session};

/// Prompt for lines on `output`, read them from `input`, and run each one.
///
/// Errors are reported and the loop continues; a syntax error on one line
/// does not keep later lines from running. Returns at end of input.
pub fn run_prompt(
    session: &mut Session,
    input: impl BufRead,
    mut output: impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<(), CliError> {
    let mut lines = input.lines();
    loop {
        output.write_all(b"> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        run_source(session, &line?, emitter);
        session.reset_static();
    }
}
