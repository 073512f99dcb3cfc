//! The two ways to run Jess code: a script file or the interactive prompt.

mod repl;
mod run;

pub use repl::run_prompt;
pub use run::{run_file, run_file_with};

use jess_diagnostic::emitter::DiagnosticEmitter;

use crate::{RunOutcome, Session};

/// Run `source` in `session` and emit every diagnostic it produced.
pub fn run_source(
    session: &mut Session,
    source: &str,
    emitter: &mut impl DiagnosticEmitter,
) -> RunOutcome {
    let outcome = session.run(source);
    emitter.emit_all(&session.take_diagnostics());
    emitter.flush();
    outcome
}
