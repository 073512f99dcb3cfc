//! Shared helpers for driving whole programs through a session.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use jess_diagnostic::emitter::TextEmitter;
use jess_eval::{buffer_handler, Interpreter};
use jessc::{run_source, RunOutcome, Session};

/// Call depth used by tests; deep enough for real programs, shallow enough
/// to overflow quickly.
pub const TEST_CALL_DEPTH: usize = 256;

/// Output of one run.
pub struct Run {
    pub outcome: RunOutcome,
    /// What `print` wrote.
    pub stdout: String,
    /// Rendered diagnostics, one per line.
    pub stderr: String,
}

pub fn session() -> Session {
    Session::new(
        Interpreter::builder()
            .print_handler(buffer_handler())
            .max_call_depth(TEST_CALL_DEPTH)
            .build(),
    )
}

/// Run `source` in `session`, capturing printed output and diagnostics.
pub fn run_in(session: &mut Session, source: &str) -> Run {
    session.interpreter().print_handler().clear();
    let mut emitter = TextEmitter::new(Vec::new());
    let outcome = run_source(session, source, &mut emitter);
    Run {
        outcome,
        stdout: session.interpreter().print_handler().get_output(),
        stderr: String::from_utf8(emitter.into_inner()).unwrap(),
    }
}

/// Run `source` in a fresh session.
pub fn run(source: &str) -> Run {
    run_in(&mut session(), source)
}
