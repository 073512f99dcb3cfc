//! A run of the pipeline over one piece of source text.

use jess_diagnostic::{Diagnostic, Diagnostics};
use jess_eval::Interpreter;
use tracing::debug;

use crate::exit;

/// Where a [`Session`] is in its current run.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Phase {
    /// Nothing has run yet.
    Idle,
    Lexing,
    Parsing,
    Evaluating,
    /// The last run finished, successfully or not.
    Done,
}

/// How a run ended.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RunOutcome {
    /// Every statement ran.
    Ok,
    /// A lexical or syntax error stopped the run before evaluation.
    StaticError,
    /// Evaluation aborted with a runtime error.
    RuntimeError,
}

impl RunOutcome {
    /// Exit status for a script that ended this way.
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Ok => exit::SUCCESS,
            RunOutcome::StaticError => exit::DATA_ERR,
            RunOutcome::RuntimeError => exit::SOFTWARE,
        }
    }
}

/// Diagnostics context and interpreter shared by successive runs.
///
/// Globals defined by one run are visible to the next, which is what lets
/// the interactive prompt define a function on one line and call it on
/// another.
pub struct Session {
    diagnostics: Diagnostics,
    interpreter: Interpreter,
    phase: Phase,
}

impl Session {
    /// Create a session around a configured interpreter.
    pub fn new(interpreter: Interpreter) -> Self {
        Session {
            diagnostics: Diagnostics::new(),
            interpreter,
            phase: Phase::Idle,
        }
    }

    /// Lex, parse, and (if both were clean) evaluate `source`.
    ///
    /// Every lexical error is collected, and parsing only starts once the
    /// token stream is clean. Syntax errors are likewise all collected
    /// before giving up. A runtime error is recorded as a diagnostic and
    /// ends the run.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn run(&mut self, source: &str) -> RunOutcome {
        self.phase = Phase::Lexing;
        let tokens = jess_lexer::lex(source, &mut self.diagnostics);
        if self.diagnostics.had_static_error() {
            debug!(errors = self.diagnostics.len(), "skipping parse");
            self.phase = Phase::Done;
            return RunOutcome::StaticError;
        }

        self.phase = Phase::Parsing;
        let output = jess_parse::parse(&tokens, &mut self.diagnostics);
        if self.diagnostics.had_static_error() {
            debug!(errors = self.diagnostics.len(), "skipping evaluation");
            self.phase = Phase::Done;
            return RunOutcome::StaticError;
        }

        self.phase = Phase::Evaluating;
        let outcome = match self.interpreter.interpret(&output.statements) {
            Ok(()) => RunOutcome::Ok,
            Err(error) => {
                self.diagnostics.push(error.to_diagnostic());
                RunOutcome::RuntimeError
            }
        };
        self.phase = Phase::Done;
        outcome
    }

    /// Forget lexical and syntax errors so the next run can evaluate.
    pub fn reset_static(&mut self) {
        self.diagnostics.reset_static();
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Diagnostics reported so far and not yet taken.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Drain reported diagnostics for emission.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}
