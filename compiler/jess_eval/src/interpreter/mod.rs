//! The interpreter: global state shared by every statement of a session.
//!
//! Statement and expression evaluation live in `crate::exec`; this module
//! owns construction, the top-level run loop and call-depth accounting.

mod builder;
mod scope_guard;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use scope_guard::ScopedInterpreter;

use jess_ir::Stmt;
use tracing::debug;

use crate::errors::stack_overflow;
use crate::{Environment, EvalError, SharedPrintHandler};

/// Tree-walking interpreter.
///
/// Keeps its global environment across calls to [`Interpreter::interpret`],
/// so an interactive session can define a function on one line and call it
/// on the next.
pub struct Interpreter {
    /// Scope that statements currently execute in. Between runs this is the
    /// global scope, the root of every environment chain.
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    /// Number of user-level calls currently on the stack.
    pub(crate) call_depth: usize,
}

impl Interpreter {
    /// Create an interpreter printing to stdout with default limits.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Start configuring an interpreter.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Where `print` output goes.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Maximum number of nested user-level calls.
    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Execute a program's statements in order against the global scope.
    ///
    /// Stops at the first runtime error and returns it; statements after it
    /// do not run. The current scope is back at the globals either way.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements {
            if let Err(error) = self.execute(stmt) {
                debug!(message = %error.message, line = ?error.line, "runtime error");
                self.print_handler.flush();
                return Err(error);
            }
        }
        self.print_handler.flush();
        Ok(())
    }

    /// Fail if another call would exceed the configured depth.
    #[inline]
    pub(crate) fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if self.call_depth >= self.max_call_depth {
            return Err(stack_overflow(self.max_call_depth));
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
