//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Default limit on nested user-level calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for creating Interpreter instances.
///
/// ```text
/// let interpreter = InterpreterBuilder::new()
///     .print_handler(buffer_handler())
///     .max_call_depth(256)
///     .build();
/// ```
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    /// Create a builder with stdout output and the default call depth.
    pub fn new() -> Self {
        Self {
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Set where `print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the maximum number of nested user-level calls.
    ///
    /// Exceeding it is a runtime error instead of a native stack overflow.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        Interpreter {
            env: Environment::global(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
