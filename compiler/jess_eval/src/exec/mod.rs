//! Execution logic for the interpreter, organized by category:
//!
//! - `stmt`: statement execution and block scoping
//! - `expr`: expression evaluation (literals, operators, variables)
//! - `call`: call expressions and the call-depth limit

mod call;
mod expr;
mod stmt;

use crate::Value;

/// How a statement finished.
///
/// `return` is not an error: it travels back through blocks and loops as a
/// value until the enclosing function call consumes it.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecOutcome {
    /// Ran to completion; continue with the next statement.
    Normal,
    /// A `return` ran; abandon the rest of the function body.
    Return(Value),
}
