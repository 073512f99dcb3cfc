//! Jess Eval - tree-walking evaluator for Jess programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Value`: closed tagged union of runtime values
//! - `Environment`: reference-counted scope nodes chained to their parent
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `Callable`: invocation contract implemented by `FunctionValue`
//! - `ExecOutcome`: explicit normal-or-return result of statement execution
//!
//! Runtime errors are [`EvalError`] values; the first one aborts the run and
//! is converted to a diagnostic by the driver.

mod environment;
pub mod errors;
mod exec;
mod function_val;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{Environment, LocalScope, Scope, ScopeError};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use exec::ExecOutcome;
pub use function_val::{Callable, FunctionValue};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;
