//! Runtime error types and constructors.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories; its `Display` impl is the
//! single source of message text. Factory functions (e.g.
//! `undefined_variable()`) are the public API and populate both `kind` and
//! `message`. The evaluator attaches the source line of the token that
//! triggered the error with [`EvalError::at_line`].

use std::fmt;

use jess_diagnostic::Diagnostic;
use jess_ir::BinaryOp;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Lookup or assignment of a name bound nowhere in the scope chain.
    UndefinedVariable { name: String },
    /// Second declaration of a name in the same scope.
    AlreadyDefined { name: String },
    /// An arithmetic or comparison operator got a non-number operand.
    OperandsMustBeNumbers { op: BinaryOp },
    /// Unary minus on a non-number.
    OperandMustBeNumber,
    /// `+` whose left operand is neither a number paired with a number nor
    /// a string.
    InvalidPlusOperands { left: &'static str, right: &'static str },
    /// Call of a value that is not callable.
    NotCallable { type_name: &'static str },
    /// Call with the wrong number of arguments.
    ArityMismatch { expected: usize, got: usize },
    /// User-level recursion deeper than the configured limit.
    StackOverflow { depth: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),
            Self::AlreadyDefined { name } => {
                write!(f, "Variable '{name}' is already defined in this scope.")
            }
            Self::OperandsMustBeNumbers { .. } => f.write_str("Operands must be numbers."),
            Self::OperandMustBeNumber => f.write_str("Operand must be a number."),
            Self::InvalidPlusOperands { left, right } => write!(
                f,
                "Operands must be two numbers or start with a string, got {left} and {right}."
            ),
            Self::NotCallable { type_name } => {
                write!(f, "Value of type {type_name} is not callable.")
            }
            Self::ArityMismatch { expected, got } => {
                write!(f, "Expected {expected} arguments but got {got}.")
            }
            Self::StackOverflow { depth } => {
                write!(f, "Stack overflow: call depth exceeded {depth}.")
            }
        }
    }
}

/// A runtime error.
///
/// Aborts the current statement and every statement after it in the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
    /// Source line of the token that triggered the error.
    pub line: Option<u32>,
}

impl EvalError {
    /// Create an error from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            line: None,
        }
    }

    /// Attach the source line, keeping one that is already set.
    ///
    /// Errors raised deep inside a call keep the line where they happened
    /// rather than the line of the outer call site.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line.get_or_insert(line);
        self
    }

    /// Convert to a runtime diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::runtime(self.line.unwrap_or_default(), self.message.clone())
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}\n[line {line}]", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for EvalError {}

// Variable Errors

/// Name not bound in any enclosing scope.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Name declared twice in one scope.
#[cold]
pub fn already_defined(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AlreadyDefined {
        name: name.to_string(),
    })
}

// Operator Errors

/// Arithmetic or comparison on non-numbers.
#[cold]
pub fn operands_must_be_numbers(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandsMustBeNumbers { op })
}

/// Negation of a non-number.
#[cold]
pub fn operand_must_be_number() -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandMustBeNumber)
}

/// `+` with operands it cannot combine.
#[cold]
pub fn invalid_plus_operands(left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidPlusOperands {
        left: left.type_name(),
        right: right.type_name(),
    })
}

// Call Errors

/// Call of a non-callable value.
#[cold]
pub fn not_callable(callee: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: callee.type_name(),
    })
}

/// Wrong argument count.
#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

/// Maximum call depth exceeded.
#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

#[cfg(test)]
mod tests;
