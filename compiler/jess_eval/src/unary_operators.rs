//! Unary operator implementations for the evaluator.

use jess_ir::UnaryOp;

use crate::errors::operand_must_be_number;
use crate::{EvalResult, Value};

/// Evaluate a unary operation.
///
/// `-` requires a number; `!` negates truthiness and accepts anything.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match op {
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(operand_must_be_number()),
        },
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
    }
}
