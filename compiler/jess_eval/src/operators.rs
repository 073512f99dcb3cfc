//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the value set is closed, so every operator is
//! an exhaustive match on the operand variants.

use jess_ir::BinaryOp;

use crate::errors::{invalid_plus_operands, operands_must_be_numbers};
use crate::{EvalResult, Value};

/// Evaluate a binary operation on two already-evaluated operands.
///
/// Errors carry no line; the caller attaches the operator's.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub => numeric(left, right, op, |a, b| Value::Number(a - b)),
        BinaryOp::Mul => numeric(left, right, op, |a, b| Value::Number(a * b)),
        BinaryOp::Div => numeric(left, right, op, |a, b| Value::Number(a / b)),
        BinaryOp::Lt => numeric(left, right, op, |a, b| Value::Bool(a < b)),
        BinaryOp::LtEq => numeric(left, right, op, |a, b| Value::Bool(a <= b)),
        BinaryOp::Gt => numeric(left, right, op, |a, b| Value::Bool(a > b)),
        BinaryOp::GtEq => numeric(left, right, op, |a, b| Value::Bool(a >= b)),
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
    }
}

/// Apply an operator defined only on two numbers.
#[inline]
fn numeric(left: &Value, right: &Value, op: BinaryOp, f: fn(f64, f64) -> Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(f(*a, *b)),
        _ => Err(operands_must_be_numbers(op)),
    }
}

/// `+`: numeric addition, string concatenation, or a string followed by any
/// value in its printed form. A number on the left never coerces.
fn eval_add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        (Value::Str(a), other) => Ok(Value::string(format!("{a}{other}"))),
        _ => Err(invalid_plus_operands(left, right)),
    }
}
