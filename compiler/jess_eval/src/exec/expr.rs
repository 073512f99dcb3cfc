use jess_ir::{Expr, LogicalOp};
use jess_stack::ensure_sufficient_stack;

use crate::errors::undefined_variable;
use crate::{evaluate_binary, evaluate_unary, EvalResult, Interpreter, Value};

impl Interpreter {
    /// Evaluate an expression to a value.
    ///
    /// Uses `ensure_sufficient_stack` since expressions nest arbitrarily.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary {
                op,
                operator,
                operand,
            } => {
                let operand = self.evaluate(operand)?;
                evaluate_unary(*op, &operand).map_err(|e| e.at_line(operator.line))
            }
            Expr::Binary {
                left,
                op,
                operator,
                right,
            } => {
                // Both sides are evaluated before the operand types are checked.
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(&left, &right, *op).map_err(|e| e.at_line(operator.line))
            }
            Expr::Logical {
                left, op, right, ..
            } => {
                let left = self.evaluate(left)?;
                let decided = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if decided {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Variable(name) => self
                .env
                .get(&name.lexeme)
                .ok_or_else(|| undefined_variable(&name.lexeme).at_line(name.line)),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env
                    .assign(&name.lexeme, value.clone())
                    .map_err(|_| undefined_variable(&name.lexeme).at_line(name.line))?;
                Ok(value)
            }
            Expr::Call {
                callee,
                paren,
                args,
            } => {
                let callee = self.evaluate(callee)?;
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.evaluate(arg)?);
                }
                self.call_value(&callee, values, paren)
            }
        }
    }
}
