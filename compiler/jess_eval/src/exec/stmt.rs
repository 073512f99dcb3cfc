use std::rc::Rc;

use jess_ir::{Stmt, Token};
use jess_stack::ensure_sufficient_stack;
use tracing::trace;

use super::ExecOutcome;
use crate::errors::already_defined;
use crate::{Environment, EvalError, FunctionValue, Interpreter, Value};

impl Interpreter {
    /// Execute one statement in the current environment.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<ExecOutcome, EvalError> {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> Result<ExecOutcome, EvalError> {
        trace!(%stmt, "execute");
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(ExecOutcome::Normal)
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler().println(&value.to_string());
                Ok(ExecOutcome::Normal)
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(init) => self.evaluate(init)?,
                    None => Value::Nil,
                };
                self.declare(name, value)?;
                Ok(ExecOutcome::Normal)
            }
            Stmt::Block(statements) => {
                let env = self.env.child();
                self.execute_block(statements, env)
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(ExecOutcome::Normal)
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let ExecOutcome::Return(value) = self.execute(body)? {
                        return Ok(ExecOutcome::Return(value));
                    }
                }
                Ok(ExecOutcome::Normal)
            }
            Stmt::Function(decl) => {
                // Declared inside a call, the function holds the call's scope
                // and that scope holds the function: the pair is never freed.
                let function = FunctionValue::new(Rc::clone(decl), self.env.clone());
                self.declare(&decl.name, Value::callable(function))?;
                Ok(ExecOutcome::Normal)
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(ExecOutcome::Return(value))
            }
        }
    }

    /// Execute `statements` with `env` as the current environment.
    ///
    /// The previous environment is restored on every exit path. Stops early
    /// and propagates when a statement returns.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        env: Environment,
    ) -> Result<ExecOutcome, EvalError> {
        let mut scoped = self.scoped(env);
        for stmt in statements {
            if let ExecOutcome::Return(value) = scoped.execute(stmt)? {
                return Ok(ExecOutcome::Return(value));
            }
        }
        Ok(ExecOutcome::Normal)
    }

    /// Bind `name` in the current scope.
    fn declare(&mut self, name: &Token, value: Value) -> Result<(), EvalError> {
        self.env
            .define(&name.lexeme, value)
            .map_err(|_| already_defined(&name.lexeme).at_line(name.line))
    }
}
