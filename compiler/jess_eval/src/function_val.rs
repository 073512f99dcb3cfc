//! Callable values.
//!
//! [`Callable`] is the invocation contract the call expression relies on:
//! arity plus invoke. User functions are the only implementor today; native
//! functions would implement the same trait without touching call sites.

use std::rc::Rc;

use jess_ir::FunctionDecl;

use crate::errors::already_defined;
use crate::exec::ExecOutcome;
use crate::{Environment, EvalResult, Interpreter, Value};

/// Anything a call expression can invoke.
pub trait Callable {
    /// Name used in the value's printed form.
    fn name(&self) -> &str;

    /// Exact number of arguments the callable accepts.
    fn arity(&self) -> usize;

    /// Invoke with arguments already checked against [`Callable::arity`].
    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> EvalResult;

    /// Printed form of the value.
    fn describe(&self) -> String {
        format!("<fn {}>", self.name())
    }
}

/// A user-defined function closed over its defining environment.
pub struct FunctionValue {
    declaration: Rc<FunctionDecl>,
    closure: Environment,
}

impl FunctionValue {
    /// Create a function value capturing `closure`.
    pub fn new(declaration: Rc<FunctionDecl>, closure: Environment) -> Self {
        FunctionValue {
            declaration,
            closure,
        }
    }

    /// The declaration this function was created from.
    pub fn declaration(&self) -> &FunctionDecl {
        &self.declaration
    }
}

impl Callable for FunctionValue {
    fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    fn arity(&self) -> usize {
        self.declaration.arity()
    }

    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> EvalResult {
        let env = self.closure.child();
        for (param, arg) in self.declaration.params.iter().zip(args) {
            env.define(&param.lexeme, arg)
                .map_err(|_| already_defined(&param.lexeme).at_line(param.line))?;
        }

        match interpreter.execute_block(&self.declaration.body, env)? {
            ExecOutcome::Return(value) => Ok(value),
            ExecOutcome::Normal => Ok(Value::Nil),
        }
    }
}
