use std::rc::Rc;

use jess_ir::Token;
use jess_stack::ensure_sufficient_stack;

use crate::errors::{arity_mismatch, not_callable};
use crate::{EvalResult, Interpreter, Value};

impl Interpreter {
    /// Call `callee` with evaluated arguments.
    ///
    /// Checks callability, arity, and the call-depth limit, reporting each
    /// failure at the line of the call's closing paren.
    #[tracing::instrument(level = "debug", skip_all, fields(line = paren.line, args = args.len()))]
    pub(crate) fn call_value(&mut self, callee: &Value, args: Vec<Value>, paren: &Token) -> EvalResult {
        let Value::Callable(function) = callee else {
            return Err(not_callable(callee).at_line(paren.line));
        };

        if args.len() != function.arity() {
            return Err(arity_mismatch(function.arity(), args.len()).at_line(paren.line));
        }

        self.check_recursion_limit()
            .map_err(|e| e.at_line(paren.line))?;

        let function = Rc::clone(function);
        self.call_depth += 1;
        let result = ensure_sufficient_stack(|| function.call(self, args));
        self.call_depth -= 1;
        result
    }
}
