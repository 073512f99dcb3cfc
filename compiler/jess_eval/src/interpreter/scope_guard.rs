//! RAII-style scope guard for Interpreter environment management.
//!
//! Entering a block or a function body swaps in a new environment. The
//! guard puts the previous one back when dropped, so the scope is restored
//! on normal completion, on `return`, and on a runtime error alike.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`,
//! allowing transparent access to all interpreter methods.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::Environment;

/// RAII guard that restores the previous environment on drop.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
    previous: Option<Environment>,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.interpreter.env = previous;
        }
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Make `env` the current environment until the guard is dropped.
    pub fn scoped(&mut self, env: Environment) -> ScopedInterpreter<'_> {
        let previous = std::mem::replace(&mut self.env, env);
        ScopedInterpreter {
            interpreter: self,
            previous: Some(previous),
        }
    }
}
