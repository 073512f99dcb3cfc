//! Environments for lexical scoping.
//!
//! Each scope is a node holding its own bindings and a handle to its
//! enclosing scope. Nodes are reference-counted: a block's scope lives until
//! the block exits and every closure created inside it is gone.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Value;

/// Error returned by scope operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeError {
    /// `define` found the name already bound in the same scope.
    AlreadyDefined,
    /// `get` or `assign` exhausted the scope chain.
    Undefined,
}

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// This type wraps `Rc<RefCell<T>>` and enforces that all scope allocations
/// go through the `LocalScope::new()` factory method.
///
/// `LocalScope<T>` is NOT thread-safe; the evaluator runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Create a new `LocalScope` wrapping the given value.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing variable bindings.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    /// Enclosing scope; `None` only for the global scope.
    parent: Option<Environment>,
}

impl Scope {
    /// Define a variable in this scope.
    ///
    /// Fails if the name is already bound here; bindings in enclosing scopes
    /// are shadowed, not touched.
    pub fn define(&mut self, name: &str, value: Value) -> Result<(), ScopeError> {
        if self.bindings.contains_key(name) {
            return Err(ScopeError::AlreadyDefined);
        }
        self.bindings.insert(name.to_owned(), value);
        Ok(())
    }

    /// Look up a variable by name, searching outward.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.get(name))
    }

    /// Assign to the nearest existing binding of `name`.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), ScopeError> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.assign(name, value),
            None => Err(ScopeError::Undefined),
        }
    }
}

/// Handle to a scope node.
///
/// Cloning the handle shares the scope; closures keep their defining
/// environment alive this way.
#[derive(Clone, Debug)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Create a global environment with no enclosing scope.
    pub fn global() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// Create a new scope enclosed by this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
        }))
    }

    /// Define `name` in this scope.
    pub fn define(&self, name: &str, value: Value) -> Result<(), ScopeError> {
        self.0.borrow_mut().define(name, value)
    }

    /// Look up `name` here or in an enclosing scope.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.borrow().lookup(name)
    }

    /// Assign to the nearest binding of `name`.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), ScopeError> {
        self.0.borrow_mut().assign(name, value)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::global()
    }
}
