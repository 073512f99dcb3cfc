//! Stack safety for the recursive phases of the interpreter.
//!
//! The parser recurses once per nesting level of the source and the
//! evaluator recurses once per AST node and once per user-level call, so a
//! deeply nested expression or a deeply recursive Jess function would blow
//! the native stack. Every recursive entry point wraps its body in
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, this allocates
/// an additional segment before calling `f`.
///
/// ```text
/// fn expression(&mut self) -> Result<Expr, ParseError> {
///     ensure_sufficient_stack(|| self.assignment())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
