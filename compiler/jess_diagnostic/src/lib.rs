//! Diagnostic system for the Jess interpreter.
//!
//! Two independent channels feed one [`Diagnostics`] context:
//! - **Static** (lexical + syntax): reported by the lexer and parser, which
//!   keep going after each one so a single run surfaces every independent
//!   error. Any static diagnostic skips evaluation.
//! - **Runtime**: reported once per run by the driver when evaluation aborts.
//!
//! The context is a plain value owned by the driver and passed `&mut` into
//! each phase, so an interactive session resets it between lines instead of
//! clearing global flags.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] can only be obtained by reporting an error, so code
//! that returns it proves the user was told what went wrong.
//!
//! ```text
//! let guarantee = diagnostics.syntax_error(&token, "Expect expression.");
//! return Err(ParseError::new(guarantee));
//! ```

mod diagnostic;
pub mod emitter;
mod guarantee;
mod queue;

pub use diagnostic::{Diagnostic, DiagnosticKind, Location};
pub use guarantee::ErrorGuaranteed;
pub use queue::Diagnostics;
