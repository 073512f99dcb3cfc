//! Jess IR - the data shared by every phase of the interpreter.
//!
//! This crate contains:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - Literal values decoded by the lexer
//! - AST nodes (`Expr`, `Stmt`) produced by the parser
//! - Printers for the AST (s-expression debug form and canonical source form)
//!
//! # Design Philosophy
//!
//! - **Own the tree**: a parent exclusively owns its children (`Box<Expr>`,
//!   `Vec<Stmt>`); function bodies sit behind `Rc` so closures can share
//!   them without copying.
//! - **Immutable after parsing**: nothing in this crate exposes mutation of a
//!   finished tree; the evaluator only reads it.

mod ast;
mod literal;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, FunctionDecl, LogicalOp, Stmt, UnaryOp};
pub use literal::Literal;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
