//! Grammar rules, split by syntactic category.
//!
//! - `expr`: expressions, from assignment down to primary
//! - `stmt`: declarations and statements, including `for` desugaring

mod expr;
mod stmt;
