//! AST printers.
//!
//! Two renderings:
//! - [`Expr::sexpr`]: Lisp-style debug form, `(+ 1 (group (* 2 3)))`. Used in
//!   tests where the tree shape matters.
//! - `Display` for [`Expr`] and [`Stmt`]: canonical Jess source. Every
//!   compound expression is parenthesised, so lexing and parsing the output
//!   again yields a tree that evaluates to the same value. String literals
//!   cannot contain `"` (the language has no escapes), so a literal holding
//!   one has no canonical form. Trace logs use this form.

use std::fmt::{self, Write as _};

use super::{Expr, Stmt};
use crate::Literal;

impl Expr {
    /// Render the Lisp-style debug form.
    pub fn sexpr(&self) -> String {
        let mut out = String::new();
        write_sexpr(self, &mut out);
        out
    }
}

fn write_sexpr(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Literal(Literal::Str(s)) => {
            let _ = write!(out, "\"{s}\"");
        }
        Expr::Literal(literal) => {
            let _ = write!(out, "{literal}");
        }
        Expr::Grouping(inner) => parenthesize(out, "group", &[&**inner]),
        Expr::Unary { op, operand, .. } => parenthesize(out, op.as_symbol(), &[&**operand]),
        Expr::Binary {
            left, op, right, ..
        } => parenthesize(out, op.as_symbol(), &[&**left, &**right]),
        Expr::Logical {
            left, op, right, ..
        } => parenthesize(out, op.as_symbol(), &[&**left, &**right]),
        Expr::Variable(name) => out.push_str(&name.lexeme),
        Expr::Assign { name, value } => {
            let _ = write!(out, "(= {} ", name.lexeme);
            write_sexpr(value, out);
            out.push(')');
        }
        Expr::Call { callee, args, .. } => {
            out.push_str("(call ");
            write_sexpr(callee, out);
            for arg in args {
                out.push(' ');
                write_sexpr(arg, out);
            }
            out.push(')');
        }
    }
}

fn parenthesize(out: &mut String, name: &str, exprs: &[&Expr]) {
    out.push('(');
    out.push_str(name);
    for expr in exprs {
        out.push(' ');
        write_sexpr(expr, out);
    }
    out.push(')');
}

/// Canonical source for a number literal.
///
/// The lexer only produces non-negative finite numbers, so the others are
/// spelled as expressions that evaluate to them.
fn write_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("(0 / 0)")
    } else if n.is_infinite() {
        if n > 0.0 {
            f.write_str("(1 / 0)")
        } else {
            f.write_str("(-1 / 0)")
        }
    } else if n.is_sign_negative() {
        write!(f, "(-{})", -n)
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(Literal::Number(n)) => write_number(*n, f),
            Expr::Literal(Literal::Str(s)) => write!(f, "\"{s}\""),
            Expr::Literal(literal) => write!(f, "{literal}"),
            Expr::Grouping(inner) => write!(f, "({inner})"),
            Expr::Unary { op, operand, .. } => write!(f, "({}{operand})", op.as_symbol()),
            Expr::Binary {
                left, op, right, ..
            } => write!(f, "({left} {} {right})", op.as_symbol()),
            Expr::Logical {
                left, op, right, ..
            } => write!(f, "({left} {} {right})", op.as_symbol()),
            Expr::Variable(name) => f.write_str(&name.lexeme),
            Expr::Assign { name, value } => write!(f, "({} = {value})", name.lexeme),
            Expr::Call { callee, args, .. } => {
                write!(f, "{callee}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(expr) => write!(f, "{expr};"),
            Stmt::Print(expr) => write!(f, "print {expr};"),
            Stmt::Var {
                name,
                initializer: Some(init),
            } => write!(f, "var {} = {init};", name.lexeme),
            Stmt::Var {
                name,
                initializer: None,
            } => write!(f, "var {};", name.lexeme),
            Stmt::Block(stmts) => write_block(stmts, f),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "if ({condition}) ")?;
                match else_branch {
                    Some(else_branch) => {
                        // An open `if` would capture the `else` on reparse.
                        if ends_with_open_if(then_branch) {
                            write_block(std::slice::from_ref(&**then_branch), f)?;
                        } else {
                            write!(f, "{then_branch}")?;
                        }
                        write!(f, " else {else_branch}")
                    }
                    None => write!(f, "{then_branch}"),
                }
            }
            Stmt::While { condition, body } => write!(f, "while ({condition}) {body}"),
            Stmt::Function(decl) => {
                write!(f, "func {}(", decl.name.lexeme)?;
                for (i, param) in decl.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&param.lexeme)?;
                }
                f.write_str(") ")?;
                write_block(&decl.body, f)
            }
            Stmt::Return { value: Some(value), .. } => write!(f, "return {value};"),
            Stmt::Return { value: None, .. } => f.write_str("return;"),
        }
    }
}

/// Whether the last statement in `stmt`'s source is an `if` with no `else`.
fn ends_with_open_if(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::If {
            else_branch: None, ..
        } => true,
        Stmt::If {
            else_branch: Some(else_branch),
            ..
        } => ends_with_open_if(else_branch),
        Stmt::While { body, .. } => ends_with_open_if(body),
        _ => false,
    }
}

fn write_block(stmts: &[Stmt], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    for stmt in stmts {
        write!(f, " {stmt}")?;
    }
    f.write_str(" }")
}
