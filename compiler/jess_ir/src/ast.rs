//! Abstract syntax tree.
//!
//! Two families of tagged variants: [`Expr`] and [`Stmt`]. Operators are
//! closed enums (`BinaryOp`, `UnaryOp`, `LogicalOp`) so the evaluator matches
//! them exhaustively; each operator node also keeps its source token so a
//! runtime error can report the line it came from.
//!
//! `for` loops have no node of their own: the parser desugars them into
//! `Block`/`While`.

use std::rc::Rc;

use crate::{Literal, Token, TokenKind};

mod printer;

/// Arithmetic, comparison and equality operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    /// The token kind that spells this operator.
    pub fn token_kind(self) -> TokenKind {
        match self {
            BinaryOp::Add => TokenKind::Plus,
            BinaryOp::Sub => TokenKind::Minus,
            BinaryOp::Mul => TokenKind::Star,
            BinaryOp::Div => TokenKind::Slash,
            BinaryOp::Eq => TokenKind::EqualEqual,
            BinaryOp::NotEq => TokenKind::BangEqual,
            BinaryOp::Lt => TokenKind::Less,
            BinaryOp::LtEq => TokenKind::LessEqual,
            BinaryOp::Gt => TokenKind::Greater,
            BinaryOp::GtEq => TokenKind::GreaterEqual,
        }
    }

    /// Source spelling.
    pub fn as_symbol(self) -> &'static str {
        self.token_kind().display_name()
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `!x`
    Not,
}

impl UnaryOp {
    /// Map a token kind to the unary operator it spells.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }

    /// The token kind that spells this operator.
    pub fn token_kind(self) -> TokenKind {
        match self {
            UnaryOp::Neg => TokenKind::Minus,
            UnaryOp::Not => TokenKind::Bang,
        }
    }

    /// Source spelling.
    pub fn as_symbol(self) -> &'static str {
        self.token_kind().display_name()
    }
}

/// Short-circuiting operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// The token kind that spells this operator.
    pub fn token_kind(self) -> TokenKind {
        match self {
            LogicalOp::And => TokenKind::And,
            LogicalOp::Or => TokenKind::Or,
        }
    }

    /// Source spelling.
    pub fn as_symbol(self) -> &'static str {
        self.token_kind().display_name()
    }
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        operator: Token,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        operator: Token,
        right: Box<Expr>,
    },
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        operator: Token,
        right: Box<Expr>,
    },
    Variable(Token),
    Assign {
        name: Token,
        value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        /// The closing paren, used to report call-site errors.
        paren: Token,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Build a unary node, synthesizing the operator token.
    pub fn unary(op: UnaryOp, operand: Expr, line: u32) -> Self {
        Expr::Unary {
            op,
            operator: Token::synthetic(op.token_kind(), op.as_symbol(), line),
            operand: Box::new(operand),
        }
    }

    /// Build a binary node, synthesizing the operator token.
    pub fn binary(left: Expr, op: BinaryOp, right: Expr, line: u32) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            operator: Token::synthetic(op.token_kind(), op.as_symbol(), line),
            right: Box::new(right),
        }
    }

    /// Build a logical node, synthesizing the operator token.
    pub fn logical(left: Expr, op: LogicalOp, right: Expr, line: u32) -> Self {
        Expr::Logical {
            left: Box::new(left),
            op,
            operator: Token::synthetic(op.token_kind(), op.as_symbol(), line),
            right: Box::new(right),
        }
    }

    /// Build a grouping node.
    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    /// Move this node's children onto `out`, leaving `nil` placeholders.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => {}
            Expr::Grouping(inner)
            | Expr::Unary { operand: inner, .. }
            | Expr::Assign { value: inner, .. } => out.push(take_expr(inner)),
            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                out.push(take_expr(left));
                out.push(take_expr(right));
            }
            Expr::Call { callee, args, .. } => {
                out.push(take_expr(callee));
                out.append(args);
            }
        }
    }
}

fn take_expr(slot: &mut Expr) -> Expr {
    std::mem::replace(slot, Expr::Literal(Literal::Nil))
}

/// Drops the tree from a heap work-list so nesting depth never reaches
/// the native stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

/// A function declaration: `func name(params) { body }`.
///
/// Shared behind `Rc` by the statement that declares it and by every
/// function value created from it.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl FunctionDecl {
    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Function(Rc<FunctionDecl>),
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
}

impl Stmt {
    /// Move this node's child statements onto `out`. Expressions inside
    /// the node drop through their own work-list.
    fn take_children(&mut self, out: &mut Vec<Stmt>) {
        match self {
            Stmt::Expression(_) | Stmt::Print(_) | Stmt::Var { .. } | Stmt::Return { .. } => {}
            Stmt::Block(statements) => out.append(statements),
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                out.push(take_stmt(then_branch));
                if let Some(else_branch) = else_branch {
                    out.push(take_stmt(else_branch));
                }
            }
            Stmt::While { body, .. } => out.push(take_stmt(body)),
            // Shared declarations are left to their last owner.
            Stmt::Function(decl) => {
                if let Some(decl) = Rc::get_mut(decl) {
                    out.append(&mut decl.body);
                }
            }
        }
    }
}

fn take_stmt(slot: &mut Stmt) -> Stmt {
    std::mem::replace(slot, Stmt::Block(Vec::new()))
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut stmt) = pending.pop() {
            stmt.take_children(&mut pending);
        }
    }
}
