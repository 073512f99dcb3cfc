//! Operator Matching Helpers
//!
//! Map the current token to the operator of a given precedence level.

use jess_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_, '_> {
    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current().kind {
            TokenKind::EqualEqual => Some(BinaryOp::Eq),
            TokenKind::BangEqual => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.current().kind {
            TokenKind::Less => Some(BinaryOp::Lt),
            TokenKind::LessEqual => Some(BinaryOp::LtEq),
            TokenKind::Greater => Some(BinaryOp::Gt),
            TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current().kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current().kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        UnaryOp::from_token_kind(self.current().kind)
    }
}
