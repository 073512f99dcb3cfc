//! Expression parsing.
//!
//! One method per precedence level, lowest first:
//! assignment, `or`, `and`, equality, comparison, additive, multiplicative,
//! unary, call, primary. Every binary level is left-associative and folds
//! into a left-leaning tree; assignment is right-associative.

mod operators;

use jess_ir::{BinaryOp, Expr, Literal, LogicalOp, Token, TokenKind};
use jess_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, MAX_ARGS};

fn binary(left: Expr, op: BinaryOp, operator: Token, right: Expr) -> Expr {
    Expr::Binary {
        left: Box::new(left),
        op,
        operator,
        right: Box::new(right),
    }
}

fn logical(left: Expr, op: LogicalOp, operator: Token, right: Expr) -> Expr {
    Expr::Logical {
        left: Box::new(left),
        op,
        operator,
        right: Box::new(right),
    }
}

impl Parser<'_, '_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.assignment())
    }

    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.logic_or()?;

        if !self.check(TokenKind::Equal) {
            return Ok(target);
        }
        let equals = self.advance();
        let value = self.expression()?;

        if let Expr::Variable(name) = &target {
            return Ok(Expr::Assign {
                name: name.clone(),
                value: Box::new(value),
            });
        }
        // Reported but not unwound: the parser is not confused.
        self.report(equals, "Invalid assignment target.");
        Ok(target)
    }

    fn logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.logic_and()?;

        while self.check(TokenKind::Or) {
            let operator = self.advance().clone();
            let right = self.logic_and()?;
            left = logical(left, LogicalOp::Or, operator, right);
        }

        Ok(left)
    }

    fn logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.equality()?;

        while self.check(TokenKind::And) {
            let operator = self.advance().clone();
            let right = self.equality()?;
            left = logical(left, LogicalOp::And, operator, right);
        }

        Ok(left)
    }

    /// Parse `==` and `!=`.
    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.comparison()?;

        while let Some(op) = self.match_equality_op() {
            let operator = self.advance().clone();
            let right = self.comparison()?;
            left = binary(left, op, operator, right);
        }

        Ok(left)
    }

    /// Parse `<`, `<=`, `>` and `>=`.
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.term()?;

        while let Some(op) = self.match_comparison_op() {
            let operator = self.advance().clone();
            let right = self.term()?;
            left = binary(left, op, operator, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.factor()?;

        while let Some(op) = self.match_additive_op() {
            let operator = self.advance().clone();
            let right = self.factor()?;
            left = binary(left, op, operator, right);
        }

        Ok(left)
    }

    /// Parse `*` and `/`.
    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            let operator = self.advance().clone();
            let right = self.unary()?;
            left = binary(left, op, operator, right);
        }

        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.call();
        };

        let operator = self.advance().clone();
        let operand = ensure_sufficient_stack(|| self.unary())?;
        Ok(Expr::Unary {
            op,
            operator,
            operand: Box::new(operand),
        })
    }

    /// Parse a primary followed by any number of `(args)` suffixes.
    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        while self.eat(TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                if args.len() >= MAX_ARGS {
                    let token = self.current();
                    self.report(token, "Can't have more than 255 arguments.");
                }
                args.push(self.expression()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        let paren = self
            .expect(TokenKind::RightParen, "Expect ')' after arguments.")?
            .clone();

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            args,
        })
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let expr = match token.kind {
            TokenKind::False => Expr::Literal(Literal::Bool(false)),
            TokenKind::True => Expr::Literal(Literal::Bool(true)),
            TokenKind::Nil => Expr::Literal(Literal::Nil),
            TokenKind::Number | TokenKind::String => {
                Expr::Literal(token.literal.clone().unwrap_or(Literal::Nil))
            }
            TokenKind::Identifier => Expr::Variable(token.clone()),
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expression()?;
                self.expect(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(self.error_at_current("Expect expression.")),
        };

        self.advance();
        Ok(expr)
    }
}
