//! Declaration and statement parsing.

use std::rc::Rc;

use jess_ir::{Expr, FunctionDecl, Literal, Stmt, Token, TokenKind};
use jess_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, MAX_ARGS};

impl Parser<'_, '_> {
    /// Parse a declaration: `func`, `var`, or any other statement.
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.eat(TokenKind::Func) {
            return self.function_declaration();
        }
        if self.eat(TokenKind::Var) {
            return self.var_declaration();
        }
        self.statement()
    }

    /// Parse a statement.
    ///
    /// Uses `ensure_sufficient_stack` since statements nest through blocks
    /// and control-flow bodies.
    fn statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> Result<Stmt, ParseError> {
        match self.current().kind {
            TokenKind::For => {
                self.advance();
                self.for_statement()
            }
            TokenKind::If => {
                self.advance();
                self.if_statement()
            }
            TokenKind::Print => {
                self.advance();
                self.print_statement()
            }
            TokenKind::Return => {
                let keyword = self.advance();
                self.return_statement(keyword)
            }
            TokenKind::While => {
                self.advance();
                self.while_statement()
            }
            TokenKind::LeftBrace => {
                self.advance();
                Ok(Stmt::Block(self.block()?))
            }
            _ => self.expression_statement(),
        }
    }

    /// `func name(params) { body }`, after `func`.
    fn function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self
            .expect(TokenKind::Identifier, "Expect function name.")?
            .clone();
        self.expect(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params: Vec<Token> = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARGS {
                    let token = self.current();
                    self.report(token, "Can't have more than 255 parameters.");
                }
                let param = self.expect(TokenKind::Identifier, "Expect parameter name.")?;
                params.push(param.clone());
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.expect(TokenKind::LeftBrace, "Expect '{' before function body.")?;

        self.function_depth += 1;
        let body = self.block();
        self.function_depth -= 1;

        Ok(Stmt::Function(Rc::new(FunctionDecl {
            name,
            params,
            body: body?,
        })))
    }

    /// `var name [= expr];`, after `var`.
    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self
            .expect(TokenKind::Identifier, "Expect variable name.")?
            .clone();

        let initializer = if self.eat(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.expect(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::Var { name, initializer })
    }

    /// Statements up to the closing `}`, after `{`.
    ///
    /// Each inner declaration recovers on its own, so one bad line inside a
    /// block does not discard its siblings.
    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.expect(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    /// `for (init; cond; incr) body`, after `for`.
    ///
    /// Desugared on the spot:
    /// `{ init; while (cond) { body; incr; } }`
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.eat(TokenKind::Semicolon) {
            None
        } else if self.eat(TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        body = Stmt::While {
            condition: condition.unwrap_or(Expr::Literal(Literal::Bool(true))),
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    /// `if (cond) then [else otherwise]`, after `if`.
    ///
    /// A dangling `else` binds to the nearest `if`.
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.eat(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn return_statement(&mut self, keyword: &Token) -> Result<Stmt, ParseError> {
        if self.function_depth == 0 {
            self.report(keyword, "Can't return from top-level code.");
        }

        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::Semicolon, "Expect ';' after return value.")?;

        Ok(Stmt::Return {
            keyword: keyword.clone(),
            value,
        })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }
}
