//! Recursive descent parser for Jess.
//!
//! Produces an owned statement tree from a [`TokenList`]. Syntax errors are
//! reported to [`Diagnostics`] as they are found; the parser then
//! synchronizes to the next statement boundary and keeps going, so one run
//! surfaces every independent error.

mod cursor;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use recovery::{synchronize, TokenSet, STMT_START};

use jess_diagnostic::{Diagnostics, ErrorGuaranteed};
use jess_ir::{Stmt, Token, TokenKind, TokenList};
use tracing::{debug, trace};

/// Maximum number of call arguments or function parameters.
pub const MAX_ARGS: usize = 255;

/// A syntax error that has already been reported.
///
/// Carries no message: the diagnostic was pushed when the error was
/// created. Returning it unwinds to the enclosing declaration, which
/// synchronizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Proof that the error reached the diagnostics context.
    _reported: ErrorGuaranteed,
}

impl ParseError {
    fn new(reported: ErrorGuaranteed) -> Self {
        ParseError {
            _reported: reported,
        }
    }
}

/// Result of parsing a token list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutput {
    /// Statements that parsed cleanly, in source order.
    pub statements: Vec<Stmt>,
    /// Number of syntax errors reported during this parse.
    pub error_count: usize,
}

impl ParseOutput {
    /// Check if the parse reported no syntax errors.
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }
}

/// Parser state.
pub struct Parser<'t, 'd> {
    cursor: Cursor<'t>,
    diagnostics: &'d mut Diagnostics,
    /// Nesting depth of function bodies; `return` is only legal above zero.
    function_depth: u32,
    error_count: usize,
}

impl<'t, 'd> Parser<'t, 'd> {
    /// Create a new parser.
    pub fn new(tokens: &'t TokenList, diagnostics: &'d mut Diagnostics) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            diagnostics,
            function_depth: 0,
            error_count: 0,
        }
    }

    // Cursor delegation methods

    #[inline]
    fn current(&self) -> &'t Token {
        self.cursor.current()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'t Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    /// Consume a token of `kind` or report `message` at the current token.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<&'t Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Report a syntax error at `token` without unwinding.
    fn report(&mut self, token: &Token, message: &str) -> ErrorGuaranteed {
        self.error_count += 1;
        self.diagnostics.syntax_error(token, message)
    }

    #[cold]
    fn error_at(&mut self, token: &Token, message: &str) -> ParseError {
        ParseError::new(self.report(token, message))
    }

    #[cold]
    fn error_at_current(&mut self, message: &str) -> ParseError {
        let token = self.current();
        self.error_at(token, message)
    }

    /// Parse the whole token stream.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                trace!(stmt = %stmt, "parsed statement");
                statements.push(stmt);
            }
        }

        debug!(
            statements = statements.len(),
            errors = self.error_count,
            "parsed program"
        );
        ParseOutput {
            statements,
            error_count: self.error_count,
        }
    }

    /// Parse one declaration, recovering on error.
    ///
    /// Returns `None` when the declaration was malformed; the error has been
    /// reported and the cursor sits at the next statement boundary.
    fn declaration(&mut self) -> Option<Stmt> {
        match self.parse_declaration() {
            Ok(stmt) => Some(stmt),
            Err(_) => {
                let skipped = synchronize(&mut self.cursor);
                trace!(skipped, "synchronized after syntax error");
                None
            }
        }
    }
}

/// Parse a token list into statements, reporting syntax errors.
pub fn parse(tokens: &TokenList, diagnostics: &mut Diagnostics) -> ParseOutput {
    if tokens.is_empty() {
        return ParseOutput::default();
    }
    Parser::new(tokens, diagnostics).parse_program()
}

#[cfg(test)]
mod tests;
