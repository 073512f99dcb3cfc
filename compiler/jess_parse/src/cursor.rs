//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use jess_ir::{Token, TokenKind, TokenList};

/// Cursor for navigating tokens.
///
/// Tracks the current position in the token stream. The stream always ends
/// with `Eof`, and the cursor never moves past it.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    ///
    /// The list must be non-empty; lexer output always is.
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(
            tokens.as_slice().last().is_some_and(Token::is_eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Get the current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Get the previous token's kind, or `Eof` at the start of the stream.
    #[inline]
    pub fn previous_kind(&self) -> TokenKind {
        if self.pos > 0 {
            self.tokens[self.pos - 1].kind
        } else {
            TokenKind::Eof
        }
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it.
    ///
    /// At `Eof` the cursor stays put and the `Eof` token is returned.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}
