//! Lexer for Jess using logos.
//!
//! Turns source text into a [`TokenList`] in one left-to-right pass.
//! Whitespace and `//` comments are discarded; newlines only advance the
//! line counter. Problems are reported to [`Diagnostics`] and lexing carries
//! on past them:
//! - an unexpected character is reported and skipped,
//! - an unterminated string is reported and produces no token.
//!
//! The returned list always ends with exactly one `Eof` token.

mod raw_token;

use jess_diagnostic::Diagnostics;
use jess_ir::{Literal, Span, Token, TokenKind, TokenList};
use logos::Logos;
use tracing::{debug, trace};

use raw_token::RawToken;

/// Lex source code into a `TokenList`, reporting lexical errors.
pub fn lex(source: &str, diagnostics: &mut Diagnostics) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);
    let mut line: u32 = 1;

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let raw = match token_result {
            Ok(raw) => raw,
            Err(()) => {
                let c = slice.chars().next().unwrap_or('\u{FFFD}');
                diagnostics.lex_error(line, format!("Unexpected character: '{c}'."));
                continue;
            }
        };

        let (kind, literal) = match raw {
            RawToken::LineComment => continue,
            RawToken::Newline => {
                line += 1;
                continue;
            }
            RawToken::UnterminatedString => {
                line += count_newlines(slice);
                diagnostics.lex_error(line, "Unterminated string.");
                continue;
            }
            RawToken::String => {
                line += count_newlines(slice);
                let content = &slice[1..slice.len() - 1];
                (TokenKind::String, Some(Literal::Str(content.to_string())))
            }
            RawToken::Number(n) => (TokenKind::Number, Some(Literal::Number(n))),
            RawToken::Ident => (
                TokenKind::keyword(slice).unwrap_or(TokenKind::Identifier),
                None,
            ),
            RawToken::LeftParen => (TokenKind::LeftParen, None),
            RawToken::RightParen => (TokenKind::RightParen, None),
            RawToken::LeftBrace => (TokenKind::LeftBrace, None),
            RawToken::RightBrace => (TokenKind::RightBrace, None),
            RawToken::Comma => (TokenKind::Comma, None),
            RawToken::Dot => (TokenKind::Dot, None),
            RawToken::Minus => (TokenKind::Minus, None),
            RawToken::Plus => (TokenKind::Plus, None),
            RawToken::Semicolon => (TokenKind::Semicolon, None),
            RawToken::Slash => (TokenKind::Slash, None),
            RawToken::Star => (TokenKind::Star, None),
            RawToken::Bang => (TokenKind::Bang, None),
            RawToken::BangEqual => (TokenKind::BangEqual, None),
            RawToken::Equal => (TokenKind::Equal, None),
            RawToken::EqualEqual => (TokenKind::EqualEqual, None),
            RawToken::Greater => (TokenKind::Greater, None),
            RawToken::GreaterEqual => (TokenKind::GreaterEqual, None),
            RawToken::Less => (TokenKind::Less, None),
            RawToken::LessEqual => (TokenKind::LessEqual, None),
        };

        let token = Token::new(kind, slice, literal, line, span);
        trace!(%token, line, "token");
        result.push(token);
    }

    let eof_offset = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::eof(line, eof_offset));
    debug!(tokens = result.len(), lines = line, "lexed source");

    result
}

fn count_newlines(text: &str) -> u32 {
    let count = text.bytes().filter(|&b| b == b'\n').count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
