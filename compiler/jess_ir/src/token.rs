//! Token types for the lexer and parser.

use std::fmt;

use crate::{Literal, Span};

/// Token kinds.
///
/// `#[repr(u8)]` keeps [`TokenKind::discriminant_index`] a plain cast so the
/// parser can build bitset token sets in `const` context.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    For,
    Func,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    Let,
    While,

    Eof,
}

impl TokenKind {
    /// Highest discriminant value; token sets must be wide enough to hold it.
    pub const MAX_DISCRIMINANT: u8 = TokenKind::Eof as u8;

    /// Dense index of this kind, used as a bit position in token sets.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Look up the keyword spelled by `text`, if any.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "and" => TokenKind::And,
            "class" => TokenKind::Class,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "for" => TokenKind::For,
            "func" => TokenKind::Func,
            "if" => TokenKind::If,
            "nil" => TokenKind::Nil,
            "or" => TokenKind::Or,
            "print" => TokenKind::Print,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            "let" => TokenKind::Let,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }

    /// Human-readable name for diagnostics and debug dumps.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::And => "and",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Func => "func",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::Let => "let",
            TokenKind::While => "while",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A lexical unit: kind, the exact source text, the decoded literal (for
/// numbers and strings) and the 1-based source line.
///
/// Tokens are immutable once the lexer creates them; the parser clones the
/// ones it needs into the AST (names, operators, call parens) so runtime
/// errors can name the offending line.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: u32,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// Create a token with no literal and a dummy span.
    ///
    /// Used when a tree is built by hand rather than by the parser.
    pub fn synthetic(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Token::new(kind, lexeme, None, line, Span::DUMMY)
    }

    /// The end-of-input token for a source ending on `line`.
    pub fn eof(line: u32, offset: u32) -> Self {
        Token::new(TokenKind::Eof, "", None, line, Span::point(offset))
    }

    /// Check if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{:?} {} {literal}", self.kind, self.lexeme),
            None => write!(f, "{:?} {}", self.kind, self.lexeme),
        }
    }
}

/// The lexer's output: an ordered token sequence that always ends with
/// exactly one `Eof` token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens, including the trailing `Eof`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the list holds no tokens at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the token at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Borrow the tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
