//! Raw tokens recognised by logos, before keyword lookup and literal decoding.

use logos::Logos;

/// Raw token from logos.
///
/// Keywords are not listed here: they lex as `Ident` and are re-tagged from
/// the keyword table in `jess_ir`.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    // === Trivia ===
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    // === Punctuation ===
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,

    // === Operators ===
    #[token("!=")]
    BangEqual,
    #[token("!")]
    Bang,
    #[token("==")]
    EqualEqual,
    #[token("=")]
    Equal,
    #[token(">=")]
    GreaterEqual,
    #[token(">")]
    Greater,
    #[token("<=")]
    LessEqual,
    #[token("<")]
    Less,

    // === Literals ===

    // digits ('.' digits)? - a trailing dot is left for the `Dot` token
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Strings have no escapes and may span lines.
    #[regex(r#""[^"]*""#)]
    String,

    // An opening quote that runs to end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
