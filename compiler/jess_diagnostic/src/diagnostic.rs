//! Core diagnostic type.

use std::fmt;

use jess_ir::Token;

/// Which phase produced a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    /// Unexpected character, unterminated string.
    Lex,
    /// Grammar violation found by the parser.
    Syntax,
    /// Evaluation aborted.
    Runtime,
}

impl DiagnosticKind {
    /// Lexical and syntax diagnostics both block evaluation.
    #[inline]
    pub fn is_static(self) -> bool {
        matches!(self, DiagnosticKind::Lex | DiagnosticKind::Syntax)
    }
}

/// Where on its line a syntax error was found.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Location {
    /// No token to point at (lexical and runtime diagnostics).
    None,
    /// The parser ran out of tokens.
    AtEnd,
    /// The offending token's lexeme.
    At(String),
}

impl Location {
    /// Location of a syntax error at `token`.
    pub fn of(token: &Token) -> Self {
        if token.is_eof() {
            Location::AtEnd
        } else {
            Location::At(token.lexeme.clone())
        }
    }
}

/// A reported problem, with the 1-based source line it refers to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: u32,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    /// A lexical error on `line`.
    pub fn lex(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Lex,
            line,
            location: Location::None,
            message: message.into(),
        }
    }

    /// A syntax error at `token`.
    pub fn syntax(token: &Token, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Syntax,
            line: token.line,
            location: Location::of(token),
            message: message.into(),
        }
    }

    /// A runtime error raised on `line`.
    pub fn runtime(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Runtime,
            line,
            location: Location::None,
            message: message.into(),
        }
    }

    /// Check if this diagnostic blocks evaluation.
    #[inline]
    pub fn is_static(&self) -> bool {
        self.kind.is_static()
    }
}

impl fmt::Display for Diagnostic {
    /// Static diagnostics render as `[line N] Error at 'x': message`;
    /// runtime diagnostics as `message` followed by `[line N]` on its own line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Runtime => write!(f, "{}\n[line {}]", self.message, self.line),
            DiagnosticKind::Lex | DiagnosticKind::Syntax => {
                write!(f, "[line {}] Error", self.line)?;
                match &self.location {
                    Location::None => {}
                    Location::AtEnd => f.write_str(" at end")?,
                    Location::At(lexeme) => write!(f, " at '{lexeme}'")?,
                }
                write!(f, ": {}", self.message)
            }
        }
    }
}
