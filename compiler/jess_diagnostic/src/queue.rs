//! The diagnostics context shared by every phase of a run.

use jess_ir::Token;

use crate::{Diagnostic, DiagnosticKind, ErrorGuaranteed};

/// Accumulates diagnostics and tracks whether the run must stop.
///
/// # Example
///
/// ```text
/// let mut diagnostics = Diagnostics::new();
/// let tokens = jess_lexer::lex(source, &mut diagnostics);
/// if diagnostics.had_static_error() { /* skip parsing output */ }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
    had_static_error: bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and update the channel flags.
    pub fn push(&mut self, diagnostic: Diagnostic) -> ErrorGuaranteed {
        match diagnostic.kind {
            DiagnosticKind::Lex | DiagnosticKind::Syntax => self.had_static_error = true,
            DiagnosticKind::Runtime => self.had_runtime_error = true,
        }
        self.diagnostics.push(diagnostic);
        ErrorGuaranteed::new()
    }

    /// Report a lexical error on `line`.
    pub fn lex_error(&mut self, line: u32, message: impl Into<String>) -> ErrorGuaranteed {
        self.push(Diagnostic::lex(line, message))
    }

    /// Report a syntax error at `token`.
    pub fn syntax_error(&mut self, token: &Token, message: impl Into<String>) -> ErrorGuaranteed {
        self.push(Diagnostic::syntax(token, message))
    }

    /// Whether any lexical or syntax error was reported since the last reset.
    #[inline]
    pub fn had_static_error(&self) -> bool {
        self.had_static_error
    }

    /// Whether any runtime error was reported.
    #[inline]
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clear the static-error flag.
    ///
    /// Interactive sessions call this after every line so one bad line does
    /// not block the ones that follow. Recorded diagnostics are kept.
    pub fn reset_static(&mut self) {
        self.had_static_error = false;
    }

    /// Number of recorded diagnostics.
    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate over recorded diagnostics in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Drain recorded diagnostics, leaving the flags untouched.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
