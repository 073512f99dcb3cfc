//! Diagnostic emitters.
//!
//! The interpreter reports in one plain-text format; the trait keeps the
//! driver independent of where that text goes (stderr in the CLI, a byte
//! buffer in tests).

use std::io::{self, Write};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all<'a>(&mut self, diagnostics: impl IntoIterator<Item = &'a Diagnostic>)
    where
        Self: Sized,
    {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Writes each diagnostic's rendered text followed by a newline.
pub struct TextEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TextEmitter<W> {
    /// Create an emitter writing to `writer`.
    pub fn new(writer: W) -> Self {
        TextEmitter { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextEmitter<io::Stderr> {
    /// Emitter for the process's standard error.
    pub fn stderr() -> Self {
        TextEmitter::new(io::stderr())
    }
}

impl<W: Write> DiagnosticEmitter for TextEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // A closed stderr leaves nowhere to report to.
        let _ = writeln!(self.writer, "{diagnostic}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
