//! Print handler for configurable output of the `print` statement.
//!
//! Output can be directed to different destinations:
//! - CLI: stdout (default)
//! - Tests and embedders: a buffer for assertions
//!
//! Uses enum dispatch instead of trait objects; the set of destinations is
//! closed.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Default print handler that writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        // A closed stdout (e.g. `jess script | head`) silently drops output.
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{msg}");
    }

    /// Flush buffered stdout.
    pub fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// Print handler that captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    /// Create a new buffer print handler.
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to buffer (testing/embedding).
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Get all captured output.
    ///
    /// Returns an empty string for stdout, which does not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    /// Clear captured output.
    pub fn clear(&self) {
        match self {
            Self::Stdout(_) => {}
            Self::Buffer(h) => h.clear(),
        }
    }

    /// Flush any output the destination buffers.
    pub fn flush(&self) {
        match self {
            Self::Stdout(h) => h.flush(),
            Self::Buffer(_) => {}
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
