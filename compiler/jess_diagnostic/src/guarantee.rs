//! Type-level proof that an error was reported.

use std::fmt;

/// Proof that at least one error diagnostic was recorded.
///
/// Only [`Diagnostics`](crate::Diagnostics) can construct one, so a
/// `Result<T, ErrorGuaranteed>` cannot fail silently.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    /// Only called by `Diagnostics` after pushing an error.
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}
