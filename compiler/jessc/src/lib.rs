//! Jess driver.
//!
//! Runs source text through the pipeline (lex → parse → evaluate) and maps
//! the result to a process exit status. The `jess` binary is a thin shell
//! over this library:
//!
//! - [`Session`]: one diagnostics context plus one interpreter whose globals
//!   persist across runs.
//! - [`commands`]: file mode and the interactive prompt.
//! - [`Config`]: command-line arguments and environment overrides.

pub mod commands;
mod config;
mod session;

use std::sync::Once;

pub use commands::{run_file, run_file_with, run_prompt, run_source};
pub use config::{CliError, Config};
pub use session::{Phase, RunOutcome, Session};

/// Process exit statuses, following the BSD `sysexits` convention.
pub mod exit {
    /// Ran to completion.
    pub const SUCCESS: u8 = 0;
    /// Bad command-line usage.
    pub const USAGE: u8 = 64;
    /// A lexical or syntax error in the script.
    pub const DATA_ERR: u8 = 65;
    /// A runtime error in the script.
    pub const SOFTWARE: u8 = 70;
    /// The script could not be read.
    pub const IO_ERR: u8 = 74;
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=jess_eval=trace` or `RUST_LOG=debug`. Logs go to
/// stderr so they never interleave with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
