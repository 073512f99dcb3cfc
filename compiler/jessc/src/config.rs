//! Command-line arguments and environment overrides.

use std::io;
use std::path::PathBuf;

use jess_eval::{Interpreter, SharedPrintHandler, DEFAULT_MAX_CALL_DEPTH};

use crate::exit;

/// Environment variable overriding the call depth limit.
pub const MAX_CALL_DEPTH_VAR: &str = "JESS_MAX_CALL_DEPTH";

/// Errors the driver reports before or instead of running a script.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Usage: jess [script]")]
    Usage,

    #[error("JESS_MAX_CALL_DEPTH must be a positive integer, got '{value}'")]
    InvalidCallDepth { value: String },

    #[error("Could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error at the prompt: {0}")]
    Prompt(#[from] io::Error),
}

impl CliError {
    /// Exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage | CliError::InvalidCallDepth { .. } => exit::USAGE,
            CliError::Read { .. } | CliError::Prompt(_) => exit::IO_ERR,
        }
    }
}

/// What the `jess` binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Script to run; `None` starts the interactive prompt.
    pub script: Option<PathBuf>,
    pub max_call_depth: usize,
}

impl Config {
    /// Read the process's arguments and environment.
    pub fn from_env() -> Result<Self, CliError> {
        let depth = std::env::var(MAX_CALL_DEPTH_VAR).ok();
        Self::from_parts(std::env::args().skip(1), depth.as_deref())
    }

    /// Build a config from arguments (program name excluded) and the raw
    /// value of the call depth override.
    pub fn from_parts(
        args: impl IntoIterator<Item = String>,
        max_call_depth: Option<&str>,
    ) -> Result<Self, CliError> {
        let mut args = args.into_iter();
        let script = args.next().map(PathBuf::from);
        if args.next().is_some() {
            return Err(CliError::Usage);
        }

        let max_call_depth = match max_call_depth {
            None => DEFAULT_MAX_CALL_DEPTH,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => {
                    return Err(CliError::InvalidCallDepth {
                        value: raw.to_string(),
                    })
                }
            },
        };

        Ok(Config {
            script,
            max_call_depth,
        })
    }

    /// Build the interpreter this config describes.
    pub fn interpreter(&self, print_handler: SharedPrintHandler) -> Interpreter {
        Interpreter::builder()
            .print_handler(print_handler)
            .max_call_depth(self.max_call_depth)
            .build()
    }
}
