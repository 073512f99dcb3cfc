//! Jess interpreter CLI.
//!
//! `jess` starts an interactive prompt; `jess script.jess` runs a file.

use std::io;
use std::process::ExitCode;

use jess_diagnostic::emitter::TextEmitter;
use jess_eval::stdout_handler;
use jessc::{init_tracing, run_file, run_prompt, Config, Session};

fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(error.exit_code());
        }
    };

    if let Some(path) = &config.script {
        return run_file(path, &config);
    }

    let mut session = Session::new(config.interpreter(stdout_handler()));
    let mut emitter = TextEmitter::stderr();
    match run_prompt(&mut session, io::stdin().lock(), io::stdout(), &mut emitter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}
