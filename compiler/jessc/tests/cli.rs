//! File mode, the interactive prompt, and their exit statuses.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use std::io::{Cursor, Write};
use std::path::Path;

use jess_diagnostic::emitter::TextEmitter;
use jessc::{exit, run_file_with, run_prompt, CliError, Config, RunOutcome};
use pretty_assertions::assert_eq;

fn script(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn exit_code_of(path: &Path) -> (u8, String, String) {
    let mut session = common::session();
    let mut emitter = TextEmitter::new(Vec::new());
    let code = match run_file_with(path, &mut session, &mut emitter) {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => error.exit_code(),
    };
    let stdout = session.interpreter().print_handler().get_output();
    let stderr = String::from_utf8(emitter.into_inner()).unwrap();
    (code, stdout, stderr)
}

#[test]
fn clean_script_exits_zero() {
    let file = script("var greeting = \"hello\";\nprint greeting + \" world\";\n");
    let (code, stdout, stderr) = exit_code_of(file.path());
    assert_eq!(code, exit::SUCCESS);
    assert_eq!(stdout, "hello world\n");
    assert_eq!(stderr, "");
}

#[test]
fn syntax_error_exits_65() {
    let file = script("print ;\n");
    let (code, stdout, stderr) = exit_code_of(file.path());
    assert_eq!(code, 65);
    assert_eq!(stdout, "");
    assert_eq!(stderr, "[line 1] Error at ';': Expect expression.\n");
}

#[test]
fn runtime_error_exits_70() {
    let file = script("print 1;\nprint nil + 1;\n");
    let (code, stdout, stderr) = exit_code_of(file.path());
    assert_eq!(code, 70);
    assert_eq!(stdout, "1\n");
    assert_eq!(
        stderr,
        "Operands must be two numbers or start with a string, got nil and number.\n[line 2]\n"
    );
}

#[test]
fn static_errors_win_over_runtime_errors() {
    // The runtime error on line 1 never runs because line 2 does not parse.
    let file = script("print nope;\nprint (;\n");
    let (code, _, _) = exit_code_of(file.path());
    assert_eq!(code, 65);
}

#[test]
fn unreadable_script_exits_74() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.jess");
    let mut session = common::session();
    let mut emitter = TextEmitter::new(Vec::new());

    let error = run_file_with(&missing, &mut session, &mut emitter).unwrap_err();
    assert!(matches!(error, CliError::Read { .. }));
    assert_eq!(error.exit_code(), 74);
    assert!(error.to_string().starts_with("Could not read '"));
}

#[test]
fn too_many_arguments_exits_64() {
    let args = vec!["a.jess".to_string(), "b.jess".to_string()];
    let error = Config::from_parts(args, None).unwrap_err();
    assert_eq!(error.exit_code(), exit::USAGE);
    assert_eq!(error.to_string(), "Usage: jess [script]");
}

#[test]
fn prompt_runs_each_line_and_keeps_state() {
    let mut session = common::session();
    let mut emitter = TextEmitter::new(Vec::new());
    let mut prompt: Vec<u8> = Vec::new();
    let input = Cursor::new("var a = 1;\nfunc inc() { a = a + 1; }\ninc();\nprint a;\n");

    run_prompt(&mut session, input, &mut prompt, &mut emitter).unwrap();

    assert_eq!(String::from_utf8(prompt).unwrap(), "> > > > > \n");
    assert_eq!(session.interpreter().print_handler().get_output(), "2\n");
    assert!(emitter.into_inner().is_empty());
}

#[test]
fn prompt_survives_bad_lines() {
    let mut session = common::session();
    let mut emitter = TextEmitter::new(Vec::new());
    let input = Cursor::new("print (;\nprint nope;\nprint \"still here\";\n");

    run_prompt(&mut session, input, std::io::sink(), &mut emitter).unwrap();

    assert_eq!(
        session.interpreter().print_handler().get_output(),
        "still here\n"
    );
    assert_eq!(
        String::from_utf8(emitter.into_inner()).unwrap(),
        "[line 1] Error at ';': Expect expression.\n\
         Undefined variable 'nope'.\n[line 1]\n"
    );
    assert_eq!(session.run("print 1;"), RunOutcome::Ok);
}
