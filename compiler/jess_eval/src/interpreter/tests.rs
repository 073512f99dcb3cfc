use jess_diagnostic::Diagnostics;
use pretty_assertions::assert_eq;

use super::*;
use crate::{buffer_handler, Value};

fn interpreter(max_call_depth: usize) -> Interpreter {
    Interpreter::builder()
        .print_handler(buffer_handler())
        .max_call_depth(max_call_depth)
        .build()
}

/// Lex, parse, and run `source`, returning the printed output.
fn run_with(interp: &mut Interpreter, source: &str) -> (String, Result<(), EvalError>) {
    let mut diagnostics = Diagnostics::new();
    let tokens = jess_lexer::lex(source, &mut diagnostics);
    let output = jess_parse::parse(&tokens, &mut diagnostics);
    assert!(diagnostics.is_empty(), "unexpected static errors: {diagnostics:?}");

    interp.print_handler().clear();
    let result = interp.interpret(&output.statements);
    (interp.print_handler().get_output(), result)
}

fn run(source: &str) -> String {
    let (output, result) = run_with(&mut interpreter(200), source);
    assert_eq!(result, Ok(()));
    output
}

fn run_err(source: &str) -> (String, EvalError) {
    let (output, result) = run_with(&mut interpreter(200), source);
    match result {
        Err(error) => (output, error),
        Ok(()) => panic!("expected a runtime error from {source:?}"),
    }
}

#[test]
fn prints_values() {
    assert_eq!(run("print 1 + 2;"), "3\n");
    assert_eq!(run("print \"a\" + \"b\";"), "ab\n");
    assert_eq!(run("print nil; print !nil;"), "nil\ntrue\n");
    assert_eq!(run("print -(3 * 2) / 4;"), "-1.5\n");
}

#[test]
fn var_without_initializer_is_nil() {
    assert_eq!(run("var a; print a;"), "nil\n");
}

#[test]
fn block_shadowing() {
    assert_eq!(
        run("var a = 1; { var a = 2; print a; } print a;"),
        "2\n1\n"
    );
}

#[test]
fn assignment_reaches_enclosing_scope() {
    assert_eq!(run("var a = 1; { a = 2; } print a;"), "2\n");
    assert_eq!(run("var a; var b; a = b = 3; print a; print b;"), "3\n3\n");
}

#[test]
fn logical_operators_return_deciding_operand() {
    assert_eq!(run("print nil or \"x\";"), "x\n");
    assert_eq!(run("print 1 and 2;"), "2\n");
    assert_eq!(run("print false and undefined;"), "false\n");
    assert_eq!(run("print true or undefined;"), "true\n");
}

#[test]
fn if_else() {
    assert_eq!(run("if (1 < 2) print \"yes\"; else print \"no\";"), "yes\n");
    assert_eq!(run("if (nil) print \"yes\"; else print \"no\";"), "no\n");
    assert_eq!(run("if (false) print 1;"), "");
}

#[test]
fn while_and_for_loops() {
    assert_eq!(run("var i = 0; while (i < 3) { print i; i = i + 1; }"), "0\n1\n2\n");
    assert_eq!(run("for (var i = 0; i < 3; i = i + 1) print i;"), "0\n1\n2\n");
}

#[test]
fn for_loop_variable_is_scoped() {
    let (_, error) = run_err("for (var i = 0; i < 1; i = i + 1) {} print i;");
    assert_eq!(error.message, "Undefined variable 'i'.");
}

#[test]
fn functions_and_return() {
    assert_eq!(
        run("func add(a, b) { return a + b; } print add(1, 2);"),
        "3\n"
    );
    assert_eq!(run("func f() {} print f();"), "nil\n");
    assert_eq!(run("func f() { return; print 1; } print f();"), "nil\n");
    assert_eq!(run("func f() {} print f;"), "<fn f>\n");
}

#[test]
fn return_escapes_loops() {
    assert_eq!(
        run("func f() { while (true) { return 7; } } print f();"),
        "7\n"
    );
}

#[test]
fn recursion() {
    assert_eq!(
        run("func fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); } print fib(10);"),
        "55\n"
    );
}

#[test]
fn closures_keep_their_environment() {
    let source = "
        func makeCounter() {
            var i = 0;
            func count() { i = i + 1; print i; }
            return count;
        }
        var counter = makeCounter();
        counter();
        counter();
    ";
    assert_eq!(run(source), "1\n2\n");
}

#[test]
fn closures_capture_by_reference() {
    let source = "
        var a = \"global\";
        {
            func show() { print a; }
            show();
            a = \"changed\";
            show();
        }
    ";
    assert_eq!(run(source), "global\nchanged\n");
}

#[test]
fn redeclaration_in_same_scope_fails() {
    let (output, error) = run_err("var a = 1;\nprint a;\nvar a = 2;");
    assert_eq!(output, "1\n");
    assert_eq!(error.message, "Variable 'a' is already defined in this scope.");
    assert_eq!(error.line, Some(3));
}

#[test]
fn duplicate_parameter_fails_at_call() {
    let (_, error) = run_err("func f(a, a) {}\nf(1, 2);");
    assert_eq!(error.message, "Variable 'a' is already defined in this scope.");
    assert_eq!(error.line, Some(1));
}

#[test]
fn undefined_variable_reports_line() {
    let (_, error) = run_err("print 1;\nprint x;");
    assert_eq!(error.message, "Undefined variable 'x'.");
    assert_eq!(error.line, Some(2));

    let (_, error) = run_err("y = 1;");
    assert_eq!(error.message, "Undefined variable 'y'.");
}

#[test]
fn operand_errors() {
    let (_, error) = run_err("print -\"a\";");
    assert_eq!(error.message, "Operand must be a number.");
    let (_, error) = run_err("print 1 < \"a\";");
    assert_eq!(error.message, "Operands must be numbers.");
    assert_eq!(run("print \"foo\" + 1;"), "foo1\n");
    let (_, error) = run_err("print 1 + \"foo\";");
    assert_eq!(
        error.message,
        "Operands must be two numbers or start with a string, got number and string."
    );
}

#[test]
fn call_errors() {
    let (_, error) = run_err("\"str\"();");
    assert_eq!(error.message, "Value of type string is not callable.");
    let (_, error) = run_err("func f(a) {}\nf(1, 2);");
    assert_eq!(error.message, "Expected 1 arguments but got 2.");
    assert_eq!(error.line, Some(2));
}

#[test]
fn error_inside_function_keeps_its_line() {
    let (_, error) = run_err("func f() {\n  return nope;\n}\nf();");
    assert_eq!(error.line, Some(2));
}

#[test]
fn statements_after_an_error_do_not_run() {
    let (output, _) = run_err("print 1; print nope; print 2;");
    assert_eq!(output, "1\n");
}

#[test]
fn unbounded_recursion_overflows() {
    let (_, error) = run_err("func f() { f(); }\nf();");
    assert_eq!(error.message, "Stack overflow: call depth exceeded 200.");
    assert_eq!(error.line, Some(1));
}

#[test]
fn scope_is_restored_after_error() {
    let mut interp = interpreter(200);
    let (_, result) = run_with(&mut interp, "{ var inner = 1; print missing; }");
    assert!(result.is_err());
    assert_eq!(interp.env.get("inner"), None);
    assert_eq!(interp.call_depth, 0);

    let (_, result) = run_with(
        &mut interp,
        "func f(param) { { var local = 2; return missing; } }\nf(1);",
    );
    assert!(result.is_err());
    assert_eq!(interp.env.get("param"), None);
    assert_eq!(interp.env.get("local"), None);
    assert_eq!(interp.call_depth, 0);

    let (output, result) = run_with(&mut interp, "var inner = 3; print inner;");
    assert_eq!(result, Ok(()));
    assert_eq!(output, "3\n");
}

#[test]
fn globals_persist_between_runs() {
    let mut interp = interpreter(200);
    let (_, result) = run_with(&mut interp, "var a = 1; func inc() { a = a + 1; }");
    assert_eq!(result, Ok(()));
    let (output, result) = run_with(&mut interp, "inc(); print a;");
    assert_eq!(result, Ok(()));
    assert_eq!(output, "2\n");
    assert_eq!(interp.env.get("a"), Some(Value::Number(2.0)));
}

#[test]
fn builder_defaults() {
    let interp = Interpreter::new();
    assert_eq!(interp.max_call_depth(), DEFAULT_MAX_CALL_DEPTH);
}
