use jess_diagnostic::DiagnosticKind;
use jess_ir::BinaryOp;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn factory_messages() {
    assert_eq!(undefined_variable("x").message, "Undefined variable 'x'.");
    assert_eq!(
        already_defined("x").message,
        "Variable 'x' is already defined in this scope."
    );
    assert_eq!(
        operands_must_be_numbers(BinaryOp::Sub).message,
        "Operands must be numbers."
    );
    assert_eq!(operand_must_be_number().message, "Operand must be a number.");
    assert_eq!(
        invalid_plus_operands(&Value::Number(1.0), &Value::string("foo")).message,
        "Operands must be two numbers or start with a string, got number and string."
    );
    assert_eq!(
        not_callable(&Value::Nil).message,
        "Value of type nil is not callable."
    );
    assert_eq!(
        arity_mismatch(2, 3).message,
        "Expected 2 arguments but got 3."
    );
    assert_eq!(
        stack_overflow(64).message,
        "Stack overflow: call depth exceeded 64."
    );
}

#[test]
fn message_matches_kind_display() {
    let error = arity_mismatch(1, 0);
    assert_eq!(error.message, error.kind.to_string());
    assert_eq!(
        error.kind,
        EvalErrorKind::ArityMismatch {
            expected: 1,
            got: 0
        }
    );
}

#[test]
fn at_line_keeps_innermost_line() {
    let error = undefined_variable("x").at_line(7).at_line(2);
    assert_eq!(error.line, Some(7));
}

#[test]
fn converts_to_runtime_diagnostic() {
    let diagnostic = undefined_variable("y").at_line(3).to_diagnostic();
    assert_eq!(diagnostic.kind, DiagnosticKind::Runtime);
    assert_eq!(diagnostic.line, 3);
    assert_eq!(diagnostic.to_string(), "Undefined variable 'y'.\n[line 3]");
}

#[test]
fn display_includes_line_when_known() {
    assert_eq!(operand_must_be_number().to_string(), "Operand must be a number.");
    assert_eq!(
        operand_must_be_number().at_line(4).to_string(),
        "Operand must be a number.\n[line 4]"
    );
}
