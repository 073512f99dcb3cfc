use jess_diagnostic::Diagnostics;
use jess_ir::{Expr, Literal, Stmt, Token, TokenKind};
use pretty_assertions::assert_eq;

use super::*;

fn parse_source(source: &str) -> (ParseOutput, Vec<String>) {
    let mut diagnostics = Diagnostics::new();
    let tokens = jess_lexer::lex(source, &mut diagnostics);
    let output = parse(&tokens, &mut diagnostics);
    let messages = diagnostics.iter().map(ToString::to_string).collect();
    (output, messages)
}

fn parse_clean(source: &str) -> Vec<Stmt> {
    let (output, messages) = parse_source(source);
    assert_eq!(messages, Vec::<String>::new());
    assert!(output.is_clean());
    output.statements
}

/// Parse a single expression statement and render it as an s-expression.
fn sexpr(source: &str) -> String {
    let statements = parse_clean(&format!("{source};"));
    match statements.as_slice() {
        [Stmt::Expression(expr)] => expr.sexpr(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

/// Render every parsed statement in canonical form.
fn canonical(source: &str) -> Vec<String> {
    parse_clean(source).iter().map(ToString::to_string).collect()
}

// === Expressions ===

#[test]
fn literals() {
    assert_eq!(sexpr("1"), "1");
    assert_eq!(sexpr("2.5"), "2.5");
    assert_eq!(sexpr("\"hi\""), "\"hi\"");
    assert_eq!(sexpr("true"), "true");
    assert_eq!(sexpr("nil"), "nil");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(sexpr("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(sexpr("1 * 2 + 3"), "(+ (* 1 2) 3)");
}

#[test]
fn binary_levels_are_left_associative() {
    assert_eq!(sexpr("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(sexpr("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    assert_eq!(sexpr("1 < 2 == true"), "(== (< 1 2) true)");
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(sexpr("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
}

#[test]
fn unary_nests() {
    assert_eq!(sexpr("!!true"), "(! (! true))");
    assert_eq!(sexpr("-1 - -2"), "(- (- 1) (- 2))");
}

#[test]
fn logical_operators() {
    assert_eq!(sexpr("a or b and c"), "(or a (and b c))");
    assert_eq!(sexpr("a and b or c"), "(or (and a b) c)");
    assert_eq!(sexpr("a == b and c"), "(and (== a b) c)");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(sexpr("a = b = 1"), "(= a (= b 1))");
    assert_eq!(sexpr("a = 1 + 2"), "(= a (+ 1 2))");
}

#[test]
fn calls_chain_as_postfix() {
    assert_eq!(sexpr("f()"), "(call f)");
    assert_eq!(sexpr("f(1, 2)"), "(call f 1 2)");
    assert_eq!(sexpr("f(1)(2)"), "(call (call f 1) 2)");
    assert_eq!(sexpr("-f(x)"), "(- (call f x))");
}

#[test]
fn call_keeps_closing_paren() {
    let statements = parse_clean("f(\n1\n);");
    match statements.as_slice() {
        [Stmt::Expression(Expr::Call { paren, .. })] => assert_eq!(paren.line, 3),
        other => panic!("expected call, got {other:?}"),
    }
}

// === Statements ===

#[test]
fn print_and_var() {
    assert_eq!(
        canonical("print 1 + 2; var x; var y = \"s\";"),
        vec!["print (1 + 2);", "var x;", "var y = \"s\";"]
    );
}

#[test]
fn block_and_if_else() {
    assert_eq!(
        canonical("if (a) { print 1; } else print 2;"),
        vec!["if (a) { print 1; } else print 2;"]
    );
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let statements = parse_clean("if (a) if (b) print 1; else print 2;");
    match statements.as_slice() {
        [Stmt::If {
            then_branch,
            else_branch: None,
            ..
        }] => assert!(matches!(
            then_branch.as_ref(),
            Stmt::If {
                else_branch: Some(_),
                ..
            }
        )),
        other => panic!("unexpected tree {other:?}"),
    }
}

#[test]
fn printed_else_stays_with_the_outer_if() {
    let var = |name: &str| Expr::Variable(Token::synthetic(TokenKind::Identifier, name, 1));
    let print = |n: f64| Box::new(Stmt::Print(Expr::Literal(Literal::Number(n))));
    let tree = Stmt::If {
        condition: var("a"),
        then_branch: Box::new(Stmt::If {
            condition: var("b"),
            then_branch: print(1.0),
            else_branch: None,
        }),
        else_branch: Some(print(2.0)),
    };

    let printed = tree.to_string();
    let statements = parse_clean(&printed);
    assert_eq!(canonical(&printed), vec![printed.clone()]);
    match statements.as_slice() {
        [Stmt::If {
            then_branch,
            else_branch: Some(_),
            ..
        }] => assert!(matches!(then_branch.as_ref(), Stmt::Block(_))),
        other => panic!("else moved to the inner if: {other:?}"),
    }
}

#[test]
fn while_loop() {
    assert_eq!(
        canonical("while (i < 3) i = i + 1;"),
        vec!["while ((i < 3)) (i = (i + 1));"]
    );
}

#[test]
fn function_declaration_and_return() {
    let statements = parse_clean("func add(a, b) { return a + b; }");
    match statements.as_slice() {
        [Stmt::Function(decl)] => {
            assert_eq!(decl.name.lexeme, "add");
            assert_eq!(decl.arity(), 2);
            assert!(matches!(
                decl.body.as_slice(),
                [Stmt::Return { value: Some(_), .. }]
            ));
        }
        other => panic!("expected function, got {other:?}"),
    }
}

#[test]
fn bare_return_inside_function() {
    let statements = parse_clean("func f() { return; }");
    match statements.as_slice() {
        [Stmt::Function(decl)] => {
            assert!(matches!(
                decl.body.as_slice(),
                [Stmt::Return { value: None, .. }]
            ));
        }
        other => panic!("expected function, got {other:?}"),
    }
}

#[test]
fn for_loop_desugars_to_while() {
    assert_eq!(
        canonical("for (var i = 0; i < 3; i = i + 1) print i;"),
        vec!["{ var i = 0; while ((i < 3)) { print i; (i = (i + 1)); } }"]
    );
}

#[test]
fn for_loop_with_empty_clauses() {
    assert_eq!(
        canonical("for (;;) print 1;"),
        vec!["while (true) print 1;"]
    );
}

#[test]
fn for_loop_with_expression_initializer() {
    assert_eq!(
        canonical("for (i = 0; i < 1;) print i;"),
        vec!["{ (i = 0); while ((i < 1)) print i; }"]
    );
}

#[test]
fn empty_program() {
    assert_eq!(parse_clean(""), Vec::<Stmt>::new());
    assert_eq!(parse_clean("// only a comment"), Vec::<Stmt>::new());
}

// === Errors and recovery ===

#[test]
fn missing_semicolon() {
    let (output, messages) = parse_source("print 1");
    assert_eq!(messages, vec!["[line 1] Error at end: Expect ';' after value."]);
    assert_eq!(output.error_count, 1);
    assert!(output.statements.is_empty());
}

#[test]
fn missing_expression_quotes_token() {
    let (_, messages) = parse_source("print );");
    assert_eq!(messages, vec!["[line 1] Error at ')': Expect expression."]);
}

#[test]
fn invalid_assignment_target_is_reported_without_unwinding() {
    let (output, messages) = parse_source("1 + 2 = 3; print 4;");
    assert_eq!(messages, vec!["[line 1] Error at '=': Invalid assignment target."]);
    assert_eq!(output.statements.len(), 2);
}

#[test]
fn grouped_variable_is_not_an_assignment_target() {
    let (_, messages) = parse_source("(a) = 1;");
    assert_eq!(messages, vec!["[line 1] Error at '=': Invalid assignment target."]);
}

#[test]
fn independent_errors_on_separate_lines_are_all_reported() {
    let (output, messages) = parse_source("var = 1;\nprint 2;\nprint (;\nprint 3;");
    assert_eq!(
        messages,
        vec![
            "[line 1] Error at '=': Expect variable name.",
            "[line 3] Error at ';': Expect expression.",
        ]
    );
    assert_eq!(output.error_count, 2);
    assert_eq!(output.statements.len(), 2);
}

#[test]
fn recovery_inside_block_keeps_siblings() {
    let (output, messages) = parse_source("{ print ; print 1; }");
    assert_eq!(messages.len(), 1);
    match output.statements.as_slice() {
        [Stmt::Block(inner)] => assert_eq!(inner.len(), 1),
        other => panic!("expected block, got {other:?}"),
    }
}

#[test]
fn unclosed_block() {
    let (_, messages) = parse_source("{ print 1;");
    assert_eq!(messages, vec!["[line 1] Error at end: Expect '}' after block."]);
}

#[test]
fn top_level_return_is_rejected() {
    let (_, messages) = parse_source("return 1;");
    assert_eq!(
        messages,
        vec!["[line 1] Error at 'return': Can't return from top-level code."]
    );
}

#[test]
fn reserved_words_have_no_grammar() {
    let (_, messages) = parse_source("let x = 1;\nclass Foo {}");
    assert_eq!(
        messages,
        vec![
            "[line 1] Error at 'let': Expect expression.",
            "[line 2] Error at 'class': Expect expression.",
        ]
    );
}

#[test]
fn too_many_arguments_is_reported_but_parsed() {
    let args = vec!["1"; 256].join(", ");
    let (output, messages) = parse_source(&format!("f({args});"));
    assert_eq!(
        messages,
        vec!["[line 1] Error at '1': Can't have more than 255 arguments."]
    );
    match output.statements.as_slice() {
        [Stmt::Expression(Expr::Call { args, .. })] => assert_eq!(args.len(), 256),
        other => panic!("expected call, got {other:?}"),
    }
}

#[test]
fn too_many_parameters() {
    let params: Vec<String> = (0..256).map(|i| format!("p{i}")).collect();
    let (_, messages) = parse_source(&format!("func f({}) {{}}", params.join(", ")));
    assert_eq!(
        messages,
        vec!["[line 1] Error at 'p255': Can't have more than 255 parameters."]
    );
}

#[test]
fn function_errors() {
    let (_, messages) = parse_source("func (a) {}");
    assert_eq!(messages, vec!["[line 1] Error at '(': Expect function name."]);

    let (_, messages) = parse_source("func f(a b) {}");
    assert_eq!(
        messages,
        vec!["[line 1] Error at 'b': Expect ')' after parameters."]
    );
}

#[test]
fn deeply_nested_grouping_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    let statements = parse_clean(&source);
    assert_eq!(statements.len(), 1);
}

#[test]
fn deeply_nested_unary_parses_and_drops() {
    let source = format!("print {}1;", "!".repeat(200_000));
    let statements = parse_clean(&source);
    assert_eq!(statements.len(), 1);
    drop(statements);
}

#[test]
fn deeply_nested_blocks_drop() {
    let depth = 100_000;
    let source = format!("{}print 1;{}", "{".repeat(depth), "}".repeat(depth));
    let (output, _) = parse_source(&source);
    drop(output);
}
