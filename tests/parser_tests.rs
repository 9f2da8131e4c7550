// Integration tests for the Smolc parser front end.
//
// Tokens come from the miniature lexer in `common`, which plays the
// role of the external token producer a real pipeline would supply.

mod common;

use common::lex;
use pretty_assertions::assert_eq;
use smolc::{
    ast, parse, parse_program, DiagnosticPrinter, Expr, Name, ParseErrorKind, Position, Span, Stmt,
};

fn span(start: (usize, usize), end: (usize, usize)) -> Span {
    Span::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

#[test]
fn test_declaration_without_initializer() {
    let program = parse_program(lex("Int a;")).expect("parsing failed");

    assert_eq!(
        program,
        vec![Stmt::Declaration {
            datatype: Name {
                name: "Int".into(),
                span: span((1, 0), (1, 3)),
            },
            variable: "a".into(),
            value: None,
            span: span((1, 0), (1, 6)),
        }]
    );
}

#[test]
fn test_declaration_with_initializer() {
    let program = parse_program(lex("Int a = 1;")).expect("parsing failed");

    match &program[0] {
        Stmt::Declaration {
            datatype,
            variable,
            value,
            span: stmt_span,
        } => {
            assert_eq!(datatype.name, "Int");
            assert_eq!(variable, "a");
            assert_eq!(
                value,
                &Some(Expr::Integer {
                    value: 1,
                    span: span((1, 8), (1, 9)),
                })
            );
            // The span runs to the end of the terminating semicolon.
            assert_eq!(*stmt_span, span((1, 0), (1, 10)));
        }
        other => panic!("expected a declaration, got {:?}", other),
    }
}

#[test]
fn test_trailing_comma_produces_the_same_tree() {
    let with_trailing = parse_program(lex(r#"a = f(1, "x",);"#)).expect("parsing failed");
    let without = parse_program(lex(r#"a = f(1, "x");"#)).expect("parsing failed");

    let pick = |program: &[Stmt]| match &program[0] {
        Stmt::Assignment {
            variable,
            value: Expr::Call {
                callee, arguments, ..
            },
            ..
        } => (variable.clone(), (**callee).clone(), arguments.clone()),
        other => panic!("expected an assignment of a call, got {:?}", other),
    };

    let (var_a, callee_a, args_a) = pick(&with_trailing);
    let (var_b, callee_b, args_b) = pick(&without);

    assert_eq!(var_a, var_b);
    assert_eq!(callee_a, callee_b);
    assert_eq!(args_a, args_b);
    assert_eq!(
        args_a,
        vec![
            Expr::Integer {
                value: 1,
                span: span((1, 6), (1, 7)),
            },
            Expr::String {
                value: "x".into(),
                span: span((1, 9), (1, 12)),
            },
        ]
    );
}

#[test]
fn test_curried_calls_nest_left() {
    let program = parse_program(lex("f()();")).expect("parsing failed");

    match &program[0] {
        Stmt::Expression { expression, .. } => {
            assert_eq!(
                expression,
                &Expr::Call {
                    callee: Box::new(Expr::Call {
                        callee: Box::new(Expr::Name(Name {
                            name: "f".into(),
                            span: span((1, 0), (1, 1)),
                        })),
                        arguments: vec![],
                        span: span((1, 0), (1, 3)),
                    }),
                    arguments: vec![],
                    span: span((1, 0), (1, 5)),
                }
            );
        }
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_empty_argument_list() {
    let program = parse_program(lex("f();")).expect("parsing failed");

    match &program[0] {
        Stmt::Expression {
            expression: Expr::Call { arguments, .. },
            ..
        } => assert!(arguments.is_empty()),
        other => panic!("expected a call statement, got {:?}", other),
    }
}

#[test]
fn test_if_with_return_body() {
    let program = parse_program(lex("if a { return 1; }")).expect("parsing failed");

    match &program[0] {
        Stmt::If {
            condition,
            body,
            span: stmt_span,
        } => {
            assert_eq!(
                condition,
                &Expr::Name(Name {
                    name: "a".into(),
                    span: span((1, 3), (1, 4)),
                })
            );
            assert_eq!(
                body,
                &vec![Stmt::Return {
                    value: Expr::Integer {
                        value: 1,
                        span: span((1, 14), (1, 15)),
                    },
                    span: span((1, 7), (1, 16)),
                }]
            );
            // From the `if` keyword through the closing brace.
            assert_eq!(*stmt_span, span((1, 0), (1, 18)));
        }
        other => panic!("expected an if statement, got {:?}", other),
    }
}

#[test]
fn test_string_literal_loses_its_quotes() {
    let program = parse_program(lex(r#""hello";"#)).expect("parsing failed");

    match &program[0] {
        Stmt::Expression {
            expression: Expr::String { value, .. },
            ..
        } => assert_eq!(value, "hello"),
        other => panic!("expected a string statement, got {:?}", other),
    }
}

#[test]
fn test_full_program() {
    let source = r#"
Int GLOBAL;
GLOBAL = 123;

function lel() {
    // this does nothing
}

function main(String s) returns Int {
    Int a = 1;
    if a {
        print("WOLO WOLO");
    }
    return 123;
}
"#;
    let program = parse_program(lex(source)).expect("parsing failed");
    assert_eq!(program.len(), 4);

    assert!(matches!(&program[0], Stmt::Declaration { variable, .. } if variable == "GLOBAL"));
    assert!(matches!(
        &program[1],
        Stmt::Assignment { variable, .. } if variable.name == "GLOBAL"
    ));

    match &program[2] {
        Stmt::Function {
            name,
            params,
            return_type,
            body,
            ..
        } => {
            assert_eq!(name, "lel");
            assert!(params.is_empty());
            assert!(return_type.is_none());
            assert!(body.is_empty());
        }
        other => panic!("expected a function definition, got {:?}", other),
    }

    match &program[3] {
        Stmt::Function {
            name,
            params,
            return_type,
            body,
            ..
        } => {
            assert_eq!(name, "main");
            assert_eq!(params.len(), 1);
            assert_eq!(params[0].datatype.name, "String");
            assert_eq!(params[0].name, "s");
            assert_eq!(return_type.as_ref().map(|n| n.name.as_str()), Some("Int"));

            assert_eq!(body.len(), 3);
            assert!(matches!(&body[0], Stmt::Declaration { variable, .. } if variable == "a"));
            match &body[1] {
                Stmt::If { body, .. } => match &body[0] {
                    Stmt::Expression {
                        expression: Expr::Call { callee, arguments, .. },
                        ..
                    } => {
                        assert!(
                            matches!(&**callee, Expr::Name(name) if name.name == "print")
                        );
                        assert!(matches!(
                            &arguments[0],
                            Expr::String { value, .. } if value == "WOLO WOLO"
                        ));
                    }
                    other => panic!("expected a call statement, got {:?}", other),
                },
                other => panic!("expected an if statement, got {:?}", other),
            }
            assert!(matches!(&body[2], Stmt::Return { .. }));
        }
        other => panic!("expected a function definition, got {:?}", other),
    }
}

#[test]
fn test_parsing_is_idempotent() {
    let source = r#"
Int a = f(1, "x");
if a { g()(); }
"#;
    let first = parse_program(lex(source)).expect("parsing failed");
    let second = parse_program(lex(source)).expect("parsing failed");
    assert_eq!(first, second);
}

#[test]
fn test_truncated_declaration_reports_end_of_input() {
    let err = parse_program(lex("Int a")).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
}

#[test]
fn test_keyword_as_condition_is_reserved() {
    // The second `if` arrives as a NAME token in the condition slot and
    // trips the keyword gate in the name parser.
    let err = parse_program(lex("if if {}")).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ReservedKeyword { name: "if".into() }
    );
}

#[test]
fn test_keyword_as_declared_name_is_reserved() {
    let err = parse_program(lex("Int if = 1;")).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ReservedKeyword { name: "if".into() }
    );
}

#[test]
fn test_function_and_returns_are_not_reserved() {
    // Only `return` and `if` are keywords; `function` and `returns` are
    // recognized positionally and stay usable as ordinary names.
    let program = parse_program(lex("Int function = 1;")).expect("parsing failed");
    assert!(matches!(
        &program[0],
        Stmt::Declaration { variable, .. } if variable == "function"
    ));

    let program = parse_program(lex("function returns() {}")).expect("parsing failed");
    assert!(matches!(
        &program[0],
        Stmt::Function { name, .. } if name == "returns"
    ));
}

#[test]
fn test_invalid_expression_start() {
    let err = parse_program(lex("= 1;")).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidToken { found: "=".into() });
}

#[test]
fn test_missing_list_separator() {
    let err = parse_program(lex("a = f(1 2);")).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "','".into(),
            found: "2".into(),
        }
    );
}

#[test]
fn test_missing_semicolon_after_assignment() {
    let err = parse_program(lex("a = 1 }")).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "';'".into(),
            found: "}".into(),
        }
    );
}

#[test]
fn test_driver_is_lazy_and_fuses_after_an_error() {
    let mut statements = parse(lex("Int a; Int"));

    let first = statements.next().expect("one statement expected");
    assert!(matches!(first, Ok(Stmt::Declaration { .. })));

    let second = statements.next().expect("an error expected");
    assert_eq!(
        second.unwrap_err().kind,
        ParseErrorKind::UnexpectedEndOfInput
    );

    // Fused: nothing more after the first error.
    assert!(statements.next().is_none());
    assert!(statements.next().is_none());
}

#[test]
fn test_empty_input_parses_to_nothing() {
    let program = parse_program(lex("")).expect("parsing failed");
    assert!(program.is_empty());

    // Comments and whitespace lex to no tokens at all.
    let program = parse_program(lex("  // nothing here\n")).expect("parsing failed");
    assert!(program.is_empty());
}

#[test]
fn test_json_dump_names_the_node_kinds() {
    let program = parse_program(lex("Int a;")).expect("parsing failed");
    let json = ast::to_json(&program).expect("serialization failed");

    assert!(json.contains("Declaration"));
    assert!(json.contains("\"variable\": \"a\""));
}

#[test]
fn test_diagnostic_rendering() {
    let source = "Int a";
    let err = parse_program(lex(source)).unwrap_err();

    let printer = DiagnosticPrinter::new("main.smol", source);
    let rendered = printer.render(&err);

    assert!(rendered.contains("error[P0001]: unexpected end of input"));
    assert!(rendered.contains("--> main.smol:1:5"));
    assert!(rendered.contains("Int a"));
    // Caret under column 4 (0-based), where the last token sat.
    assert!(rendered.contains("   |     ^"));
}

#[test]
fn test_diagnostic_rendering_includes_help() {
    let source = "Int if = 1;";
    let err = parse_program(lex(source)).unwrap_err();

    let printer = DiagnosticPrinter::new("main.smol", source);
    let rendered = printer.render(&err);

    assert!(rendered.contains("error[P0004]"));
    assert!(rendered.contains("help: reserved keywords cannot be used as names"));
}
