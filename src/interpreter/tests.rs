//! Unit tests for the interpreter.

use std::rc::Rc;

use super::{expr::is_equal, interpreter::Interpreter};
use crate::{
    ast::{
        ast::{ExprId, Program},
        expressions::{Expr, ExprKind},
        statements::Stmt,
        values::{TypedValue, Value},
    },
    config::Locale,
    errors::errors::{Error, ErrorImpl, ErrorPhase},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::parser::parse,
    type_checker::{type_checker::type_check, type_table::TypeTable},
};

fn checked(source: &str) -> (Program, TypeTable) {
    let (tokens, errors) = tokenize(source, Some("test.al".to_string()), &Locale::french());
    assert!(errors.is_empty(), "unexpected lexical errors: {:?}", errors);
    let (program, errors) = parse(tokens, Rc::new("test.al".to_string()));
    assert!(errors.is_empty(), "unexpected syntax errors: {:?}", errors);
    let types = type_check(&program).expect("program type checks");
    (program, types)
}

fn execute(source: &str) -> (Result<Vec<Value>, Error>, String) {
    let (program, types) = checked(source);
    let mut interpreter = Interpreter::new(Vec::new());
    let result = interpreter.execute(&program, &types);
    let output = String::from_utf8(interpreter.into_output()).expect("output is utf-8");
    (result, output)
}

fn eval(source: &str) -> Value {
    let (result, _) = execute(source);
    result
        .expect("program runs")
        .pop()
        .expect("at least one statement")
}

#[test]
fn test_integer_arithmetic() {
    assert_eq!(eval("1 + 2 * 3;"), Value::Integer(7));
    assert_eq!(eval("(1 + 2) * 3;"), Value::Integer(9));
    assert_eq!(eval("-5 * 3;"), Value::Integer(-15));
    assert_eq!(eval("10 - 2 - 3;"), Value::Integer(5));
    assert_eq!(eval("- - 4;"), Value::Integer(4));
}

#[test]
fn test_integer_division_truncates() {
    assert_eq!(eval("7 / 2;"), Value::Integer(3));
    assert_eq!(eval("-7 / 2;"), Value::Integer(-3));
}

#[test]
fn test_real_arithmetic() {
    assert_eq!(eval("1,5 + 2,25;"), Value::Floating(3.75));
    assert_eq!(eval("7,0 / 2,0;"), Value::Floating(3.5));
    assert_eq!(eval("-0,5 * 4,0;"), Value::Floating(-2.0));
}

#[test]
fn test_real_division_by_zero_is_infinite() {
    assert_eq!(eval("1,0 / 0,0;"), Value::Floating(f64::INFINITY));
}

#[test]
fn test_string_concatenation() {
    assert_eq!(
        eval("\"bon\" + \"jour\";"),
        Value::String("bonjour".to_string())
    );
}

#[test]
fn test_comparisons() {
    assert_eq!(eval("1 < 2;"), Value::Boolean(true));
    assert_eq!(eval("2 <= 2;"), Value::Boolean(true));
    assert_eq!(eval("3 > 4;"), Value::Boolean(false));
    assert_eq!(eval("2 >= 2,5;"), Value::Boolean(false));
    assert_eq!(eval("2,5 > 2;"), Value::Boolean(true));
}

#[test]
fn test_equality() {
    assert_eq!(eval("1 == 1;"), Value::Boolean(true));
    assert_eq!(eval("1 != 1;"), Value::Boolean(false));
    assert_eq!(eval("\"a\" == \"b\";"), Value::Boolean(false));
    assert_eq!(eval("nil == nil;"), Value::Boolean(true));
    assert_eq!(eval("vrai != faux;"), Value::Boolean(true));
}

#[test]
fn test_logical_not() {
    assert_eq!(eval("!vrai;"), Value::Boolean(false));
    assert_eq!(eval("!!vrai;"), Value::Boolean(true));
    assert_eq!(eval("!(1 > 2);"), Value::Boolean(true));
}

#[test]
fn test_is_equal_handles_nil() {
    assert!(is_equal(&Value::Nil, &Value::Nil));
    assert!(!is_equal(&Value::Nil, &Value::Integer(0)));
    assert!(!is_equal(&Value::Boolean(false), &Value::Nil));
    assert!(is_equal(&Value::Integer(3), &Value::Integer(3)));
}

#[test]
fn test_real_equality_compares_representation() {
    assert_eq!(eval("0,0 / 0,0 == 0,0 / 0,0;"), Value::Boolean(true));
    assert_eq!(eval("0,0 == -0,0;"), Value::Boolean(false));
    assert_eq!(eval("1,5 != 1,5;"), Value::Boolean(false));
    assert!(is_equal(&Value::Floating(f64::NAN), &Value::Floating(-f64::NAN)));
}

#[test]
fn test_print_large_real() {
    let (result, output) = execute("ecrire(10000000000000000,0);
ecrire(1,0 / 0,0);");

    assert!(result.is_ok());
    assert_eq!(output, "1.0E16\nInfinity\n");
}

#[test]
fn test_print_writes_lines() {
    let (result, output) = execute("ecrire(1 + 2);\necrire(\"a\" + \"b\");\necrire(2,0);\necrire(nil);");

    assert!(result.is_ok());
    assert_eq!(output, "3\nab\n2\nnil\n");
}

#[test]
fn test_expression_statements_are_silent() {
    let (result, output) = execute("1 + 2;");

    assert_eq!(result.unwrap(), vec![Value::Integer(3)]);
    assert_eq!(output, "");
}

#[test]
fn test_echo_prints_expression_statements() {
    let (program, types) = checked("1 + 2; ecrire(4);");
    let mut interpreter = Interpreter::new(Vec::new()).with_echo(true);

    interpreter.execute(&program, &types).unwrap();

    assert!(interpreter.echoes());
    assert_eq!(interpreter.into_output(), b"3\n4\n");
}

#[test]
fn test_integer_division_by_zero() {
    let (result, output) = execute("ecrire(1);\necrire(1 / 0);\necrire(2);");
    let error = result.unwrap_err();

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::DivisionByZero {
            operator: "/".to_string()
        }
    );
    assert_eq!(error.phase(), ErrorPhase::Runtime);
    assert_eq!(error.get_line(), 2);
    assert_eq!(error.get_location(), Some("at '/'"));
    // Statements before the failure keep their output.
    assert_eq!(output, "1\n");
}

#[test]
fn test_integer_overflow() {
    let (result, _) = execute("9223372036854775807 + 1;");
    assert_eq!(result.unwrap_err().get_error_name(), "IntegerOverflow");

    let (result, _) = execute("-9223372036854775807 - 2;");
    assert_eq!(result.unwrap_err().get_error_name(), "IntegerOverflow");
}

#[test]
fn test_missing_type_is_reported() {
    let program = Program {
        body: vec![Stmt::Expression(Expr {
            id: ExprId(0),
            kind: ExprKind::Unary {
                operator: Token::new(TokenKind::Dash, "-", 1),
                right: Box::new(Expr {
                    id: ExprId(1),
                    kind: ExprKind::Literal(TypedValue::integer(1)),
                    line: 1,
                }),
            },
            line: 1,
        })],
        node_count: 2,
        file: Rc::new("test.al".to_string()),
    };

    let mut interpreter = Interpreter::new(Vec::new());
    let error = interpreter
        .execute(&program, &TypeTable::default())
        .unwrap_err();

    assert_eq!(*error.get_internal_error(), ErrorImpl::MissingType);
}

#[test]
fn test_execution_is_deterministic() {
    let source = "ecrire(1 + 2 * 3);\necrire(10 / 4);\necrire(2,5 * 2,0);";

    let (_, first) = execute(source);
    let (_, second) = execute(source);

    assert_eq!(first, "7\n2\n5\n");
    assert_eq!(first, second);
}

#[test]
fn test_deeply_nested_expression_evaluates() {
    let groups = 200;
    let source = format!(
        "ecrire({}-1{});\necrire(1{});",
        "(".repeat(groups),
        ")".repeat(groups),
        " + 1".repeat(200)
    );

    let (result, output) = execute(&source);

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(output, "-1\n201\n");
}
