//! Integration tests for the whole pipeline.
//!
//! These tests go through the public `analyze` and `run` entry points: source
//! text in, printed output and diagnostics out.

use algolang::{
    analyze,
    ast::values::Value,
    config::{Language, Locale},
    errors::errors::{Error, ErrorPhase},
    interpreter::interpreter::Interpreter,
    run,
};

fn run_source(source: &str, locale: &Locale) -> (Result<Vec<Value>, Vec<Error>>, String) {
    let mut interpreter = Interpreter::new(Vec::new());
    let result = run(source, Some("test.al"), locale, &mut interpreter);
    let output = String::from_utf8(interpreter.into_output()).expect("output is utf-8");
    (result, output)
}

fn run_french(source: &str) -> (Result<Vec<Value>, Vec<Error>>, String) {
    run_source(source, &Locale::french())
}

#[test]
fn test_arithmetic_program() {
    let (result, output) = run_french("ecrire(1 + 2 * 3);\necrire(-5 * 3);\necrire((1 + 2) * 3);");

    assert!(result.is_ok());
    assert_eq!(output, "7\n-15\n9\n");
}

#[test]
fn test_english_program() {
    let source = "write(1.5 + 2.5);\nwrite(true != false);\nwrite(null == null);";
    let (result, output) = run_source(source, &Locale::english());

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(output, "4\ntrue\ntrue\n");
}

#[test]
fn test_locale_from_language() {
    let locale: Locale = "en".parse::<Language>().unwrap().into();
    assert_eq!(locale, Locale::english());
    assert!("de".parse::<Language>().is_err());
}

#[test]
fn test_indented_program_with_comments() {
    let source = "// calcul\n\tecrire(\"total: \" + \"42\"); // fin\n\tecrire(10 / 3);\n";
    let (result, output) = run_french(source);

    assert!(result.is_ok());
    assert_eq!(output, "total: 42\n3\n");
}

#[test]
fn test_tabs_inside_expressions() {
    let (result, output) = run_french("\tecrire(1 +\t2);\n\t\tecrire(\t4\t*\t2\t);");

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(output, "3\n8\n");
}

#[test]
fn test_out_of_range_literal_reports_once() {
    let (result, output) = run_french("ecrire(9223372036854775808);");

    let errors = result.unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "NumberParseError");
    assert_eq!(output, "");
}

#[test]
fn test_type_error_prevents_execution() {
    let (result, output) = run_french("ecrire(1);\necrire(1 + 1,5);");

    let errors = result.unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].phase(), ErrorPhase::Type);
    assert_eq!(errors[0].get_line(), 2);
    // Nothing runs, not even the statements before the bad one.
    assert_eq!(output, "");
}

#[test]
fn test_unterminated_string_prevents_execution() {
    let (result, output) = run_french("ecrire(1);\necrire(\"abc);");

    let errors = result.unwrap_err();
    assert_eq!(errors[0].phase(), ErrorPhase::Lexical);
    assert_eq!(errors[0].to_string(), "[line 2] Error: unterminated string literal");
    assert_eq!(output, "");
}

#[test]
fn test_unclosed_group_prevents_execution() {
    let (result, output) = run_french("ecrire(1);\n(1 + 2;\necrire(3);");

    let errors = result.unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].phase(), ErrorPhase::Syntax);
    assert_eq!(
        errors[0].to_string(),
        "[line 2] Error at ';': expected ')' after expression"
    );
    assert_eq!(output, "");
}

#[test]
fn test_lexical_and_syntax_errors_are_collected_together() {
    let (result, _) = run_french("1 @ 2;\n3 +;\n4;");

    let phases: Vec<ErrorPhase> = result.unwrap_err().iter().map(Error::phase).collect();
    assert!(phases.contains(&ErrorPhase::Lexical));
    assert!(phases.contains(&ErrorPhase::Syntax));
}

#[test]
fn test_runtime_error_keeps_earlier_output() {
    let (result, output) = run_french("ecrire(\"avant\");\n1 / 0;\necrire(\"apres\");");

    let errors = result.unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].phase(), ErrorPhase::Runtime);
    assert_eq!(errors[0].get_line(), 2);
    assert_eq!(output, "avant\n");
}

#[test]
fn test_analyze_types_every_node() {
    let (program, types) = analyze("1 + 2 < 4; ecrire(!vrai);", None, &Locale::french()).unwrap();

    assert_eq!(program.file.as_str(), "shell");
    assert_eq!(types.typed_count(), program.node_count);
}

#[test]
fn test_program_values() {
    let (result, _) = run_french("1 + 1; \"a\"; 2,5; vrai; nil;");

    assert_eq!(
        result.unwrap(),
        vec![
            Value::Integer(2),
            Value::String("a".to_string()),
            Value::Floating(2.5),
            Value::Boolean(true),
            Value::Nil,
        ]
    );
}

#[test]
fn test_empty_program() {
    let (result, output) = run_french("");

    assert!(result.unwrap().is_empty());
    assert_eq!(output, "");
}

#[test]
fn test_runs_are_deterministic() {
    let source = "ecrire(2 * (3 + 4) - 1);\necrire(7,5 / 2,5);\necrire(\"x\" + \"y\");";

    let first = run_french(source);
    let second = run_french(source);

    assert_eq!(first.1, "13\n3\nxy\n");
    assert_eq!(first.1, second.1);
    assert_eq!(first.0.unwrap(), second.0.unwrap());
}
