#![allow(clippy::module_inception)]

use std::{io::Write, rc::Rc, time::Instant};

use tracing::debug;

use crate::{
    ast::{ast::Program, values::Value},
    config::Locale,
    errors::errors::{Error, ErrorTip},
    interpreter::interpreter::Interpreter,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::{type_checker::type_check, type_table::TypeTable},
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A 1-based line number and the name of the source it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

/// Runs every static phase over `source`.
///
/// Lexical and syntax errors are collected together; type checking only
/// runs once both are clean, and stops at its first error.
pub fn analyze(
    source: &str,
    file: Option<&str>,
    locale: &Locale,
) -> Result<(Program, TypeTable), Vec<Error>> {
    let file = file.unwrap_or("shell").to_string();

    let start = Instant::now();
    let (tokens, mut errors) = tokenize(source, Some(file.clone()), locale);
    debug!(elapsed = ?start.elapsed(), "tokenized");

    let parse_start = Instant::now();
    let (program, parse_errors) = parse(tokens, Rc::new(file));
    debug!(elapsed = ?parse_start.elapsed(), "parsed");

    errors.extend(parse_errors);
    if !errors.is_empty() {
        return Err(errors);
    }

    let type_check_start = Instant::now();
    let types = type_check(&program).map_err(|error| vec![error])?;
    debug!(elapsed = ?type_check_start.elapsed(), "type checked");

    Ok((program, types))
}

/// Analyzes `source` and executes it only if no static error was found.
pub fn run<W: Write>(
    source: &str,
    file: Option<&str>,
    locale: &Locale,
    interpreter: &mut Interpreter<W>,
) -> Result<Vec<Value>, Vec<Error>> {
    let (program, types) = analyze(source, file, locale)?;

    let start = Instant::now();
    let values = interpreter
        .execute(&program, &types)
        .map_err(|error| vec![error])?;
    debug!(elapsed = ?start.elapsed(), "executed");

    Ok(values)
}

/// Returns the text of the 1-based `line` of `source`, if it exists.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: BinaryTypeMismatch (The operands must be ...)
        -> main.al
          |
        3 | ecrire(1 + 1,5);
          | ---------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("{}", error);

    let position = error.get_position();
    eprintln!("-> {}", position.1);

    let Some(line_text) = get_source_line(source, position.0) else {
        return;
    };

    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, _) = remove_starting_whitespace(line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let lexeme = error
        .get_location()
        .and_then(|location| location.strip_prefix("at '"))
        .and_then(|location| location.strip_suffix('\''));

    if let Some(column) = lexeme.and_then(|lexeme| line_text_removed.find(lexeme)) {
        let arrows = line_text_removed[..column].chars().count() + 1;
        eprintln!("{:>padding$} {:->arrows$}", "|", "^");
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();
    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_source_line() {
        let source = "ecrire(1);\r\n  ecrire(2);\n\necrire(3);";

        assert_eq!(get_source_line(source, 1), Some("ecrire(1);"));
        assert_eq!(get_source_line(source, 2), Some("  ecrire(2);"));
        assert_eq!(get_source_line(source, 3), Some(""));
        assert_eq!(get_source_line(source, 4), Some("ecrire(3);"));
        assert_eq!(get_source_line(source, 5), None);
        assert_eq!(get_source_line(source, 0), None);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(remove_starting_whitespace("  \tx = 1"), ("x = 1", 3));
        assert_eq!(remove_starting_whitespace("x"), ("x", 0));
    }
}
