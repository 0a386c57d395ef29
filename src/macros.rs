//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed operators
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, "+", None, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: String::from($lexeme),
            literal: $literal,
            line: $line,
        }
    };
}

/// Creates a default lexer handler for fixed operator and punctuation patterns.
///
/// Generates a handler that pushes a token of the given kind on the current
/// line and advances the lexer past the operator.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<="))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, _regex: &regex::Regex| {
            let line = lexer.line();
            lexer.push($crate::MK_TOKEN!($kind, $value, None, line));
            lexer.advance_n($value.len());
        }
    };
}
