use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// The stage of the pipeline that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Lexical,
    Syntax,
    Type,
    Runtime,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    location: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            location: None,
        }
    }

    /// Builds an error anchored on a token: `at end` for EOF, `at '<lexeme>'` otherwise.
    pub fn at_token(error_impl: ErrorImpl, token: &Token, position: Position) -> Self {
        let location = if token.kind == TokenKind::EOF {
            String::from("at end")
        } else {
            format!("at '{}'", token.lexeme)
        };

        Error {
            internal_error: error_impl,
            position,
            location: Some(location),
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.position.0
    }

    pub fn get_location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn phase(&self) -> ErrorPhase {
        match &self.internal_error {
            ErrorImpl::UnsupportedCharacter { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::NumberParseError { .. } => ErrorPhase::Lexical,
            ErrorImpl::ExpectedExpression { .. } | ErrorImpl::UnexpectedTokenDetailed { .. } => {
                ErrorPhase::Syntax
            }
            ErrorImpl::UnaryTypeMismatch { .. }
            | ErrorImpl::BinaryTypeMismatch { .. }
            | ErrorImpl::UnsupportedOperator { .. }
            | ErrorImpl::TypeSlotReassigned => ErrorPhase::Type,
            ErrorImpl::DivisionByZero { .. }
            | ErrorImpl::IntegerOverflow { .. }
            | ErrorImpl::UnexpectedValue { .. }
            | ErrorImpl::MissingType
            | ErrorImpl::OutputError { .. } => ErrorPhase::Runtime,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnsupportedCharacter { .. } => "UnsupportedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnaryTypeMismatch { .. } => "UnaryTypeMismatch",
            ErrorImpl::BinaryTypeMismatch { .. } => "BinaryTypeMismatch",
            ErrorImpl::UnsupportedOperator { .. } => "UnsupportedOperator",
            ErrorImpl::TypeSlotReassigned => "TypeSlotReassigned",
            ErrorImpl::DivisionByZero { .. } => "DivisionByZero",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::UnexpectedValue { .. } => "UnexpectedValue",
            ErrorImpl::MissingType => "MissingType",
            ErrorImpl::OutputError { .. } => "OutputError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnsupportedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Did you forget the closing `\"`?"))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::ExpectedExpression { token } => {
                ErrorTip::Suggestion(format!("Expected an expression, found `{}`", token))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnaryTypeMismatch { operator, .. } => match operator.as_str() {
                "!" => ErrorTip::Suggestion(String::from("The operand must be a boolean")),
                _ => ErrorTip::Suggestion(String::from(
                    "The operand must be a number (integer or real)",
                )),
            },
            ErrorImpl::BinaryTypeMismatch { expected, .. } => {
                ErrorTip::Suggestion(format!("The operands must be {}", expected))
            }
            ErrorImpl::UnsupportedOperator { .. } => ErrorTip::None,
            ErrorImpl::TypeSlotReassigned => ErrorTip::None,
            ErrorImpl::DivisionByZero { .. } => {
                ErrorTip::Suggestion(String::from("The right operand of `/` evaluated to 0"))
            }
            ErrorImpl::IntegerOverflow { .. } => ErrorTip::Suggestion(String::from(
                "The result does not fit in a 64-bit integer",
            )),
            ErrorImpl::UnexpectedValue { .. } => ErrorTip::None,
            ErrorImpl::MissingType => ErrorTip::Suggestion(String::from(
                "The program must be type checked before it is executed",
            )),
            ErrorImpl::OutputError { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(
                f,
                "[line {}] Error {}: {}",
                self.position.0, location, self.internal_error
            ),
            None => write!(f, "[line {}] Error: {}", self.position.0, self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("unsupported character {character:?}")]
    UnsupportedCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Syntax
    #[error("expected expression")]
    ExpectedExpression { token: String },
    #[error("{message}")]
    UnexpectedTokenDetailed { token: String, message: String },

    // Type
    #[error("unary operator '{operator}' is incompatible with type {operand}")]
    UnaryTypeMismatch { operator: String, operand: String },
    #[error("operator '{operator}' is incompatible with types {left} and {right}")]
    BinaryTypeMismatch {
        operator: String,
        left: String,
        right: String,
        expected: &'static str,
    },
    #[error("unsupported operator '{operator}'")]
    UnsupportedOperator { operator: String },
    #[error("expression was typed twice")]
    TypeSlotReassigned,

    // Runtime
    #[error("division by zero with operator '{operator}'")]
    DivisionByZero { operator: String },
    #[error("integer overflow with operator '{operator}'")]
    IntegerOverflow { operator: String },
    #[error("operator '{operator}' expected {expected} value, found {found}")]
    UnexpectedValue {
        operator: String,
        expected: &'static str,
        found: String,
    },
    #[error("expression has no inferred type")]
    MissingType,
    #[error("failed to write output: {message}")]
    OutputError { message: String },
}
