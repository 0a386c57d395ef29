//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a program of statements. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Statement parsing (expression statements, print statements)
//! - Expression parsing (binary and unary operators, groups, literals)
//! - Error recovery by synchronising on statement boundaries
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
