//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Recognition of locale keywords, identifiers, literals, and operators
//! - Line tracking for error reporting
//! - Comments, whitespace and tab indentation markers

pub mod lexer;
pub mod tokens;
