//! Error types and error handling for the interpreter.
//!
//! This module defines the error type shared by every pipeline stage.
//! It includes:
//!
//! - Error structures with source line information
//! - Specific error variants for lexing, parsing, type checking and execution
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
