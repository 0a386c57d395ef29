//! Tree-walking interpreter.
//!
//! Executes a program that already passed the type checker. Operators pick
//! their integer, real or string path from the checker's `TypeTable`.

pub mod expr;
pub mod interpreter;
pub mod stmt;

#[cfg(test)]
mod tests;
