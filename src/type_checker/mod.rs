//! Static type checking.
//!
//! A single post-order pass infers a type for every expression node and
//! rejects operator/operand combinations the language does not allow. The
//! result is a `TypeTable` keyed by expression id, which the interpreter
//! consults instead of inspecting runtime values.

pub mod type_checker;
pub mod type_table;
