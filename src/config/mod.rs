//! Source language configuration.
//!
//! Programs can be written with French or English keywords. The active
//! locale is an immutable value handed to the lexer; it decides the keyword
//! table and the decimal separator used in real literals.

pub mod locale;

pub use locale::{Language, Locale};
