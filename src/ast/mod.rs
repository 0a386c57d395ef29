/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node identities and the parsed program
/// - expressions: The expression node sum type
/// - statements: The statement node sum type
/// - types: The interned atomic type registry
/// - values: Runtime values and tagged literal boxes
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
pub mod values;

#[cfg(test)]
mod tests;
