use crate::lexer::tokens::Token;

use super::expressions::Expr;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `expression ;` evaluated for its value.
    Expression(Expr),
    /// `ecrire ( expression ) ;` evaluates and prints one line.
    Print { keyword: Token, expression: Expr },
}

impl Stmt {
    pub fn expression(&self) -> &Expr {
        match self {
            Stmt::Expression(expression) => expression,
            Stmt::Print { expression, .. } => expression,
        }
    }
}
