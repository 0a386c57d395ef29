use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{
        ast::Program,
        expressions::{Expr, ExprKind},
        statements::Stmt,
        types::{AtomicTypeTag, Type},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::type_table::TypeTable;

/// Bottom-up type inference over a parsed program.
#[derive(Debug)]
pub struct TypeChecker {
    pub types: TypeTable,
    file: Rc<String>,
}

impl TypeChecker {
    pub fn new(node_count: usize, file: Rc<String>) -> Self {
        TypeChecker {
            types: TypeTable::with_capacity(node_count),
            file,
        }
    }

    pub fn check_stmt(&mut self, stmt: &Stmt) -> Result<Type, Error> {
        match stmt {
            Stmt::Expression(expression) => self.check_expr(expression),
            Stmt::Print { expression, .. } => self.check_expr(expression),
        }
    }

    /// Types the children of `expr`, applies the rule for its own kind and
    /// records the result in the type table.
    pub fn check_expr(&mut self, expr: &Expr) -> Result<Type, Error> {
        let ty = match &expr.kind {
            ExprKind::Literal(value) => value.get_type(),
            ExprKind::Grouping(inner) => self.check_expr(inner)?,
            ExprKind::Unary { operator, right } => {
                let operand = self.check_expr(right)?;
                self.check_unary(operator, operand)?
            }
            ExprKind::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.check_expr(left)?;
                let right = self.check_expr(right)?;
                self.check_binary(operator, left, right)?
            }
        };

        if !self.types.assign(expr.id, ty) {
            return Err(Error::new(
                ErrorImpl::TypeSlotReassigned,
                Position(expr.line, Rc::clone(&self.file)),
            ));
        }

        Ok(ty)
    }

    fn check_unary(&self, operator: &Token, operand: Type) -> Result<Type, Error> {
        match operator.kind {
            TokenKind::Dash if operand.is_numeric() => Ok(operand),
            TokenKind::Not if operand.is(AtomicTypeTag::Boolean) => Ok(Type::boolean()),
            TokenKind::Dash | TokenKind::Not => Err(self.error_at(
                operator,
                ErrorImpl::UnaryTypeMismatch {
                    operator: operator.lexeme.clone(),
                    operand: operand.to_string(),
                },
            )),
            _ => Err(self.unsupported(operator)),
        }
    }

    fn check_binary(&self, operator: &Token, left: Type, right: Type) -> Result<Type, Error> {
        match operator.kind {
            TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash => {
                match (left.tag(), right.tag()) {
                    (AtomicTypeTag::Integer, AtomicTypeTag::Integer) => Ok(Type::integer()),
                    (AtomicTypeTag::Floating, AtomicTypeTag::Floating) => Ok(Type::floating()),
                    (AtomicTypeTag::String, AtomicTypeTag::String)
                        if operator.kind == TokenKind::Plus =>
                    {
                        Ok(Type::string())
                    }
                    _ => Err(self.mismatch(
                        operator,
                        left,
                        right,
                        "two numbers of the same type, or two strings for '+'",
                    )),
                }
            }
            TokenKind::Greater
            | TokenKind::GreaterEquals
            | TokenKind::Less
            | TokenKind::LessEquals => {
                if left.is_numeric() && right.is_numeric() {
                    Ok(Type::boolean())
                } else {
                    Err(self.mismatch(operator, left, right, "numbers"))
                }
            }
            TokenKind::Equals | TokenKind::NotEquals => {
                if left == right {
                    Ok(Type::boolean())
                } else {
                    Err(self.mismatch(operator, left, right, "of the same type"))
                }
            }
            _ => Err(self.unsupported(operator)),
        }
    }

    fn mismatch(&self, operator: &Token, left: Type, right: Type, expected: &'static str) -> Error {
        self.error_at(
            operator,
            ErrorImpl::BinaryTypeMismatch {
                operator: operator.lexeme.clone(),
                left: left.to_string(),
                right: right.to_string(),
                expected,
            },
        )
    }

    fn unsupported(&self, operator: &Token) -> Error {
        self.error_at(
            operator,
            ErrorImpl::UnsupportedOperator {
                operator: operator.lexeme.clone(),
            },
        )
    }

    fn error_at(&self, token: &Token, error_impl: ErrorImpl) -> Error {
        Error::at_token(error_impl, token, Position(token.line, Rc::clone(&self.file)))
    }
}

/// Type checks every statement of `program`.
///
/// Checking stops at the first type error; the whole program is then
/// rejected and none of it may run.
pub fn type_check(program: &Program) -> Result<TypeTable, Error> {
    let mut type_checker = TypeChecker::new(program.node_count, Rc::clone(&program.file));

    for stmt in program.iter() {
        type_checker.check_stmt(stmt)?;
    }

    debug!(
        statements = program.len(),
        typed = type_checker.types.typed_count(),
        "type checked"
    );

    Ok(type_checker.types)
}
