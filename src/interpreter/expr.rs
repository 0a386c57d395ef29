use std::rc::Rc;

use crate::{
    ast::{
        expressions::{Expr, ExprKind},
        types::{AtomicTypeTag, Type},
        values::Value,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    type_checker::type_table::TypeTable,
    Position,
};

/// Computes expression values from a checked program.
///
/// Arithmetic paths are chosen from the inferred type recorded by the
/// checker, never from the shape of the runtime value.
pub struct Evaluator<'a> {
    types: &'a TypeTable,
    file: Rc<String>,
}

impl<'a> Evaluator<'a> {
    pub fn new(types: &'a TypeTable, file: Rc<String>) -> Self {
        Evaluator { types, file }
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<Value, Error> {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(value.value().clone()),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                let ty = self.type_of(expr)?;
                self.evaluate_unary(operator, ty, right)
            }
            ExprKind::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                let ty = self.type_of(expr)?;
                self.evaluate_binary(operator, ty, left, right)
            }
        }
    }

    fn evaluate_unary(&self, operator: &Token, ty: Type, right: Value) -> Result<Value, Error> {
        match operator.kind {
            TokenKind::Dash => {
                if ty.is(AtomicTypeTag::Integer) {
                    let value = self.to_int(operator, &right)?;
                    value
                        .checked_neg()
                        .map(Value::Integer)
                        .ok_or_else(|| self.overflow(operator))
                } else {
                    Ok(Value::Floating(-self.to_float(operator, &right)?))
                }
            }
            TokenKind::Not => Ok(Value::Boolean(!self.to_bool(operator, &right)?)),
            _ => Err(self.unsupported(operator)),
        }
    }

    fn evaluate_binary(
        &self,
        operator: &Token,
        ty: Type,
        left: Value,
        right: Value,
    ) -> Result<Value, Error> {
        match operator.kind {
            TokenKind::Greater
            | TokenKind::GreaterEquals
            | TokenKind::Less
            | TokenKind::LessEquals => {
                // Mixed integer/real comparisons are allowed, so compare as reals.
                let left = self.to_float(operator, &left)?;
                let right = self.to_float(operator, &right)?;
                let result = match operator.kind {
                    TokenKind::Greater => left > right,
                    TokenKind::GreaterEquals => left >= right,
                    TokenKind::Less => left < right,
                    _ => left <= right,
                };
                Ok(Value::Boolean(result))
            }
            TokenKind::Equals => Ok(Value::Boolean(is_equal(&left, &right))),
            TokenKind::NotEquals => Ok(Value::Boolean(!is_equal(&left, &right))),
            TokenKind::Plus => match ty.tag() {
                AtomicTypeTag::String => {
                    let mut text = self.to_str(operator, &left)?.to_string();
                    text.push_str(self.to_str(operator, &right)?);
                    Ok(Value::String(text))
                }
                AtomicTypeTag::Integer => self.integer_op(operator, &left, &right, i64::checked_add),
                _ => Ok(Value::Floating(
                    self.to_float(operator, &left)? + self.to_float(operator, &right)?,
                )),
            },
            TokenKind::Dash => match ty.tag() {
                AtomicTypeTag::Integer => self.integer_op(operator, &left, &right, i64::checked_sub),
                _ => Ok(Value::Floating(
                    self.to_float(operator, &left)? - self.to_float(operator, &right)?,
                )),
            },
            TokenKind::Star => match ty.tag() {
                AtomicTypeTag::Integer => self.integer_op(operator, &left, &right, i64::checked_mul),
                _ => Ok(Value::Floating(
                    self.to_float(operator, &left)? * self.to_float(operator, &right)?,
                )),
            },
            TokenKind::Slash => match ty.tag() {
                AtomicTypeTag::Integer => {
                    if self.to_int(operator, &right)? == 0 {
                        return Err(self.error_at(
                            operator,
                            ErrorImpl::DivisionByZero {
                                operator: operator.lexeme.clone(),
                            },
                        ));
                    }
                    self.integer_op(operator, &left, &right, i64::checked_div)
                }
                _ => Ok(Value::Floating(
                    self.to_float(operator, &left)? / self.to_float(operator, &right)?,
                )),
            },
            _ => Err(self.unsupported(operator)),
        }
    }

    fn integer_op(
        &self,
        operator: &Token,
        left: &Value,
        right: &Value,
        op: fn(i64, i64) -> Option<i64>,
    ) -> Result<Value, Error> {
        let left = self.to_int(operator, left)?;
        let right = self.to_int(operator, right)?;

        op(left, right)
            .map(Value::Integer)
            .ok_or_else(|| self.overflow(operator))
    }

    fn type_of(&self, expr: &Expr) -> Result<Type, Error> {
        self.types.type_of(expr).ok_or_else(|| {
            Error::new(
                ErrorImpl::MissingType,
                Position(expr.line, Rc::clone(&self.file)),
            )
        })
    }

    fn to_int(&self, operator: &Token, value: &Value) -> Result<i64, Error> {
        match value {
            Value::Integer(value) => Ok(*value),
            Value::Floating(value) => Ok(*value as i64),
            other => Err(self.unexpected(operator, "an integer", other)),
        }
    }

    fn to_float(&self, operator: &Token, value: &Value) -> Result<f64, Error> {
        match value {
            Value::Floating(value) => Ok(*value),
            Value::Integer(value) => Ok(*value as f64),
            other => Err(self.unexpected(operator, "a numeric", other)),
        }
    }

    fn to_bool(&self, operator: &Token, value: &Value) -> Result<bool, Error> {
        match value {
            Value::Boolean(value) => Ok(*value),
            other => Err(self.unexpected(operator, "a boolean", other)),
        }
    }

    fn to_str<'v>(&self, operator: &Token, value: &'v Value) -> Result<&'v str, Error> {
        match value {
            Value::String(value) => Ok(value),
            other => Err(self.unexpected(operator, "a string", other)),
        }
    }

    fn unexpected(&self, operator: &Token, expected: &'static str, found: &Value) -> Error {
        self.error_at(
            operator,
            ErrorImpl::UnexpectedValue {
                operator: operator.lexeme.clone(),
                expected,
                found: found.describe().to_string(),
            },
        )
    }

    fn overflow(&self, operator: &Token) -> Error {
        self.error_at(
            operator,
            ErrorImpl::IntegerOverflow {
                operator: operator.lexeme.clone(),
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

/// Value equality where `nil` only equals `nil`.
///
/// Reals compare by representation: `NaN` equals itself and `0,0` differs
/// from `-0,0`.
pub fn is_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Nil, Value::Nil) => true,
        (Value::Nil, _) | (_, Value::Nil) => false,
        (Value::Floating(left), Value::Floating(right)) => {
            (left.is_nan() && right.is_nan()) || left.to_bits() == right.to_bits()
        }
        (left, right) => left == right,
    }
}
