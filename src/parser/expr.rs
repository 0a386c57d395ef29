use crate::{
    ast::{
        expressions::{Expr, ExprKind},
        values::TypedValue,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let depth = parser.depth();
    let result = parse_nested_expr(parser, bp);
    parser.set_depth(depth);
    result
}

// Every handler call below is one more level of tree depth.
fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.nest()?;

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            let token = parser.current_token();
            return Err(parser.error_at(
                token,
                ErrorImpl::ExpectedExpression {
                    token: token.lexeme.clone(),
                },
            ));
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the current level, keep extending lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let binding_power = parser.current_binding_power();
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => break,
        };

        parser.nest()?;
        left = led(parser, left, binding_power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    let value = match token.kind {
        TokenKind::True => TypedValue::boolean(true),
        TokenKind::False => TypedValue::boolean(false),
        TokenKind::Nil => TypedValue::nil(),
        TokenKind::IntegerLiteral | TokenKind::DoubleLiteral | TokenKind::StringLiteral => {
            match token.literal.clone() {
                Some(literal) => literal,
                None => {
                    return Err(parser.error_at(
                        &token,
                        ErrorImpl::ExpectedExpression {
                            token: token.lexeme.clone(),
                        },
                    ))
                }
            }
        }
        _ => {
            return Err(parser.error_at(
                &token,
                ErrorImpl::ExpectedExpression {
                    token: token.lexeme.clone(),
                },
            ))
        }
    };

    Ok(Expr {
        id: parser.advance_id(),
        kind: ExprKind::Literal(value),
        line: token.line,
    })
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr {
        id: parser.advance_id(),
        line: operator.line,
        kind: ExprKind::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        },
    })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    // Recursing at unary power makes `- - x` nest to the right.
    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr {
        id: parser.advance_id(),
        line: operator.line,
        kind: ExprKind::Unary {
            operator,
            right: Box::new(right),
        },
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.advance().clone();
    let inner = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "expected ')' after expression")?;

    Ok(Expr {
        id: parser.advance_id(),
        line: open.line,
        kind: ExprKind::Grouping(Box::new(inner)),
    })
}
