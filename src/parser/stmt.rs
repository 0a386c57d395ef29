use crate::{
    ast::statements::Stmt,
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return handler(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon, "expected ';' after expression")?;

    Ok(Stmt::Expression(expression))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance().clone();

    let message = format!("expected '(' after '{}'", keyword.lexeme);
    parser.expect(TokenKind::OpenParen, &message)?;
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "expected ')' after value")?;
    parser.expect(TokenKind::Semicolon, "expected ';' after value")?;

    Ok(Stmt::Print {
        keyword,
        expression,
    })
}
