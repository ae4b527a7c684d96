use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// statement := expressionStatement
///
/// Only a number may open a statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.current_token_kind() == TokenKind::Number {
        return parse_expression_stmt(parser);
    }

    let token = parser.current_token();
    Err(Error::new(
        ErrorImpl::UnknownOperand {
            token: token.value.clone(),
            kind: token.kind,
        },
        token.clone(),
    ))
}

// No terminator: the statement ends wherever the expression stops extending.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;

    Ok(Stmt::expression(expression))
}
