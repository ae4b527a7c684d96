use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub type OperandHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_addition(parser)
}

/// addition := multiplication ( (PLUS | MINUS) multiplication )*
pub fn parse_addition(parser: &mut Parser) -> Result<Expr, Error> {
    parse_left_assoc(parser, BindingPower::Additive, parse_multiplication)
}

/// multiplication := primary ( (STAR | SLASH) primary )*
pub fn parse_multiplication(parser: &mut Parser) -> Result<Expr, Error> {
    parse_left_assoc(parser, BindingPower::Multiplicative, parse_primary_expr)
}

/// Parses `operand (op operand)*` for the operators of `bp`, folding to the
/// left. The right operand is always the tighter level, never this one,
/// which is what keeps chains left-associative.
fn parse_left_assoc(
    parser: &mut Parser,
    bp: BindingPower,
    operand: OperandHandler,
) -> Result<Expr, Error> {
    let mut left = operand(parser)?;

    while parser.match_kinds(bp.operators()) {
        let operator = parser.previous().clone();
        let right = operand(parser)?;

        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

/// primary := NUMBER
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.match_kinds(&[TokenKind::Number]) {
        return Ok(Expr::literal(parser.previous().value.clone()));
    }

    let token = parser.current_token();
    Err(Error::new(
        ErrorImpl::IllegalExpression {
            token: token.value.clone(),
            kind: token.kind,
        },
        token.clone(),
    ))
}
