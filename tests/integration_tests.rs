//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API with hand-built token sequences, the way
//! an external lexer would, and check the resulting trees and errors.

use four_rule::{
    ast::{expressions::Expr, statements::Stmt},
    lexer::tokens::{Token, TokenKind},
    parse_source,
    parser::{lookups::BindingPower, parser::parse},
};

fn tok(kind: TokenKind, value: &str) -> Token {
    Token::new(kind, value)
}

fn tokens(pairs: &[(TokenKind, &str)]) -> Vec<Token> {
    let mut tokens: Vec<Token> = pairs.iter().map(|(kind, value)| tok(*kind, value)).collect();
    tokens.push(Token::eof());
    tokens
}

fn only_expr(tokens: &[Token]) -> Expr {
    let program = parse(tokens).expect("Parsing should succeed");
    assert_eq!(program.len(), 1, "Expected exactly one statement");

    let Stmt::Expression(stmt) = &program.body[0];
    stmt.expression.clone()
}

/// Checks that no additive operator sits below a multiplicative one.
fn assert_precedence(expr: &Expr, inside_multiplicative: bool) {
    if let Expr::Binary(binary) = expr {
        let bp = BindingPower::of(binary.operator.kind).expect("Binary operator kind");
        assert!(binary.operator.kind.is_binary_operator());
        assert!(
            !(inside_multiplicative && bp == BindingPower::Additive),
            "Additive node found under a multiplicative node"
        );

        let inside = inside_multiplicative || bp == BindingPower::Multiplicative;
        assert_precedence(&binary.left, inside);
        assert_precedence(&binary.right, inside);
    }
}

#[test]
fn test_scenario_mixed_precedence() {
    let input = tokens(&[
        (TokenKind::Number, "2"),
        (TokenKind::Plus, "+"),
        (TokenKind::Number, "5"),
        (TokenKind::Star, "*"),
        (TokenKind::Number, "2"),
        (TokenKind::Minus, "-"),
        (TokenKind::Number, "3"),
    ]);

    let expected = Expr::binary(
        Expr::binary(
            Expr::literal("2"),
            tok(TokenKind::Plus, "+"),
            Expr::binary(
                Expr::literal("5"),
                tok(TokenKind::Star, "*"),
                Expr::literal("2"),
            ),
        ),
        tok(TokenKind::Minus, "-"),
        Expr::literal("3"),
    );

    assert_eq!(only_expr(&input), expected);
}

#[test]
fn test_scenario_left_associative_division() {
    let input = tokens(&[
        (TokenKind::Number, "4"),
        (TokenKind::Slash, "/"),
        (TokenKind::Number, "2"),
        (TokenKind::Slash, "/"),
        (TokenKind::Number, "1"),
    ]);

    let expected = Expr::binary(
        Expr::binary(
            Expr::literal("4"),
            tok(TokenKind::Slash, "/"),
            Expr::literal("2"),
        ),
        tok(TokenKind::Slash, "/"),
        Expr::literal("1"),
    );

    assert_eq!(only_expr(&input), expected);
}

#[test]
fn test_scenario_left_associative_addition() {
    let input = tokens(&[
        (TokenKind::Number, "1"),
        (TokenKind::Plus, "+"),
        (TokenKind::Number, "2"),
        (TokenKind::Plus, "+"),
        (TokenKind::Number, "3"),
    ]);

    let expected = Expr::binary(
        Expr::binary(
            Expr::literal("1"),
            tok(TokenKind::Plus, "+"),
            Expr::literal("2"),
        ),
        tok(TokenKind::Plus, "+"),
        Expr::literal("3"),
    );

    assert_eq!(only_expr(&input), expected);
}

#[test]
fn test_scenario_single_number() {
    let program = parse(&tokens(&[(TokenKind::Number, "9")])).unwrap();

    assert_eq!(program.body, vec![Stmt::expression(Expr::literal("9"))]);
}

#[test]
fn test_scenario_leading_operator() {
    let input = tokens(&[(TokenKind::Plus, "+"), (TokenKind::Number, "1")]);
    let error = parse(&input).unwrap_err();

    assert_eq!(error.get_error_name(), "UnknownOperand");
}

#[test]
fn test_scenario_trailing_operator() {
    let input = tokens(&[(TokenKind::Number, "1"), (TokenKind::Plus, "+")]);
    let error = parse(&input).unwrap_err();

    assert_eq!(error.get_error_name(), "IllegalExpression");
}

#[test]
fn test_empty_input() {
    let program = parse(&[Token::eof()]).unwrap();

    assert!(program.is_empty());
}

#[test]
fn test_infix_order_is_preserved() {
    let sources = [
        "1",
        "1 - 2 - 3",
        "6 / 3 * 2",
        "2 + 5 * 2 - 3",
        "1 * 2 + 3 * 4 - 5 / 6",
        "10 - 2 * 3 * 4 + 8 / 2 / 2",
    ];

    for source in sources {
        let input = four_rule::lexer::lexer::tokenize(source).unwrap();
        let expr = only_expr(&input);

        assert_eq!(expr.infix_tokens(), input[..input.len() - 1].to_vec(), "{}", source);
        assert_precedence(&expr, false);
    }
}

#[test]
fn test_long_chain_is_left_leaning() {
    let source = (1..=50).map(|n| n.to_string()).collect::<Vec<_>>().join(" - ");
    let program = parse_source(&source).unwrap();

    let Stmt::Expression(stmt) = &program.body[0];
    let mut expr = &stmt.expression;
    let mut rights = vec![];

    while let Expr::Binary(binary) = expr {
        assert!(matches!(*binary.right, Expr::Literal(_)));
        if let Expr::Literal(literal) = binary.right.as_ref() {
            rights.push(literal.value.clone());
        }
        expr = binary.left.as_ref();
    }

    assert_eq!(rights.len(), 49);
    assert_eq!(rights.first().map(String::as_str), Some("50"));
    assert_eq!(expr, &Expr::literal("1"));
}

#[test]
fn test_ast_outlives_tokens() {
    let program = {
        let input = tokens(&[
            (TokenKind::Number, "3"),
            (TokenKind::Star, "*"),
            (TokenKind::Number, "4"),
        ]);
        parse(&input).unwrap()
    };

    assert_eq!(
        program.to_string(),
        "ExpressionStatement: [ Binary: left = Literal: 3, operator = *, right = Literal: 4 ]"
    );
}

#[test]
fn test_very_long_chain_renders_and_drops() {
    const OPERATORS: usize = 100_000;

    let mut input = vec![tok(TokenKind::Number, "1")];
    for _ in 0..OPERATORS {
        input.push(tok(TokenKind::Minus, "-"));
        input.push(tok(TokenKind::Number, "1"));
    }
    input.push(Token::eof());

    let program = parse(&input).unwrap();
    assert_eq!(program.len(), 1);

    let rendered = program.to_string();
    assert!(rendered.starts_with("ExpressionStatement: [ Binary: left = [ Binary: left = "));
    assert!(rendered.ends_with(", operator = -, right = Literal: 1 ]"));
    assert_eq!(rendered.matches("[ Binary:").count(), OPERATORS);

    let Stmt::Expression(stmt) = &program.body[0];
    assert_eq!(stmt.expression.depth(), OPERATORS + 1);
    assert_eq!(stmt.expression.infix_tokens().len(), input.len() - 1);

    drop(program);
}
