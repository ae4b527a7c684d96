use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenKind};

/// Expression
/// Either a numeric leaf or an operator applied to two sub-expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Binary(BinaryExpr),
    Literal(LiteralExpr),
}

/// Binary Expression
/// `left operator right`, where the operator is one of `+ - * /`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Literal Expression
/// Holds the numeral exactly as it appeared in the `Number` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralExpr {
    pub value: String,
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Expr::Literal(LiteralExpr {
            value: value.into(),
        })
    }

    /// Rebuilds the token sequence this expression was parsed from, in
    /// left-to-right order and without the trailing `EOF`.
    pub fn infix_tokens(&self) -> Vec<Token> {
        enum Pending<'a> {
            Expr(&'a Expr),
            Operator(&'a Token),
        }

        let mut tokens = vec![];
        let mut stack = vec![Pending::Expr(self)];

        while let Some(pending) = stack.pop() {
            match pending {
                Pending::Operator(operator) => tokens.push(operator.clone()),
                Pending::Expr(Expr::Literal(literal)) => {
                    tokens.push(Token::new(TokenKind::Number, literal.value.clone()))
                }
                Pending::Expr(Expr::Binary(binary)) => {
                    stack.push(Pending::Expr(binary.right.as_ref()));
                    stack.push(Pending::Operator(&binary.operator));
                    stack.push(Pending::Expr(binary.left.as_ref()));
                }
            }
        }

        tokens
    }

    /// Nesting depth of the tree; a lone literal has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];

        while let Some((expr, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Expr::Binary(binary) = expr {
                stack.push((binary.left.as_ref(), depth + 1));
                stack.push((binary.right.as_ref(), depth + 1));
            }
        }

        deepest
    }
}

impl BinaryExpr {
    // Leaves an empty literal behind so the node can be dropped shallowly.
    fn take_children(&mut self, pending: &mut Vec<Expr>) {
        pending.push(std::mem::replace(self.left.as_mut(), Expr::literal(String::new())));
        pending.push(std::mem::replace(self.right.as_mut(), Expr::literal(String::new())));
    }
}

// Operator chains nest one box per operator, so the default recursive drop
// would exhaust the stack on long inputs.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = vec![];
        if let Expr::Binary(binary) = self {
            binary.take_children(&mut pending);
        }

        while let Some(mut expr) = pending.pop() {
            if let Expr::Binary(binary) = &mut expr {
                binary.take_children(&mut pending);
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Pending<'a> {
            Expr(&'a Expr),
            Text(&'a str),
        }

        let mut stack = vec![Pending::Expr(self)];

        while let Some(pending) = stack.pop() {
            match pending {
                Pending::Text(text) => f.write_str(text)?,
                Pending::Expr(Expr::Literal(literal)) => write!(f, "{}", literal)?,
                Pending::Expr(Expr::Binary(binary)) => {
                    stack.push(Pending::Text(" ]"));
                    stack.push(Pending::Expr(binary.right.as_ref()));
                    stack.push(Pending::Text(", right = "));
                    stack.push(Pending::Text(&binary.operator.value));
                    stack.push(Pending::Text(", operator = "));
                    stack.push(Pending::Expr(binary.left.as_ref()));
                    stack.push(Pending::Text("[ Binary: left = "));
                }
            }
        }

        Ok(())
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[ Binary: left = {}, operator = {}, right = {} ]",
            self.left, self.operator.value, self.right
        )
    }
}

impl Display for LiteralExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Literal: {}", self.value)
    }
}
