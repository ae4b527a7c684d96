use std::fmt::Display;

use super::expressions::Expr;

/// Statement
/// The grammar has a single statement form: a bare expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Expression(ExpressionStmt),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

impl Stmt {
    pub fn expression(expression: Expr) -> Self {
        Stmt::Expression(ExpressionStmt { expression })
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExpressionStatement: {}", self.expression)
    }
}
