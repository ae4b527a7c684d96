use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    token: Option<Token>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, token: Token) -> Self {
        Error {
            internal_error: error_impl,
            token: Some(token),
        }
    }

    /// Builds an error that has no offending token to point at.
    pub fn without_token(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            token: None,
        }
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnknownOperand { .. } => "UnknownOperand",
            ErrorImpl::IllegalExpression { .. } => "IllegalExpression",
            ErrorImpl::MissingEof => "MissingEof",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnknownOperand { token, .. } => ErrorTip::Suggestion(format!(
                "Unknown operand: `{}`, statements must start with a number",
                token
            )),
            ErrorImpl::IllegalExpression { token, kind } => {
                if *kind == TokenKind::EOF {
                    ErrorTip::Suggestion(String::from(
                        "Input ended where a number was expected, is there a trailing operator?",
                    ))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Expected a number, found `{}`, are two operators adjacent?",
                        token
                    ))
                }
            }
            ErrorImpl::MissingEof => ErrorTip::Suggestion(String::from(
                "Token sequences must finish with an EOF token",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unknown operand: {token:?} ({kind})")]
    UnknownOperand { token: String, kind: TokenKind },
    #[error("illegal expression: expected a number, found {token:?} ({kind})")]
    IllegalExpression { token: String, kind: TokenKind },
    #[error("token sequence does not end with EOF")]
    MissingEof,
}
