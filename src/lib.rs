#![allow(clippy::module_inception)]

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Tokenizes and parses arithmetic source text in one step.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    parse(&tokens)
}

/// Renders an error the way the binary reports it:
///
/// ```text
/// Error: IllegalExpression (Input ended where a number was expected, ...)
/// -> Token { kind: EOF, value: EOF }
/// ```
pub fn format_error(error: &Error) -> String {
    let mut output = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    match error.get_token() {
        Some(token) => output.push_str(&format!("\n-> {}", token)),
        None => output.push_str(&format!("\n-> {}", error)),
    }

    output
}

pub fn display_error(error: &Error) {
    println!("{}", format_error(error));
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};
    use crate::lexer::tokens::{Token, TokenKind};

    #[test]
    fn test_parse_source() {
        let program = super::parse_source("2 + 5 * 2 - 3").unwrap();

        assert_eq!(
            program.to_string(),
            "ExpressionStatement: [ Binary: left = [ Binary: left = Literal: 2, operator = +, \
             right = [ Binary: left = Literal: 5, operator = *, right = Literal: 2 ] ], \
             operator = -, right = Literal: 3 ]"
        );
    }

    #[test]
    fn test_parse_source_lexer_error() {
        let error = super::parse_source("2 % 3").unwrap_err();

        assert_eq!(error.get_error_name(), "UnrecognisedToken");
    }

    #[test]
    fn test_format_error_with_token() {
        let error = Error::new(
            ErrorImpl::UnknownOperand {
                token: "-".to_string(),
                kind: TokenKind::Minus,
            },
            Token::new(TokenKind::Minus, "-"),
        );

        assert_eq!(
            super::format_error(&error),
            "Error: UnknownOperand (Unknown operand: `-`, statements must start with a number)\n\
             -> Token { kind: Minus, value: - }"
        );
    }

    #[test]
    fn test_format_error_without_token() {
        let error = Error::without_token(ErrorImpl::UnrecognisedToken {
            token: "%".to_string(),
        });

        assert_eq!(
            super::format_error(&error),
            "Error: UnrecognisedToken\n-> unrecognised token: \"%\""
        );
    }
}
