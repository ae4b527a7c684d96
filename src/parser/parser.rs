//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements and expressions are parsed by recursive descent, one function
//! per grammar production (see `stmt` and `expr`), with precedence encoded
//! by which production calls which.

use crate::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{stmt::parse_stmt, stream::TokenStream};

/// The main parser structure that maintains parsing state.
///
/// Everything it knows lives in the token cursor; AST nodes are handed
/// back to the caller as they are built.
pub struct Parser<'a> {
    /// Cursor over the borrowed token sequence
    stream: TokenStream<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser over an `EOF`-terminated token sequence.
    ///
    /// # Returns
    ///
    /// Returns a `MissingEof` error if the sequence lacks its sentinel.
    pub fn new(tokens: &'a [Token]) -> Result<Self, Error> {
        Ok(Parser {
            stream: TokenStream::new(tokens)?,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &'a Token {
        self.stream.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.stream.peek().kind
    }

    /// Returns the most recently consumed token.
    pub fn previous(&self) -> &'a Token {
        self.stream.previous()
    }

    /// Consumes the current token if its kind is one of `kinds`.
    pub fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        self.stream.match_kinds(kinds)
    }

    /// Checks if the cursor has reached `EOF`.
    pub fn is_at_end(&self) -> bool {
        self.stream.is_at_end()
    }

    /// Parses statements until `EOF`, which is left unconsumed.
    ///
    /// Stops at the first malformed construct; no partial program is
    /// returned.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut body = vec![];

        while !self.is_at_end() {
            body.push(parse_stmt(self)?);
        }

        Ok(Program::new(body))
    }
}

/// Parses a token sequence into a Program.
///
/// This is the main entry point for parsing. The sequence must finish with
/// an `EOF` token and is only read, never modified.
///
/// # Returns
///
/// The parsed Program, or the first error encountered.
pub fn parse(tokens: &[Token]) -> Result<Program, Error> {
    Parser::new(tokens)?.parse_program()
}
