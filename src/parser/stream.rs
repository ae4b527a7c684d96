//! Cursor over a caller-supplied token sequence.
//!
//! The sequence must finish with an `EOF` token; the cursor only moves
//! forward and never passes that sentinel.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    /// Borrowed token sequence, `EOF`-terminated
    tokens: &'a [Token],
    /// Index of the current token
    pos: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream positioned on the first token.
    ///
    /// Fails with `MissingEof` when `tokens` is empty or its final token is
    /// not `EOF`.
    pub fn new(tokens: &'a [Token]) -> Result<Self, Error> {
        match tokens.last() {
            Some(last) if last.kind == TokenKind::EOF => Ok(TokenStream { tokens, pos: 0 }),
            _ => Err(Error::without_token(ErrorImpl::MissingEof)),
        }
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    /// Returns the token just behind the cursor. On a fresh stream this is
    /// the first token.
    pub fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Moves past the current token and returns it. At `EOF` the cursor
    /// stays put and the last consumed token is returned instead.
    pub fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek().kind == kind
    }

    /// Consumes the current token if it has any of `kinds`, tried in order.
    pub fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }

        false
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::EOF
    }
}
