//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use std::mem::discriminant;

use garnet_ir::{Span, Token, TokenKind, TokenList};

use crate::{ErrorContext, ParseError};

/// Cursor for navigating tokens.
///
/// Invariant: the token list ends with `Eof`, and the cursor never
/// advances past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(
            matches!(tokens.iter().last().map(|t| &t.kind), Some(TokenKind::Eof)),
            "token list must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Peek at the next token's kind (one-token lookahead).
    /// Returns `TokenKind::Eof` at the end of the stream.
    #[inline]
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + 1).min(last)].kind
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token has the same kind as `kind`, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        discriminant(self.current_kind()) == discriminant(kind)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// Advancing at `Eof` stays at `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let current = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        current
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail with an `UnexpectedToken` error.
    pub fn expect(
        &mut self,
        kind: &TokenKind,
        expected: &'static str,
        context: ErrorContext,
    ) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(expected, context))
        }
    }

    /// Build an error describing the current token.
    pub fn unexpected(&self, expected: &'static str, context: ErrorContext) -> ParseError {
        let token = self.current();
        if matches!(token.kind, TokenKind::Error) {
            return ParseError::InvalidToken { span: token.span };
        }
        ParseError::UnexpectedToken {
            found: token.kind.display_name(),
            expected,
            context,
            span: token.span,
        }
    }

    /// Skip newline tokens.
    pub fn skip_newlines(&mut self) {
        while matches!(self.current_kind(), TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skip statement terminators (newlines and semicolons).
    pub fn skip_terminators(&mut self) {
        while self.current_kind().is_terminator() {
            self.advance();
        }
    }
}
