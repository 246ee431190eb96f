//! Recursive descent parser for Garnet.
//!
//! Produces an owned `Vec<Node>` for a program unit. The first syntax error
//! aborts the parse; there is no recovery.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};

use garnet_ir::{Nodes, Span, Token, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    // Cursor delegation.

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(
        &mut self,
        kind: &TokenKind,
        expected: &'static str,
        context: ErrorContext,
    ) -> Result<Span, ParseError> {
        self.cursor.expect(kind, expected, context)
    }

    #[inline]
    fn unexpected(&self, expected: &'static str, context: ErrorContext) -> ParseError {
        self.cursor.unexpected(expected, context)
    }

    #[inline]
    fn skip_newlines(&mut self) {
        self.cursor.skip_newlines();
    }

    #[inline]
    fn skip_terminators(&mut self) {
        self.cursor.skip_terminators();
    }

    /// Parse a whole program unit.
    pub fn parse_program(mut self) -> Result<Nodes, ParseError> {
        let nodes = self.parse_stmts(ErrorContext::Program)?;
        if self.cursor.is_at_end() {
            Ok(nodes)
        } else {
            Err(self.unexpected("a statement", ErrorContext::Program))
        }
    }
}

/// Parse a token list into a statement sequence.
pub fn parse(tokens: &TokenList) -> Result<Nodes, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Lex and parse source text.
pub fn parse_source(source: &str) -> Result<Nodes, ParseError> {
    let tokens = garnet_lexer::lex(source);
    parse(&tokens)
}
