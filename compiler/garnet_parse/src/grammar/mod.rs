//! Grammar Modules
//!
//! Each module extends `Parser` with methods for specific productions:
//!
//! - [`expr`]: assignment, `<<`, method calls and primary expressions
//! - [`block`]: keyword-delimited constructs (`def`, `if`, `begin`, `class`, `return`)
//!
//! Statement sequences live here since every block construct nests them.

mod block;
mod expr;

use garnet_ir::{Nodes, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Whether the current token closes the enclosing statement sequence.
    fn at_stmts_end(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::End | TokenKind::Else | TokenKind::Elsif | TokenKind::Rescue | TokenKind::Eof
        )
    }

    /// Parse statements separated by terminators, stopping before a closing keyword.
    ///
    /// The closing token itself is left for the caller.
    pub(crate) fn parse_stmts(&mut self, context: ErrorContext) -> Result<Nodes, ParseError> {
        let mut nodes = Vec::new();
        self.skip_terminators();

        while !self.at_stmts_end() {
            nodes.push(self.parse_expr()?);

            if self.current_kind().is_terminator() {
                self.skip_terminators();
            } else if !self.at_stmts_end() {
                return Err(self.unexpected("end of line or `;`", context));
            }
        }

        Ok(nodes)
    }
}
