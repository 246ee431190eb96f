//! Keyword-delimited constructs: `def`, `if`, `begin`, `class`, `return`.

use garnet_ir::{Begin, ClassDecl, FuncDecl, IfBlock, Node, Rescue, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

/// Class name a bare `rescue` clause matches.
const DEFAULT_RESCUE_CLASS: &str = "StandardError";

impl Parser<'_> {
    /// Consume an identifier (or constant) and return its text.
    fn expect_name(
        &mut self,
        expected: &'static str,
        context: ErrorContext,
    ) -> Result<String, ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) | TokenKind::Constant(name) => {
                self.advance();
                Ok(name.clone())
            }
            _ => Err(self.unexpected(expected, context)),
        }
    }

    fn expect_constant(
        &mut self,
        expected: &'static str,
        context: ErrorContext,
    ) -> Result<String, ParseError> {
        match self.current_kind() {
            TokenKind::Constant(name) => {
                self.advance();
                Ok(name.clone())
            }
            _ => Err(self.unexpected(expected, context)),
        }
    }

    fn expect_end(&mut self, context: ErrorContext) -> Result<(), ParseError> {
        self.expect(&TokenKind::End, "`end`", context).map(|_| ())
    }

    /// `def name(params) body end`
    #[tracing::instrument(level = "trace", skip(self))]
    pub(super) fn parse_def(&mut self) -> Result<Node, ParseError> {
        let context = ErrorContext::MethodDefinition;
        self.expect(&TokenKind::Def, "`def`", context)?;
        let name = self.expect_name("a method name", context)?;

        let mut params = Vec::new();
        if self.eat(&TokenKind::LParen) {
            self.skip_newlines();
            while !self.check(&TokenKind::RParen) {
                params.push(self.expect_name("a parameter name", context)?);
                self.skip_newlines();
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
                self.skip_newlines();
            }
            self.expect(&TokenKind::RParen, "`,` or `)`", context)?;
        }

        let body = self.parse_stmts(context)?;
        self.expect_end(context)?;

        Ok(Node::FuncDecl(FuncDecl { name, params, body }))
    }

    /// `if cond [then] body (elsif cond body)* [else body] end`
    ///
    /// `elsif` becomes a nested `IfBlock` in the else branch.
    #[tracing::instrument(level = "trace", skip(self))]
    pub(super) fn parse_if(&mut self) -> Result<Node, ParseError> {
        self.expect(&TokenKind::If, "`if`", ErrorContext::IfExpression)?;
        let node = self.parse_if_tail()?;
        self.expect_end(ErrorContext::IfExpression)?;
        Ok(node)
    }

    /// Everything after `if`/`elsif` up to (not including) the closing `end`.
    fn parse_if_tail(&mut self) -> Result<Node, ParseError> {
        let context = ErrorContext::IfExpression;
        let condition = self.parse_expr()?;
        self.eat(&TokenKind::Then);
        let body = self.parse_stmts(context)?;

        let else_body = if self.eat(&TokenKind::Elsif) {
            vec![self.parse_if_tail()?]
        } else if self.eat(&TokenKind::Else) {
            self.parse_stmts(context)?
        } else {
            Vec::new()
        };

        Ok(Node::IfBlock(IfBlock {
            condition: Box::new(condition),
            body,
            else_body,
        }))
    }

    /// `begin body (rescue [Class] body)* end`
    #[tracing::instrument(level = "trace", skip(self))]
    pub(super) fn parse_begin(&mut self) -> Result<Node, ParseError> {
        let context = ErrorContext::BeginBlock;
        self.expect(&TokenKind::Begin, "`begin`", context)?;
        let body = self.parse_stmts(context)?;

        let mut rescue = Vec::new();
        while self.eat(&TokenKind::Rescue) {
            let exception_class = if self.current_kind().is_terminator() || self.at_stmts_end() {
                DEFAULT_RESCUE_CLASS.to_string()
            } else {
                self.expect_constant("an exception class name", context)?
            };
            let body = self.parse_stmts(context)?;
            rescue.push(Rescue {
                exception_class,
                body,
            });
        }

        self.expect_end(context)?;
        Ok(Node::Begin(Begin { body, rescue }))
    }

    /// `class Name [< Super] body end`
    #[tracing::instrument(level = "trace", skip(self))]
    pub(super) fn parse_class(&mut self) -> Result<Node, ParseError> {
        let context = ErrorContext::ClassDefinition;
        self.expect(&TokenKind::Class, "`class`", context)?;
        let name = self.expect_constant("a class name", context)?;

        let superclass = if self.eat(&TokenKind::Lt) {
            Some(self.expect_constant("a superclass name", context)?)
        } else {
            None
        };

        let body = self.parse_stmts(context)?;
        self.expect_end(context)?;

        Ok(Node::ClassDecl(ClassDecl {
            name,
            superclass,
            body,
        }))
    }

    /// `return [value]`
    pub(super) fn parse_return(&mut self) -> Result<Node, ParseError> {
        self.expect(&TokenKind::Return, "`return`", ErrorContext::Expression)?;

        if self.current_kind().is_terminator() || self.at_stmts_end() {
            return Ok(Node::Return(None));
        }

        let value = self.parse_expr()?;
        Ok(Node::Return(Some(Box::new(value))))
    }
}
