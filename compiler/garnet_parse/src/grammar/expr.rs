//! Expression parsing.
//!
//! Precedence, lowest first: assignment, `<<`, postfix `.name(args)`,
//! primary. Method calls without parentheses (`puts "hi"`) take the rest
//! of the line as comma-separated arguments.

use garnet_ir::{Assignment, CallExpression, Node, Nodes, TokenKind};
use garnet_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input cannot
    /// overflow the native stack.
    pub(crate) fn parse_expr(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Node, ParseError> {
        let start = self.current_span();
        let left = self.parse_shift()?;

        if self.eat(&TokenKind::Eq) {
            self.skip_newlines();
            match left {
                Node::BareReference(_) | Node::GlobalVariable(_) => {
                    let rhs = self.parse_expr()?;
                    return Ok(Node::Assignment(Assignment {
                        lhs: Box::new(left),
                        rhs: Box::new(rhs),
                    }));
                }
                other => {
                    return Err(ParseError::InvalidAssignmentTarget {
                        target: other.to_string(),
                        span: start,
                    });
                }
            }
        }

        Ok(left)
    }

    /// `a << b << c` is `(a << b) << c`, each a call of `<<` on the left side.
    fn parse_shift(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_postfix()?;

        while self.eat(&TokenKind::Shl) {
            self.skip_newlines();
            let right = self.parse_postfix()?;
            left = Node::CallExpression(CallExpression::on(left, "<<", vec![right]));
        }

        Ok(left)
    }

    /// Method calls chained with `.`.
    fn parse_postfix(&mut self) -> Result<Node, ParseError> {
        let mut node = self.parse_primary()?;

        while self.check(&TokenKind::Dot) {
            self.advance();
            self.skip_newlines();
            let name = self.parse_method_name()?;
            let args = self.parse_call_args()?.unwrap_or_default();
            node = Node::CallExpression(CallExpression::on(node, name, args));
        }

        Ok(node)
    }

    /// Name after a `.`; a few keywords are valid method names there.
    fn parse_method_name(&mut self) -> Result<String, ParseError> {
        let name = match self.current_kind() {
            TokenKind::Ident(name) | TokenKind::Constant(name) => name.clone(),
            TokenKind::Class => "class".to_string(),
            TokenKind::Begin => "begin".to_string(),
            TokenKind::End => "end".to_string(),
            TokenKind::Then => "then".to_string(),
            _ => return Err(self.unexpected("a method name", ErrorContext::Expression)),
        };
        self.advance();
        Ok(name)
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let node = match self.current_kind() {
            TokenKind::Int(n) => Node::ConstantInt(*n),
            TokenKind::Float(bits) => Node::ConstantFloat(f64::from_bits(*bits)),
            TokenKind::String(s) => Node::SimpleString(s.clone()),
            TokenKind::InterpolatedString(s) => Node::InterpolatedString(s.clone()),
            TokenKind::Symbol(name) => Node::Symbol(name.clone()),
            TokenKind::GlobalVar(name) => Node::GlobalVariable(name.clone()),
            TokenKind::True => Node::Boolean(true),
            TokenKind::False => Node::Boolean(false),
            TokenKind::FileConst => Node::FileNameConstReference,

            TokenKind::Ident(name) => {
                self.advance();
                return Ok(match self.parse_call_args()? {
                    Some(args) => Node::CallExpression(CallExpression::implicit(name.clone(), args)),
                    None => Node::bare(name.clone()),
                });
            }
            TokenKind::Constant(name) => {
                self.advance();
                // `Integer("3")` is a call; a bare `Integer` is a reference.
                if self.check(&TokenKind::LParen) {
                    let args = self.parse_paren_args()?;
                    return Ok(Node::CallExpression(CallExpression::implicit(
                        name.clone(),
                        args,
                    )));
                }
                return Ok(Node::bare(name.clone()));
            }

            TokenKind::Def => return self.parse_def(),
            TokenKind::If => return self.parse_if(),
            TokenKind::Begin => return self.parse_begin(),
            TokenKind::Class => return self.parse_class(),
            TokenKind::Return => return self.parse_return(),

            TokenKind::LParen => {
                self.advance();
                self.skip_newlines();
                let inner = self.parse_expr()?;
                self.skip_newlines();
                self.expect(&TokenKind::RParen, "`)`", ErrorContext::Expression)?;
                return Ok(inner);
            }

            _ => return Err(self.unexpected("an expression", ErrorContext::Expression)),
        };

        self.advance();
        Ok(node)
    }

    /// Arguments after a method name: `(a, b)`, `a, b` on the same line, or none.
    fn parse_call_args(&mut self) -> Result<Option<Nodes>, ParseError> {
        if self.check(&TokenKind::LParen) {
            return self.parse_paren_args().map(Some);
        }
        if self.starts_command_arg() {
            return self.parse_command_args().map(Some);
        }
        Ok(None)
    }

    /// Whether the current token can begin an unparenthesized argument.
    fn starts_command_arg(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Int(_)
                | TokenKind::Float(_)
                | TokenKind::String(_)
                | TokenKind::InterpolatedString(_)
                | TokenKind::Symbol(_)
                | TokenKind::GlobalVar(_)
                | TokenKind::Ident(_)
                | TokenKind::Constant(_)
                | TokenKind::True
                | TokenKind::False
                | TokenKind::FileConst
        )
    }

    fn parse_paren_args(&mut self) -> Result<Nodes, ParseError> {
        self.expect(&TokenKind::LParen, "`(`", ErrorContext::Arguments)?;
        self.skip_newlines();

        let mut args = Vec::new();
        while !self.check(&TokenKind::RParen) {
            args.push(self.parse_expr()?);
            self.skip_newlines();
            if !self.eat(&TokenKind::Comma) {
                break;
            }
            self.skip_newlines();
        }

        self.expect(&TokenKind::RParen, "`,` or `)`", ErrorContext::Arguments)?;
        Ok(args)
    }

    fn parse_command_args(&mut self) -> Result<Nodes, ParseError> {
        let mut args = vec![self.parse_expr()?];
        while self.eat(&TokenKind::Comma) {
            self.skip_newlines();
            args.push(self.parse_expr()?);
        }
        Ok(args)
    }
}
