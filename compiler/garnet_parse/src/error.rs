//! Parse error types.
//!
//! Errors carry the offending span and an `ErrorContext` for
//! "while parsing X" messages.

use garnet_ir::Span;

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// Top-level statement sequence.
    Program,
    /// Parsing an expression (generic).
    Expression,
    /// Parsing a method call's argument list.
    Arguments,
    /// Parsing a `def ... end` method definition.
    MethodDefinition,
    /// Parsing an `if`/`elsif`/`else` expression.
    IfExpression,
    /// Parsing a `begin ... rescue ... end` block.
    BeginBlock,
    /// Parsing a `class ... end` definition.
    ClassDefinition,
}

impl ErrorContext {
    /// Get a human-readable description of this context.
    ///
    /// Returns a phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Program => "a program",
            Self::Expression => "an expression",
            Self::Arguments => "method arguments",
            Self::MethodDefinition => "a method definition",
            Self::IfExpression => "an if expression",
            Self::BeginBlock => "a begin block",
            Self::ClassDefinition => "a class definition",
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A parse failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A token appeared where the grammar does not allow it.
    #[error("unexpected {found} while parsing {context}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        context: ErrorContext,
        span: Span,
    },
    /// The lexer could not recognize the input at this span.
    #[error("unrecognized input")]
    InvalidToken { span: Span },
    /// The left-hand side of `=` is not assignable.
    #[error("cannot assign to `{target}`")]
    InvalidAssignmentTarget { target: String, span: Span },
}

impl ParseError {
    /// Location of the failure.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::InvalidToken { span }
            | ParseError::InvalidAssignmentTarget { span, .. } => *span,
        }
    }
}
