//! Garnet IR - tokens and syntax-tree types.
//!
//! This crate holds the data shared by the front end and the evaluator:
//! - `Span` for source locations
//! - `Token`, `TokenKind` and `TokenList` produced by `garnet_lexer`
//! - `Node` and friends, the fixed syntax-tree vocabulary produced by
//!   `garnet_parse` and consumed by `garnet_eval`
//!
//! The evaluator depends only on this vocabulary, never on how it was
//! produced.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{Assignment, Begin, CallExpression, ClassDecl, FuncDecl, IfBlock, Node, Nodes, Rescue};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
