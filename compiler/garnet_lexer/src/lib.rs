//! Lexer for Garnet using logos.
//!
//! Produces a `TokenList` terminated by `Eof`. Unrecognized input becomes a
//! `TokenKind::Error` token; reporting it is the parser's job.

mod escape;

use garnet_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;

pub use escape::{cook_double_quoted, cook_single_quoted};

/// Raw token from logos (before conversion).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
enum RawToken {
    // === Comments (skip) ===
    #[regex(r"#[^\n]*")]
    LineComment,

    // === Line continuation ===
    #[regex(r"\\[ \t]*\r?\n")]
    LineContinuation,

    #[token("\n")]
    Newline,

    // === Keywords ===
    #[token("def")]
    Def,
    #[token("if")]
    If,
    #[token("elsif")]
    Elsif,
    #[token("else")]
    Else,
    #[token("end")]
    End,
    #[token("begin")]
    Begin,
    #[token("rescue")]
    Rescue,
    #[token("class")]
    Class,
    #[token("return")]
    Return,
    #[token("then")]
    Then,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("__FILE__")]
    FileConst,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("<<")]
    Shl,
    #[token("<")]
    Lt,
    #[token(";")]
    Semicolon,

    // === Literals ===
    #[regex(r"-?[0-9][0-9_]*", |lex| lex.slice().replace('_', "").parse::<i64>().ok())]
    Int(i64),

    #[regex(r"-?[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().replace('_', "").parse::<f64>().ok()
    })]
    Float(f64),

    #[regex(r"'([^'\\]|\\.)*'")]
    SingleQuoted,

    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,

    #[regex(r":[a-zA-Z_][a-zA-Z0-9_]*[?!]?")]
    Symbol,

    #[regex(r#"\$([a-zA-Z_][a-zA-Z0-9_]*|[:"0])"#)]
    GlobalVar,

    #[regex(r"[a-z_][a-zA-Z0-9_]*[?!]?")]
    Ident,

    #[regex(r"[A-Z][a-zA-Z0-9_]*")]
    Constant,
}

/// Lex source code into a `TokenList`.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(token_result) = lexer.next() {
        let span = Span::try_from_range(lexer.span()).unwrap_or_default();
        let slice = lexer.slice();

        match token_result {
            Ok(RawToken::LineComment | RawToken::LineContinuation) => {}
            Ok(raw) => result.push(Token::new(convert_token(raw, slice), span)),
            Err(()) => result.push(Token::new(TokenKind::Error, span)),
        }
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof)));

    result
}

/// Convert a raw token to a `TokenKind`, cooking literal text.
fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::float(f),
        RawToken::SingleQuoted => TokenKind::String(cook_single_quoted(&slice[1..slice.len() - 1])),
        RawToken::DoubleQuoted => {
            TokenKind::InterpolatedString(cook_double_quoted(&slice[1..slice.len() - 1]))
        }
        RawToken::Symbol => TokenKind::Symbol(slice[1..].to_string()),
        RawToken::GlobalVar => TokenKind::GlobalVar(slice[1..].to_string()),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),
        RawToken::Constant => TokenKind::Constant(slice.to_string()),

        RawToken::Newline => TokenKind::Newline,
        RawToken::Def => TokenKind::Def,
        RawToken::If => TokenKind::If,
        RawToken::Elsif => TokenKind::Elsif,
        RawToken::Else => TokenKind::Else,
        RawToken::End => TokenKind::End,
        RawToken::Begin => TokenKind::Begin,
        RawToken::Rescue => TokenKind::Rescue,
        RawToken::Class => TokenKind::Class,
        RawToken::Return => TokenKind::Return,
        RawToken::Then => TokenKind::Then,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::FileConst => TokenKind::FileConst,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Semicolon => TokenKind::Semicolon,

        // Trivia is filtered out by `lex` before conversion
        RawToken::LineComment | RawToken::LineContinuation => TokenKind::Error,
    }
}

#[cfg(test)]
mod tests;
