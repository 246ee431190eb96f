//! Token types produced by the lexer.

use super::Span;
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for testing/generated code.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds.
///
/// Float literals store bits as u64 so the enum can derive `Eq`/`Hash`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal: `42`, `1_000`
    Int(i64),
    /// Float literal: `3.14` (stored as bits)
    Float(u64),
    /// Single-quoted string, taken verbatim apart from `\'` and `\\`
    String(String),
    /// Double-quoted string with escapes cooked
    InterpolatedString(String),
    /// Symbol literal `:name`, without the colon
    Symbol(String),
    /// Global variable `$name`, without the dollar sign
    GlobalVar(String),
    /// Lowercase identifier, possibly ending in `?` or `!`
    Ident(String),
    /// Capitalized identifier
    Constant(String),

    Def,
    If,
    Elsif,
    Else,
    End,
    Begin,
    Rescue,
    Class,
    Return,
    Then,
    True,
    False,
    /// `__FILE__`
    FileConst,

    LParen,
    RParen,
    Comma,
    Dot,
    Eq,
    /// `<<`
    Shl,
    /// `<`
    Lt,
    Semicolon,
    Newline,

    /// Unrecognized input
    Error,
    Eof,
}

impl TokenKind {
    /// Build a float token from its value.
    #[inline]
    pub fn float(value: f64) -> Self {
        TokenKind::Float(value.to_bits())
    }

    /// Whether this token ends a statement.
    #[inline]
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Semicolon)
    }

    /// Human-readable description used in parse errors.
    pub fn display_name(&self) -> String {
        match self {
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::Float(bits) => format!("float `{}`", f64::from_bits(*bits)),
            TokenKind::String(s) => format!("string '{s}'"),
            TokenKind::InterpolatedString(s) => format!("string \"{s}\""),
            TokenKind::Symbol(s) => format!("symbol `:{s}`"),
            TokenKind::GlobalVar(s) => format!("global `${s}`"),
            TokenKind::Ident(s) => format!("identifier `{s}`"),
            TokenKind::Constant(s) => format!("constant `{s}`"),
            TokenKind::Def => "`def`".into(),
            TokenKind::If => "`if`".into(),
            TokenKind::Elsif => "`elsif`".into(),
            TokenKind::Else => "`else`".into(),
            TokenKind::End => "`end`".into(),
            TokenKind::Begin => "`begin`".into(),
            TokenKind::Rescue => "`rescue`".into(),
            TokenKind::Class => "`class`".into(),
            TokenKind::Return => "`return`".into(),
            TokenKind::Then => "`then`".into(),
            TokenKind::True => "`true`".into(),
            TokenKind::False => "`false`".into(),
            TokenKind::FileConst => "`__FILE__`".into(),
            TokenKind::LParen => "`(`".into(),
            TokenKind::RParen => "`)`".into(),
            TokenKind::Comma => "`,`".into(),
            TokenKind::Dot => "`.`".into(),
            TokenKind::Eq => "`=`".into(),
            TokenKind::Shl => "`<<`".into(),
            TokenKind::Lt => "`<`".into(),
            TokenKind::Semicolon => "`;`".into(),
            TokenKind::Newline => "end of line".into(),
            TokenKind::Error => "unrecognized input".into(),
            TokenKind::Eof => "end of input".into(),
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "Int({n})"),
            TokenKind::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            TokenKind::String(s) => write!(f, "String({s:?})"),
            TokenKind::InterpolatedString(s) => write!(f, "InterpolatedString({s:?})"),
            TokenKind::Symbol(s) => write!(f, "Symbol({s})"),
            TokenKind::GlobalVar(s) => write!(f, "GlobalVar({s})"),
            TokenKind::Ident(s) => write!(f, "Ident({s})"),
            TokenKind::Constant(s) => write!(f, "Constant({s})"),
            other => f.write_str(other.display_name().trim_matches('`')),
        }
    }
}

/// A list of tokens, always terminated by `Eof` once produced by the lexer.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Add a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds only, mostly useful in tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
