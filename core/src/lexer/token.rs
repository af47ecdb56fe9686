//! file: core/src/lexer/token.rs
//! description: token kinds and the immutable `Token` value.
//!
use serde::Serialize;

use crate::location::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Eof,
    Int,
    Ident,

    Plus,     // +
    Minus,    // -
    Asterisk, // *
    Slash,    // /

    Semicolon, // ;
    Declare,   // :=
}

impl TokenKind {
    /// Kind for a single-byte token, if `ch` starts one.
    pub fn from_byte(ch: u8) -> Option<TokenKind> {
        match ch {
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'*' => Some(TokenKind::Asterisk),
            b'/' => Some(TokenKind::Slash),
            b';' => Some(TokenKind::Semicolon),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Int => "INT",
            TokenKind::Ident => "IDENT",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Semicolon => ";",
            TokenKind::Declare => ":=",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token; empty for `Eof`.
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token { kind, literal: literal.into(), span }
    }

    pub fn eof(span: Span) -> Self {
        Token { kind: TokenKind::Eof, literal: String::new(), span }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Int | TokenKind::Ident => write!(f, "{}({})", self.kind, self.literal),
            _ => write!(f, "'{}'", self.literal),
        }
    }
}
