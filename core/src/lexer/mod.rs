//! file: core/src/lexer/mod.rs
//! description: byte-oriented tokenizer.
//!
//! `Tokenizer` turns one line of source text into tokens on demand. It never
//! fails: bytes that cannot start a token are skipped, and once the input is
//! exhausted every call yields an `Eof` token.
//!
pub mod token;

pub use token::{Token, TokenKind};

use crate::location::{Location, Span};
use log::{debug, trace};

pub struct Tokenizer<'src> {
    source: &'src str,
    position: usize,
    line: usize,
    /// Set once the iterator has handed out its `Eof`.
    exhausted: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_line(source, 1)
    }

    /// Tokenizer whose spans report `line` as their line number.
    pub fn with_line(source: &'src str, line: usize) -> Self {
        Tokenizer { source, position: 0, line, exhausted: false }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let start = self.position;
            let Some(ch) = self.current() else {
                return Token::eof(self.span(start, start));
            };

            if let Some(kind) = TokenKind::from_byte(ch) {
                self.position += 1;
                return self.make(kind, start);
            }

            if ch == b':' && self.peek() == Some(b'=') {
                self.position += 2;
                return self.make(TokenKind::Declare, start);
            }

            if ch.is_ascii_digit() {
                self.consume_while(|b| b.is_ascii_digit());
                return self.make(TokenKind::Int, start);
            }

            if is_ident_start(ch) {
                self.consume_while(|b| is_ident_start(b) || b.is_ascii_digit());
                return self.make(TokenKind::Ident, start);
            }

            debug!("tokenizer: skipping byte 0x{:02x} at {}:{}", ch, self.line, start + 1);
            self.position += 1;
        }
    }

    fn make(&self, kind: TokenKind, start: usize) -> Token {
        let token = Token::new(kind, &self.source[start..self.position], self.span(start, self.position));
        trace!("tokenizer: {} at {}", token, token.span.start);
        token
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(Location::new(self.line, start + 1), Location::new(self.line, end + 1))
    }

    fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.position).copied()
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.position + 1).copied()
    }

    fn consume_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.position += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        self.consume_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Yields every token up to and including the first `Eof`.
impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.exhausted = true;
        }
        Some(token)
    }
}
