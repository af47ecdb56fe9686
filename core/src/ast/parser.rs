//! file: core/src/ast/parser.rs
//! description: parser state shared by the expression and statement rules.
//!
//! The parser keeps the current token and one token of lookahead, pulling
//! fresh tokens from the `Tokenizer` as it advances. Errors are collected
//! rather than returned; callers must check `errors()` before trusting the
//! produced `Program`.
//!
use log::debug;

use super::err::SyntaxError;
use super::rules::Precedence;
use crate::lexer::{Token, TokenKind, Tokenizer};

pub struct Parser<'src> {
    tokenizer: Tokenizer<'src>,
    errors: Vec<SyntaxError>,
    pub(crate) current: Token,
    pub(crate) peek: Token,
}

impl<'src> Parser<'src> {
    pub fn new(mut tokenizer: Tokenizer<'src>) -> Self {
        let current = tokenizer.next_token();
        let peek = tokenizer.next_token();
        Parser {
            tokenizer,
            errors: Vec::new(),
            current,
            peek,
        }
    }

    /// Errors recorded so far, in source order.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    pub(crate) fn advance(&mut self) {
        let next = self.tokenizer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    pub(crate) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(crate) fn record(&mut self, error: SyntaxError) {
        debug!("parser: {} at {}", error, self.current.span.start);
        self.errors.push(error);
    }
}
