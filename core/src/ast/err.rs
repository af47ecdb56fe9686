use crate::error::{Level, TamagoErrorExt};
use crate::lexer::{Token, TokenKind};
use crate::location::{Location, Span};

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl SyntaxError {
    pub fn new(message: String, issuer: String, location: Option<Location>, span: Option<Span>) -> Self {
        SyntaxError {
            level: Level::Error,
            message,
            issuer,
            location,
            span,
        }
    }

    /// An expression started with a token that has no prefix rule.
    pub fn no_prefix_rule(kind: TokenKind, at: &Token) -> Self {
        SyntaxError::new(
            format!("no prefix parse function for {} found", kind),
            "tamago.ast.expr.parse_expression".into(),
            Some(at.span.start),
            Some(at.span),
        )
    }

    /// A digit run that does not fit a 64-bit signed integer.
    pub fn invalid_integer(at: &Token) -> Self {
        SyntaxError::new(
            format!("could not parse {:?} as integer", at.literal),
            "tamago.ast.expr.parse_integer_literal".into(),
            Some(at.span.start),
            Some(at.span),
        )
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SyntaxError {}

impl TamagoErrorExt for SyntaxError {
    fn level(&self) -> Level {
        self.level
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn issuer(&self) -> String {
        self.issuer.clone()
    }

    fn span(&self) -> Option<Span> {
        self.span
    }

    fn location(&self) -> Option<Location> {
        self.location
    }
}
