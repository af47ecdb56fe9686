use crate::error::{Level, TamagoErrorExt};
use crate::location::{Location, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LowerErrorKind {
    /// An infix node carried a symbol with no matching instruction.
    InvalidOperator(String),
    /// The program had no statement whose value could be returned.
    EmptyProgram,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LowerError {
    kind: LowerErrorKind,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl LowerError {
    pub fn invalid_operator(symbol: &str, span: Option<Span>) -> Self {
        LowerError {
            kind: LowerErrorKind::InvalidOperator(symbol.to_string()),
            issuer: "tamago.ir.lower.lower_expr".into(),
            location: span.map(|s| s.start),
            span,
        }
    }

    pub fn empty_program() -> Self {
        LowerError {
            kind: LowerErrorKind::EmptyProgram,
            issuer: "tamago.ir.lower.lower_program".into(),
            location: None,
            span: None,
        }
    }

    pub fn kind(&self) -> &LowerErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for LowerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            LowerErrorKind::InvalidOperator(symbol) => write!(f, "invalid operator {}", symbol),
            LowerErrorKind::EmptyProgram => write!(f, "empty program"),
        }
    }
}

impl std::error::Error for LowerError {}

impl TamagoErrorExt for LowerError {
    fn level(&self) -> Level {
        Level::Error
    }

    fn message(&self) -> String {
        self.to_string()
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
