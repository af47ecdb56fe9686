//! file: core/src/ast/kind.rs
//! description: operator enum shared by the parser and the lowerer.
//!
use serde::Serialize;

use crate::lexer::TokenKind;

/// Binary operators the grammar can build. `InfixExpression` stores the
/// symbol as text; this enum is the checked form of that symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InfixOperator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl InfixOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(InfixOperator::Add),
            "-" => Some(InfixOperator::Sub),
            "*" => Some(InfixOperator::Mul),
            "/" => Some(InfixOperator::Div),
            _ => None,
        }
    }

    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(InfixOperator::Add),
            TokenKind::Minus => Some(InfixOperator::Sub),
            TokenKind::Asterisk => Some(InfixOperator::Mul),
            TokenKind::Slash => Some(InfixOperator::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            InfixOperator::Add => "+",
            InfixOperator::Sub => "-",
            InfixOperator::Mul => "*",
            InfixOperator::Div => "/",
        }
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
