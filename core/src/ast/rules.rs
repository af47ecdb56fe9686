//! file: core/src/ast/rules.rs
//! description: binding powers and the prefix/infix rule tables.
//!
//! Both tables are plain `match`es over `TokenKind`. A kind without an entry
//! has no rule, and the parser reports that instead of guessing.
//!
use super::kind::InfixOperator;
use crate::lexer::TokenKind;

/// Binding power of an operator, lowest first. Only `Sum` and `Product` are
/// bound to tokens today; the other levels are reserved for assignment,
/// comparison, unary operators, calls and indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    Assign,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

impl Precedence {
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::Eof
            | TokenKind::Int
            | TokenKind::Ident
            | TokenKind::Semicolon
            | TokenKind::Declare => Precedence::Lowest,
        }
    }
}

/// Rules that can start an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    IntegerLiteral,
}

/// Rules that continue an expression given its left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixRule {
    Binary(InfixOperator),
}

pub fn prefix_rule(kind: TokenKind) -> Option<PrefixRule> {
    match kind {
        TokenKind::Int => Some(PrefixRule::IntegerLiteral),
        _ => None,
    }
}

pub fn infix_rule(kind: TokenKind) -> Option<InfixRule> {
    InfixOperator::from_token_kind(kind).map(InfixRule::Binary)
}
