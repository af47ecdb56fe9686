use std::fmt;

use serde::Serialize;

use crate::lexer::Token;
use crate::location::Span;

/// Capabilities shared by every AST node: it can render itself as text
/// (`Display`) and it knows which source token it came from.
pub trait Node: fmt::Display {
    fn token_literal(&self) -> &str;
    fn span(&self) -> Option<Span>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfixExpression {
    pub token: Token,
    /// Operator symbol as written in the source, e.g. `"+"`.
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Expression {
    Integer(IntegerLiteral),
    Infix(InfixExpression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    /// First token of the statement.
    pub token: Token,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Program {
    pub statements: Vec<ExpressionStatement>,
}

impl InfixExpression {
    pub fn new(token: Token, operator: impl Into<String>, left: Expression, right: Expression) -> Self {
        InfixExpression {
            token,
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Program {
    pub fn new() -> Self {
        Program { statements: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn span(&self) -> Option<Span> {
        Some(self.token.span)
    }
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn span(&self) -> Option<Span> {
        match (self.left.span(), self.right.span()) {
            (Some(l), Some(r)) => Some(l.merge(&r)),
            _ => Some(self.token.span),
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Integer(e) => e.token_literal(),
            Expression::Infix(e) => e.token_literal(),
        }
    }
    fn span(&self) -> Option<Span> {
        match self {
            Expression::Integer(e) => e.span(),
            Expression::Infix(e) => e.span(),
        }
    }
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn span(&self) -> Option<Span> {
        self.expression.span()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }
    fn span(&self) -> Option<Span> {
        let first = self.statements.first()?.span()?;
        let last = self.statements.last()?.span()?;
        Some(first.merge(&last))
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Integer(e) => write!(f, "{}", e),
            Expression::Infix(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
