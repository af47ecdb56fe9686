use super::err::SyntaxError;
use super::node::{Expression, InfixExpression, IntegerLiteral};
use super::parser::Parser;
use super::rules::{self, InfixRule, Precedence, PrefixRule};
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// Precedence climbing. Returns `None` when any part of the expression
    /// failed; the reason has already been recorded.
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> Option<Expression> {
        let Some(prefix) = rules::prefix_rule(self.current.kind) else {
            let error = SyntaxError::no_prefix_rule(self.current.kind, &self.current);
            self.record(error);
            return None;
        };
        let mut left = self.parse_prefix(prefix)?;

        // Operators of equal precedence stop the inner call, so chains group
        // to the left.
        while !self.peek_is(TokenKind::Semicolon) && min < self.peek_precedence() {
            let Some(infix) = rules::infix_rule(self.peek.kind) else {
                return Some(left);
            };
            self.advance();
            left = self.parse_infix(infix, left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self, rule: PrefixRule) -> Option<Expression> {
        match rule {
            PrefixRule::IntegerLiteral => self.parse_integer_literal(),
        }
    }

    fn parse_infix(&mut self, rule: InfixRule, left: Expression) -> Option<Expression> {
        match rule {
            InfixRule::Binary(op) => {
                let token = self.current.clone();
                let precedence = self.current_precedence();
                self.advance();
                let right = self.parse_expression(precedence)?;
                Some(Expression::Infix(InfixExpression::new(token, op.symbol(), left, right)))
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match parse_int_literal(&self.current.literal) {
            Ok(value) => Some(Expression::Integer(IntegerLiteral {
                token: self.current.clone(),
                value,
            })),
            Err(_) => {
                let error = SyntaxError::invalid_integer(&self.current);
                self.record(error);
                None
            }
        }
    }
}

/// Digit runs with a leading `0` are octal (`010` is 8, `09` is rejected);
/// anything else is decimal.
fn parse_int_literal(literal: &str) -> Result<i64, std::num::ParseIntError> {
    match literal.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => i64::from_str_radix(rest, 8),
        _ => literal.parse::<i64>(),
    }
}
