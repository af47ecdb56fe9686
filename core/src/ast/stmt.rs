use log::trace;

use super::node::{ExpressionStatement, Program};
use super::parser::Parser;
use super::rules::Precedence;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// Parse statements until end of input. Every iteration moves past the
    /// statement it started on, so any finite input terminates; statements
    /// that failed to parse are left out of the program.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                trace!("parser: statement {}", stmt);
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }

    /// One expression, optionally followed by `;`.
    fn parse_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(ExpressionStatement { token, expression: expression? })
    }
}
