//! file: core/src/ast/mod.rs
//! description: AST types and the Pratt parser that builds them.
//!
//! `Parser` consumes tokens from a `Tokenizer` and produces a `Program`.
//! The rule tables live in `rules`, expression parsing in `expr` and
//! statement parsing in `stmt`.
//!
pub mod err;
pub mod kind;
pub mod node;
pub mod parser;
pub mod rules;
mod expr;
mod stmt;

pub use crate::error::TamagoErrorExt;
pub use err::SyntaxError;
pub use kind::InfixOperator;
pub use node::{Expression, ExpressionStatement, InfixExpression, IntegerLiteral, Node, Program};
pub use parser::Parser;
pub use rules::Precedence;

use crate::lexer::Tokenizer;

/// Parse one line of source. `line` is only used for diagnostics.
pub fn generate_ast_from_source(source: &str, line: usize) -> Result<Program, Vec<SyntaxError>> {
    let mut parser = Parser::new(Tokenizer::with_line(source, line));
    let program = parser.parse_program();
    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}
