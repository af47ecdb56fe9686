use super::function_builder::FunctionBuilder;
use super::lower_expr::lower_expr;
use crate::ast::ExpressionStatement;
use crate::ir::err::LowerError;
use crate::ir::value::Value;

/// Lower a statement and hand back the value it computes.
pub fn lower_statement(stmt: &ExpressionStatement, builder: &mut FunctionBuilder) -> Result<Value, LowerError> {
    lower_expr(&stmt.expression, builder)
}
