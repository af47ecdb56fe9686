//! file: core/src/ir/lower/lower_expr.rs
//! description: expression lowering helpers.
//!
//! Lowers expression nodes into IR values using a `FunctionBuilder`.
//! Literals become inline constants; infix nodes lower both operands, left
//! first, and emit one arithmetic instruction.
//!
use super::function_builder::FunctionBuilder;
use crate::ast::{Expression, InfixExpression, InfixOperator, Node};
use crate::ir::err::LowerError;
use crate::ir::op::BinaryOp;
use crate::ir::value::Value;

pub fn lower_expr(expr: &Expression, builder: &mut FunctionBuilder) -> Result<Value, LowerError> {
    match expr {
        Expression::Integer(lit) => Ok(Value::Const(lit.value)),
        Expression::Infix(infix) => lower_infix_expr(infix, builder),
    }
}

fn lower_infix_expr(infix: &InfixExpression, builder: &mut FunctionBuilder) -> Result<Value, LowerError> {
    let left = lower_expr(&infix.left, builder)?;
    let right = lower_expr(&infix.right, builder)?;

    let op = InfixOperator::from_symbol(&infix.operator)
        .map(BinaryOp::from)
        .ok_or_else(|| LowerError::invalid_operator(&infix.operator, infix.span()))?;

    Ok(builder.emit_binary(op, left, right))
}
