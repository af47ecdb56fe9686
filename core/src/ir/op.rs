use serde::Serialize;

use super::value::{IrType, LocalId, Value};
use crate::ast::InfixOperator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    SDiv,
}

impl BinaryOp {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::SDiv => "sdiv",
        }
    }
}

impl From<InfixOperator> for BinaryOp {
    fn from(op: InfixOperator) -> Self {
        match op {
            InfixOperator::Add => BinaryOp::Add,
            InfixOperator::Sub => BinaryOp::Sub,
            InfixOperator::Mul => BinaryOp::Mul,
            InfixOperator::Div => BinaryOp::SDiv,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub dest: LocalId,
    pub op: BinaryOp,
    pub ty: IrType,
    pub lhs: Value,
    pub rhs: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Terminator {
    Ret { ty: IrType, value: Value },
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {} {} {}, {}", self.dest, self.op.mnemonic(), self.ty, self.lhs, self.rhs)
    }
}

impl std::fmt::Display for Terminator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Terminator::Ret { ty, value } => write!(f, "ret {} {}", ty, value),
        }
    }
}
