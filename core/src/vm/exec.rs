//! file: core/src/vm/exec.rs
//! description: straight-line executor for lowered functions.
//!
//! Runs the entry block of a `Function` against a `Frame` holding the values
//! of its SSA locals. Arithmetic wraps on overflow like the machine integers
//! the IR describes; signed division traps instead of wrapping.
//!
use std::collections::HashMap;

use log::trace;

use super::err::RuntimeError;
use crate::ir::module::Function;
use crate::ir::op::{BinaryOp, Instruction, Terminator};
use crate::ir::value::{LocalId, Value};

#[derive(Debug, Default)]
pub struct Frame {
    pub locals: HashMap<LocalId, i64>,
}

impl Frame {
    pub fn new() -> Self {
        Frame { locals: HashMap::new() }
    }

    pub fn read(&self, value: &Value) -> Result<i64, RuntimeError> {
        match value {
            Value::Const(v) => Ok(*v),
            Value::Local(id) => self.locals.get(id).copied().ok_or(RuntimeError::UndefinedLocal(*id)),
        }
    }
}

pub(crate) fn apply_binop(op: BinaryOp, a: i64, b: i64) -> Result<i64, RuntimeError> {
    match op {
        BinaryOp::Add => Ok(a.wrapping_add(b)),
        BinaryOp::Sub => Ok(a.wrapping_sub(b)),
        BinaryOp::Mul => Ok(a.wrapping_mul(b)),
        BinaryOp::SDiv => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            a.checked_div(b).ok_or(RuntimeError::DivisionOverflow)
        }
    }
}

pub(crate) fn dispatch_instruction(frame: &mut Frame, inst: &Instruction) -> Result<(), RuntimeError> {
    let lhs = frame.read(&inst.lhs)?;
    let rhs = frame.read(&inst.rhs)?;
    let result = apply_binop(inst.op, lhs, rhs)?;
    trace!("vm: {} -> {}", inst, result);
    frame.locals.insert(inst.dest, result);
    Ok(())
}

pub fn run_function(func: &Function) -> Result<i64, RuntimeError> {
    let Some(entry) = func.entry_block() else {
        return Err(RuntimeError::MissingTerminator(format!("@{}", func.name)));
    };

    let mut frame = Frame::new();
    for inst in &entry.instructions {
        dispatch_instruction(&mut frame, inst)?;
    }

    match &entry.terminator {
        Some(Terminator::Ret { value, .. }) => frame.read(value),
        None => Err(RuntimeError::MissingTerminator(entry.name.clone())),
    }
}
