use crate::ir::module::{Block, Function, IrModule};
use crate::ir::op::{BinaryOp, Instruction, Terminator};
use crate::ir::value::{IrType, LocalId, Value};

/// A per-function lowering helper that provides the SSA local allocator and
/// the block currently receiving instructions. After lowering a function,
/// it is finalized into the parent `IrModule`.
pub struct FunctionBuilder {
    name: String,
    return_ty: IrType,
    next_local: usize,
    blocks: Vec<Block>,
}

impl FunctionBuilder {
    /// Start a function whose first block is named `entry_block`.
    pub fn new(name: &str, return_ty: IrType, entry_block: &str) -> Self {
        FunctionBuilder {
            name: name.to_string(),
            return_ty,
            next_local: 0,
            blocks: vec![Block::new(entry_block)],
        }
    }

    pub fn alloc_local(&mut self) -> LocalId {
        let id = LocalId(self.next_local);
        self.next_local = self.next_local.wrapping_add(1);
        id
    }

    /// Append `dest = op lhs, rhs` to the current block and return `dest`.
    pub fn emit_binary(&mut self, op: BinaryOp, lhs: Value, rhs: Value) -> Value {
        let dest = self.alloc_local();
        let ty = self.return_ty;
        self.current_block_mut().instructions.push(Instruction { dest, op, ty, lhs, rhs });
        Value::Local(dest)
    }

    /// Close the current block with a return of `value`.
    pub fn ret(&mut self, value: Value) {
        let ty = self.return_ty;
        self.current_block_mut().terminator = Some(Terminator::Ret { ty, value });
    }

    pub fn current_len(&self) -> usize {
        self.blocks.last().map(|b| b.instructions.len()).unwrap_or(0)
    }

    fn current_block_mut(&mut self) -> &mut Block {
        // `new` always creates the entry block and blocks are never removed.
        let last = self.blocks.len() - 1;
        &mut self.blocks[last]
    }

    /// Finalize this function into the provided module.
    pub fn finalize_into(self, module: &mut IrModule) {
        module.add_function(Function {
            name: self.name,
            return_ty: self.return_ty,
            blocks: self.blocks,
        });
    }
}
