//! file: core/src/ir/module.rs
//! description: IR containers and their textual form.
//!
//! An `IrModule` holds functions, a `Function` holds basic blocks, and a
//! `Block` holds a straight-line instruction list closed by a terminator.
//! `Display` on `IrModule` produces the text handed back to callers.
//!
use serde::Serialize;

use super::op::{Instruction, Terminator};
use super::value::IrType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub name: String,
    pub instructions: Vec<Instruction>,
    /// `None` only while the block is still being built.
    pub terminator: Option<Terminator>,
}

impl Block {
    pub fn new(name: &str) -> Self {
        Block { name: name.to_string(), instructions: Vec::new(), terminator: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub return_ty: IrType,
    pub blocks: Vec<Block>,
}

impl Function {
    pub fn entry_block(&self) -> Option<&Block> {
        self.blocks.first()
    }

    pub fn instruction_count(&self) -> usize {
        self.blocks.iter().map(|b| b.instructions.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IrModule {
    pub functions: Vec<Function>,
}

impl IrModule {
    pub fn new() -> Self {
        IrModule { functions: Vec::new() }
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for inst in &self.instructions {
            writeln!(f, "\t{}", inst)?;
        }
        if let Some(term) = &self.terminator {
            writeln!(f, "\t{}", term)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "define {} @{}() {{", self.return_ty, self.name)?;
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", block)?;
        }
        writeln!(f, "}}")
    }
}

impl std::fmt::Display for IrModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, func) in self.functions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", func)?;
        }
        Ok(())
    }
}
