pub mod function_builder;
pub mod lower_expr;
pub mod lower_stmt;

use log::debug;

use self::function_builder::FunctionBuilder;
use crate::ast::Program;
use crate::ir::err::LowerError;
use crate::ir::module::IrModule;
use crate::ir::value::IrType;

pub const ENTRY_FUNCTION: &str = "main";
pub const ENTRY_BLOCK: &str = "entry";

/// Lower a whole program into a module with a single `main` function.
///
/// Statements are lowered in source order and the value of the last one is
/// returned. Values of earlier statements are computed and then dropped, as
/// nothing in the grammar can observe them.
pub fn lower_program(program: &Program) -> Result<IrModule, LowerError> {
    let mut module = IrModule::new();
    let mut builder = FunctionBuilder::new(ENTRY_FUNCTION, IrType::I64, ENTRY_BLOCK);

    let mut last = None;
    for stmt in &program.statements {
        last = Some(lower_stmt::lower_statement(stmt, &mut builder)?);
    }

    let Some(ret) = last else {
        return Err(LowerError::empty_program());
    };
    builder.ret(ret);

    debug!(
        "lower: @{} with {} instruction(s) from {} statement(s)",
        ENTRY_FUNCTION,
        builder.current_len(),
        program.len()
    );
    builder.finalize_into(&mut module);
    Ok(module)
}
