pub mod err;
pub mod lower;
pub mod module;
pub mod op;
pub mod value;

pub use self::err::{LowerError, LowerErrorKind};
pub use self::module::IrModule;

pub fn lower_ast_to_ir(program: &crate::ast::Program) -> Result<IrModule, LowerError> {
    lower::lower_program(program)
}
