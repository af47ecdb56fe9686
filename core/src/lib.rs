//! Tamago turns one line of arithmetic source into an IR module whose `main`
//! function computes the value of the line.
//!
//! ```text
//! line → Tokenizer → Parser → Program → Lowerer → IrModule → text
//! ```
//!
//! Every line is its own compilation unit: nothing produced for one line is
//! visible while compiling the next.

pub mod ast;
pub mod error;
pub mod ir;
pub mod lexer;
pub mod location;
pub mod reports;
pub mod script;
pub mod vm;

pub use ast::generate_ast_from_source;
pub use error::{CompileError, Level, TamagoErrorExt};
pub use ir::{IrModule, lower_ast_to_ir};
pub use location::{Location, Span};
pub use script::Script;
pub use vm::run_module;

use log::debug;

pub fn generate_error_report<E: TamagoErrorExt + ?Sized>(error: &E) -> String {
    let level = error.level();
    let location = match error.location() {
        Some(loc) => loc.to_string(),
        None => "unknown location".to_string(),
    };
    let message = error.message();

    format!("TAMAGO | {} | {} | {}", level, location, message)
}

/// Compile a single line. Parse errors stop the unit before lowering.
pub fn compile_line(line: &str) -> Result<IrModule, CompileError> {
    compile_line_at(line, 1)
}

/// Like `compile_line`, reporting diagnostics against line number `line_no`.
pub fn compile_line_at(line: &str, line_no: usize) -> Result<IrModule, CompileError> {
    let program = generate_ast_from_source(line, line_no).map_err(CompileError::Parse)?;
    debug!("line {}: parsed {}", line_no, program);
    lower_ast_to_ir(&program).map_err(CompileError::Lower)
}

/// Compile every unit of a script, keeping going after failures.
pub fn compile_script(script: &Script) -> Vec<(usize, Result<IrModule, CompileError>)> {
    script
        .units()
        .map(|(line_no, line)| (line_no, compile_line_at(line, line_no)))
        .collect()
}
