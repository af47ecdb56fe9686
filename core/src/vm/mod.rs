pub mod err;
pub mod exec;

pub use err::RuntimeError;

use crate::ir::IrModule;
use crate::ir::lower::ENTRY_FUNCTION;
use log::debug;

/// Execute the module's `main` and return the value it returns.
pub fn run_module(module: &IrModule) -> Result<i64, RuntimeError> {
    let main = module
        .get_function(ENTRY_FUNCTION)
        .ok_or_else(|| RuntimeError::MissingFunction(ENTRY_FUNCTION.to_string()))?;
    let result = exec::run_function(main)?;
    debug!("vm: @{} returned {}", ENTRY_FUNCTION, result);
    Ok(result)
}
