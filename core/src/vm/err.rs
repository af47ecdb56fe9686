use crate::error::{Level, TamagoErrorExt};
use crate::ir::value::LocalId;
use crate::location::{Location, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    DivisionByZero,
    /// `i64::MIN / -1`, the one signed division that does not fit.
    DivisionOverflow,
    MissingFunction(String),
    MissingTerminator(String),
    UndefinedLocal(LocalId),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::DivisionOverflow => write!(f, "integer overflow in division"),
            RuntimeError::MissingFunction(name) => write!(f, "no function named @{} in module", name),
            RuntimeError::MissingTerminator(block) => write!(f, "block {} has no terminator", block),
            RuntimeError::UndefinedLocal(id) => write!(f, "use of undefined local {}", id),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl TamagoErrorExt for RuntimeError {
    fn level(&self) -> Level {
        match self {
            RuntimeError::DivisionByZero | RuntimeError::DivisionOverflow => Level::Error,
            _ => Level::Critical,
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn issuer(&self) -> String {
        "tamago.vm.exec".to_string()
    }

    fn span(&self) -> Option<Span> {
        None
    }

    fn location(&self) -> Option<Location> {
        None
    }
}
