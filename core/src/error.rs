use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_str = match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        };
        write!(f, "{}", level_str)
    }
}

/// Common surface of every error produced by the pipeline. Errors from
/// different stages can be collected as `Box<dyn TamagoErrorExt>` and turned
/// into reports without knowing their concrete type.
pub trait TamagoErrorExt {
    fn level(&self) -> Level;
    fn message(&self) -> String;
    fn issuer(&self) -> String;
    fn span(&self) -> Option<crate::location::Span>;
    fn location(&self) -> Option<crate::location::Location>;
}

impl fmt::Debug for dyn TamagoErrorExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc_str = match self.location() {
            Some(loc) => loc.to_string(),
            None => "unknown".to_string(),
        };
        let span_str = match self.span() {
            Some(span) => span.to_string(),
            None => "span:none".to_string(),
        };

        write!(
            f,
            "TAMAGO | {} | {} | {} | {} | {}",
            self.level(),
            loc_str,
            self.issuer(),
            span_str,
            self.message()
        )
    }
}

impl fmt::Display for dyn TamagoErrorExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Why a single compilation unit produced no IR. The two channels never mix:
/// a unit with parse errors is never handed to the lowerer.
#[derive(Debug, Clone)]
pub enum CompileError {
    Parse(Vec<crate::ast::SyntaxError>),
    Lower(crate::ir::LowerError),
}

impl CompileError {
    /// Flatten into boxed errors, in the order they were recorded.
    pub fn into_errors(self) -> Vec<Box<dyn TamagoErrorExt>> {
        match self {
            CompileError::Parse(errors) => errors
                .into_iter()
                .map(|e| Box::new(e) as Box<dyn TamagoErrorExt>)
                .collect(),
            CompileError::Lower(e) => vec![Box::new(e) as Box<dyn TamagoErrorExt>],
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Parse(errors) => {
                writeln!(f, "parse errors:")?;
                for e in errors {
                    writeln!(f, "\t{}", e)?;
                }
                Ok(())
            }
            CompileError::Lower(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CompileError {}
