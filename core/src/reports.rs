// Core module for reporting diagnostics produced while compiling a line.
// Any error implementing `TamagoErrorExt` can be turned into a `Report`,
// which renders as plain text, as console-styled text pointing at the
// offending columns, or as JSON.

use console::Style;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::error::{Level, TamagoErrorExt};
use crate::location::{Location, Span};

/// Optional stable error code for programmatic handling
/// Used to provide a machine-readable identifier for specific error types.
///
/// # Examples
/// ```
/// use tamago_core::reports::ErrorCode;
/// let code = ErrorCode::new(2);
/// assert_eq!(code.as_str(), "E_2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(pub u32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ErrorCode {
    /// Create a new error code
    pub fn new(code: u32) -> Self {
        ErrorCode(code)
    }
    /// Get the code as a string
    pub fn as_str(&self) -> String {
        format!("E_{}", self.0)
    }
}

pub const E_IO: ErrorCode = ErrorCode(1);
pub const E_SYNTAX: ErrorCode = ErrorCode(2);
pub const E_RUNTIME: ErrorCode = ErrorCode(3);
pub const E_LOWERING: ErrorCode = ErrorCode(6);

/// Report structure containing message, severity, and location
/// Used to represent one diagnostic for one compilation unit. The location
/// line is the input line number, so a collector spanning a whole file can
/// find the text to quote.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub message: String,
    pub severity: Level,
    pub issuer: String,
    pub location: Option<Location>,
    pub span: Option<Span>,
    pub code: Option<ErrorCode>,
    pub suggestion: Option<String>,
}

impl Report {
    /// Create a report from any pipeline error.
    pub fn from_error(error: &dyn TamagoErrorExt, code: Option<ErrorCode>) -> Self {
        Report {
            message: error.message(),
            severity: error.level(),
            issuer: error.issuer(),
            location: error.location(),
            span: error.span(),
            code,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // convenience conversion to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render with the source line and a caret under the span, using console
    /// styling. `source` is the text of the line the location refers to.
    pub fn render_with_source(&self, source: &str) -> String {
        let header = Style::new().bold();
        let sev = match self.severity {
            Level::Critical => Style::new().on_red().white().bold(),
            Level::Error => Style::new().red().bold(),
            Level::Warning => Style::new().yellow().bold(),
            Level::Info => Style::new().blue().bold(),
        };

        let mut out = format!(
            "{} {}\n",
            sev.apply_to(format!("[{}]", self.severity)),
            header.apply_to(&self.message)
        );

        if let Some(loc) = &self.location {
            out.push_str(&format!(" --> {}\n", loc));
            out.push_str(&format!(" {:4} | {}\n", loc.line, source));

            let col = loc.column.saturating_sub(1);
            let caret_len = self.span.map(|s| s.len()).unwrap_or(0).max(1);
            let caret_line = format!("      | {}{}", " ".repeat(col), "^".repeat(caret_len));
            out.push_str(&format!("{}\n", Style::new().green().apply_to(caret_line)));
        }

        if let Some(s) = &self.suggestion {
            out.push_str(&format!("{}\n", Style::new().cyan().apply_to(format!("Suggestion: {}", s))));
        }
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = match &self.location {
            Some(l) => format!(" at {}", l),
            None => String::new(),
        };
        if let Some(code) = &self.code {
            write!(f, "[{}]{} ({}): {}", self.severity, loc, code, self.message)
        } else {
            write!(f, "[{}]{}: {}", self.severity, loc, self.message)
        }
    }
}

impl std::error::Error for Report {}

/// Collector that aggregates reports across compilation units.
/// Identical reports (same message at the same location) are kept once.
///
/// # Examples
/// ```
/// use tamago_core::reports::ReportCollector;
/// let collector = ReportCollector::new();
/// assert!(collector.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportCollector {
    pub reports: Vec<Report>,
    seen: HashSet<(String, Option<Location>)>,
}

impl ReportCollector {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn push(&mut self, r: Report) {
        let key = (r.message.clone(), r.location);
        if self.seen.insert(key) {
            self.reports.push(r);
        }
    }

    pub fn extend(&mut self, others: impl IntoIterator<Item = Report>) {
        for r in others {
            self.push(r);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn has_errors(&self) -> bool {
        self.reports
            .iter()
            .any(|r| matches!(r.severity, Level::Error | Level::Critical))
    }

    /// Counts by severity: (critical, error, warning, info).
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        let mut c = 0;
        let mut e = 0;
        let mut w = 0;
        let mut i = 0;
        for r in &self.reports {
            match r.severity {
                Level::Critical => c += 1,
                Level::Error => e += 1,
                Level::Warning => w += 1,
                Level::Info => i += 1,
            }
        }
        (c, e, w, i)
    }

    /// Get an appropriate exit code based on the reports collected
    /// 0 = no errors, 1 = errors, 2 = critical
    pub fn exit_code(&self) -> i32 {
        let (c, e, _, _) = self.counts();
        if c > 0 {
            2
        } else if e > 0 {
            1
        } else {
            0
        }
    }

    /// Render every report; `source_line` maps a line number to its text.
    pub fn render_all<'a>(&self, source_line: impl Fn(usize) -> Option<&'a str>) -> String {
        let mut out = String::new();
        for r in &self.reports {
            match r.location.and_then(|l| source_line(l.line)) {
                Some(line) => out.push_str(&r.render_with_source(line)),
                None => out.push_str(&format!("{}\n", r)),
            }
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.reports)
    }
}

/// Reports for every diagnostic carried by a failed compilation unit.
pub fn compile_error_reports(error: &crate::error::CompileError) -> Vec<Report> {
    use crate::error::CompileError;
    use crate::ir::LowerErrorKind;

    match error {
        CompileError::Parse(errors) => errors
            .iter()
            .map(|e| Report::from_error(e, Some(E_SYNTAX)))
            .collect(),
        CompileError::Lower(e) => {
            let report = Report::from_error(e, Some(E_LOWERING));
            match e.kind() {
                LowerErrorKind::EmptyProgram => vec![report.with_suggestion("write an expression such as `1 + 2`")],
                LowerErrorKind::InvalidOperator(_) => vec![report],
            }
        }
    }
}
