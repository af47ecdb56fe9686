//! cli/src/output.rs
//! Output utilities for the CLI
//! description: Styled status lines plus the renderers behind `--dump`
//! (token tables, AST text, IR text, and their JSON forms).

use std::io::{self, Write};

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use console::Style;
use serde::Serialize;
use tamago_core::ast::{self, Program};
use tamago_core::lexer::{Token, Tokenizer};
use tamago_core::IrModule;

/// ====================================================================
/// Styled lines

/// Styles for different output elements
pub struct FormatStyle {
    pub error: Style,
}

impl Default for FormatStyle {
    fn default() -> Self {
        FormatStyle { error: Style::new().red().bold() }
    }
}

/// Printer that writes styled lines into any `Write`.
pub struct FormattedOutputHandler<T: Write> {
    out: T,
    formatting: FormatStyle,
}

impl<T: Write> FormattedOutputHandler<T> {
    pub fn new(out: T) -> Self {
        FormattedOutputHandler { out, formatting: FormatStyle::default() }
    }

    /// Write a single line, styled when `style` is given.
    pub fn line(&mut self, text: &str, style: Option<&Style>) -> io::Result<()> {
        match style {
            Some(s) => writeln!(self.out, "{}", s.apply_to(text)),
            None => writeln!(self.out, "{}", text),
        }
    }

    /// Write preformatted text as-is.
    pub fn write(&mut self, args: std::fmt::Arguments) -> io::Result<()> {
        write!(self.out, "{}", args)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        let style = self.formatting.error.clone();
        self.line(text, Some(&style))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// ====================================================================
/// Dumps

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpStage {
    Tokens,
    Ast,
    Ir,
}

impl DumpStage {
    pub const NAMES: [&'static str; 3] = ["tokens", "ast", "ir"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokens" => Some(DumpStage::Tokens),
            "ast" => Some(DumpStage::Ast),
            "ir" => Some(DumpStage::Ir),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct LineTokens<'a> {
    line: usize,
    tokens: &'a [Token],
}

#[derive(Serialize)]
struct LineAst<'a> {
    line: usize,
    program: Option<&'a Program>,
    errors: Vec<String>,
}

#[derive(Serialize)]
struct LineIr {
    line: usize,
    ir: Option<String>,
    error: Option<String>,
}

fn tokenize_units(units: &[(usize, &str)]) -> Vec<(usize, Vec<Token>)> {
    units
        .iter()
        .map(|(line_no, text)| (*line_no, Tokenizer::with_line(text, *line_no).collect()))
        .collect()
}

/// One table row per token, `Eof` included.
pub fn token_table(units: &[(usize, &str)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Line", "Column", "Kind", "Literal"]);

    for (line_no, tokens) in tokenize_units(units) {
        for tok in tokens {
            table.add_row(vec![
                line_no.to_string(),
                tok.span.start.column.to_string(),
                tok.kind.to_string(),
                tok.literal,
            ]);
        }
    }
    table
}

pub fn dump_tokens(units: &[(usize, &str)], json: bool) -> serde_json::Result<String> {
    if !json {
        return Ok(format!("{}\n", token_table(units)));
    }
    let tokenized = tokenize_units(units);
    let lines: Vec<LineTokens> = tokenized
        .iter()
        .map(|(line, tokens)| LineTokens { line: *line, tokens })
        .collect();
    serde_json::to_string_pretty(&lines)
}

pub fn dump_ast(units: &[(usize, &str)], json: bool) -> serde_json::Result<String> {
    let parsed: Vec<(usize, Result<Program, Vec<ast::SyntaxError>>)> = units
        .iter()
        .map(|(line_no, text)| (*line_no, ast::generate_ast_from_source(text, *line_no)))
        .collect();

    if json {
        let lines: Vec<LineAst> = parsed
            .iter()
            .map(|(line, res)| match res {
                Ok(p) => LineAst { line: *line, program: Some(p), errors: Vec::new() },
                Err(errs) => LineAst {
                    line: *line,
                    program: None,
                    errors: errs.iter().map(|e| e.to_string()).collect(),
                },
            })
            .collect();
        return serde_json::to_string_pretty(&lines);
    }

    let mut out = String::new();
    for (line, res) in &parsed {
        match res {
            Ok(p) => out.push_str(&format!("{:>4} | {}\n", line, p)),
            Err(errs) => out.push_str(&format!("{:>4} | <{} parse error(s)>\n", line, errs.len())),
        }
    }
    Ok(out)
}

/// `modules` pairs each line number with its compiled module or the text of
/// the error that stopped it.
pub fn dump_ir(modules: &[(usize, Result<&IrModule, String>)], json: bool) -> serde_json::Result<String> {
    if json {
        let lines: Vec<LineIr> = modules
            .iter()
            .map(|(line, res)| match res {
                Ok(m) => LineIr { line: *line, ir: Some(m.to_string()), error: None },
                Err(e) => LineIr { line: *line, ir: None, error: Some(e.clone()) },
            })
            .collect();
        return serde_json::to_string_pretty(&lines);
    }

    let mut out = String::new();
    for (line, res) in modules {
        out.push_str(&format!("; line {}\n", line));
        match res {
            Ok(m) => out.push_str(&m.to_string()),
            Err(e) => out.push_str(&format!("; error: {}\n", e.trim_end().replace('\n', "\n; "))),
        }
    }
    Ok(out)
}
