use std::path::PathBuf;

use log::warn;

use crate::TamagoErrorExt;

/// A source file whose lines are compiled independently of each other.
#[derive(Debug, Clone)]
pub struct Script {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

impl Script {
    pub fn new(path: PathBuf) -> Result<Self, Box<dyn TamagoErrorExt>> {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let bytes = std::fs::read(&path).map_err(|e| {
            Box::new(MissingScriptError { path: path.clone(), reason: e.to_string() }) as Box<dyn TamagoErrorExt>
        })?;
        // Invalid UTF-8 only spoils the lines it appears on.
        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("{}: invalid UTF-8 replaced", name);
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Script {
            name,
            path,
            content,
        })
    }

    /// Build a script from text already in memory (stdin, tests).
    pub fn from_source(name: &str, content: &str) -> Self {
        Script {
            name: name.to_string(),
            path: PathBuf::from(name),
            content: content.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Every non-blank line with its 1-based line number. Line endings are
    /// stripped; each item is one compilation unit.
    pub fn units(&self) -> impl Iterator<Item = (usize, &str)> {
        self.content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty())
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Script: {} at {:?}", self.name, self.path)
    }
}

#[derive(Debug, Clone)]
pub struct MissingScriptError {
    pub path: PathBuf,
    pub reason: String,
}

impl std::fmt::Display for MissingScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing script at {:?}: {}", self.path, self.reason)
    }
}

impl std::error::Error for MissingScriptError {}

impl TamagoErrorExt for MissingScriptError {
    fn level(&self) -> crate::Level {
        crate::Level::Error
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn issuer(&self) -> String {
        "tamago.script".to_string()
    }

    fn span(&self) -> Option<crate::location::Span> {
        None
    }

    fn location(&self) -> Option<crate::location::Location> {
        None
    }
}
