//! Best-effort extraction results

use serde::Serialize;
use std::fmt;

/// What went wrong while reading a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// A declaration block could not be delimited or read
    Malformed,
    /// A name was declared more than once; the last declaration was kept
    Duplicate,
}

/// Problem found in a contract file that did not stop extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub file: String,
    pub line: usize,
}

impl ParseDiagnostic {
    pub fn malformed(file: &str, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Malformed,
            message: message.into(),
            file: file.to_string(),
            line,
        }
    }

    pub fn duplicate(file: &str, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Duplicate,
            message: message.into(),
            file: file.to_string(),
            line,
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message)
    }
}

/// An extracted value together with the diagnostics produced on the way
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction<T> {
    pub value: T,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl<T> Extraction<T> {
    pub fn new(value: T, diagnostics: Vec<ParseDiagnostic>) -> Self {
        Self { value, diagnostics }
    }
}

/// Insert `item`, replacing an earlier entry with the same key in place.
///
/// Returns true when an entry was replaced.
pub(crate) fn insert_last_wins<T>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> &str) -> bool {
    match items.iter().position(|existing| key(existing) == key(&item)) {
        Some(idx) => {
            items[idx] = item;
            true
        }
        None => {
            items.push(item);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_last_wins_keeps_position() {
        let mut items = vec![("a", 1), ("b", 2)];
        assert!(insert_last_wins(&mut items, ("a", 3), |i| i.0));
        assert!(!insert_last_wins(&mut items, ("c", 4), |i| i.0));
        assert_eq!(items, vec![("a", 3), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = ParseDiagnostic::malformed("database.sql", 4, "Unterminated column list");
        assert_eq!(diag.to_string(), "database.sql:4: Unterminated column list");
    }
}
