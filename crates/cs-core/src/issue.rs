//! Issue model shared by every reconciliation pass

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational: no action required
    Info,
    /// Warning: worth reviewing, never fails a run
    Warning,
    /// Error: fails the run
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Closed set of issue categories.
///
/// Each category has a stable code (`C001`..) used for severity overrides
/// and machine-readable output, and a label used for grouping in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// C001: a required contract artifact is missing
    #[serde(rename = "Contracts")]
    Contracts,
    /// C002: a declaration block could not be parsed
    #[serde(rename = "Parse Error")]
    ParseError,
    /// C003: a name was declared more than once
    #[serde(rename = "Duplicate Definition")]
    DuplicateDefinition,
    /// C004: a table has no typed projection
    #[serde(rename = "Type Sync")]
    TypeSync,
    /// C005: a column and a field differ only by casing convention
    #[serde(rename = "Field Mismatch")]
    FieldMismatch,
    /// C006: a column has no field in its interface
    #[serde(rename = "Missing Field")]
    MissingField,
    /// C007: a frontend call has no backend route or endpoint declaration
    #[serde(rename = "Route Mismatch")]
    RouteMismatch,
    /// C008: a reference into the endpoint table does not resolve
    #[serde(rename = "Unknown Endpoint")]
    UnknownEndpoint,
    /// C009: column nullability and field optionality disagree
    #[serde(rename = "Nullability")]
    Nullability,
    /// C010: a table does not enable row level security
    #[serde(rename = "Row Level Security")]
    RowLevelSecurity,
}

impl Category {
    /// Every category, in code order
    pub const ALL: [Category; 10] = [
        Category::Contracts,
        Category::ParseError,
        Category::DuplicateDefinition,
        Category::TypeSync,
        Category::FieldMismatch,
        Category::MissingField,
        Category::RouteMismatch,
        Category::UnknownEndpoint,
        Category::Nullability,
        Category::RowLevelSecurity,
    ];

    /// Stable issue code
    pub fn code(self) -> &'static str {
        match self {
            Category::Contracts => "C001",
            Category::ParseError => "C002",
            Category::DuplicateDefinition => "C003",
            Category::TypeSync => "C004",
            Category::FieldMismatch => "C005",
            Category::MissingField => "C006",
            Category::RouteMismatch => "C007",
            Category::UnknownEndpoint => "C008",
            Category::Nullability => "C009",
            Category::RowLevelSecurity => "C010",
        }
    }

    /// Human-readable label used as the report group heading
    pub fn label(self) -> &'static str {
        match self {
            Category::Contracts => "Contracts",
            Category::ParseError => "Parse Error",
            Category::DuplicateDefinition => "Duplicate Definition",
            Category::TypeSync => "Type Sync",
            Category::FieldMismatch => "Field Mismatch",
            Category::MissingField => "Missing Field",
            Category::RouteMismatch => "Route Mismatch",
            Category::UnknownEndpoint => "Unknown Endpoint",
            Category::Nullability => "Nullability",
            Category::RowLevelSecurity => "Row Level Security",
        }
    }

    /// Look up a category by its code
    pub fn from_code(code: &str) -> Option<Category> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One detected inconsistency between contract artifacts or source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    severity: Severity,
    category: Category,
    message: String,
    file: Option<String>,
    line: Option<usize>,
    suggestion: Option<String>,
}

impl Issue {
    /// Create an issue with an explicit severity
    pub fn new(severity: Severity, category: Category, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            file: None,
            line: None,
            suggestion: None,
        }
    }

    /// Create an error-severity issue
    pub fn error(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, category, message)
    }

    /// Create a warning-severity issue
    pub fn warning(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, category, message)
    }

    /// Create an info-severity issue
    pub fn info(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, category, message)
    }

    /// Attach the file the issue refers to
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attach a 1-based line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a remediation suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Copy of this issue at a different severity
    pub fn with_severity(&self, severity: Severity) -> Self {
        Self {
            severity,
            ..self.clone()
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn code(&self) -> &'static str {
        self.category.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code(), self.message)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " ({}:{})", file, line),
            (Some(file), None) => write!(f, " ({})", file),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "issue_test.rs"]
mod tests;
