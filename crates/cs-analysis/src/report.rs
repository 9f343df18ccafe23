//! Report rendering: grouped text summary, JSON document and JSON Lines

use cs_core::{Category, Issue, Severity};
use serde::Serialize;

const RULE: &str = "============================================================";

/// Issue counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl Summary {
    fn count(issues: &[Issue]) -> Self {
        let mut summary = Self::default();
        for issue in issues {
            match issue.severity() {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.infos += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos
    }
}

/// Machine-readable issue with a fixed field order
#[derive(Debug, Clone, Serialize)]
pub struct IssueRecord<'a> {
    pub severity: Severity,
    pub code: &'static str,
    pub category: Category,
    pub message: &'a str,
    pub file: Option<&'a str>,
    pub line: Option<usize>,
    pub suggestion: Option<&'a str>,
}

impl<'a> From<&'a Issue> for IssueRecord<'a> {
    fn from(issue: &'a Issue) -> Self {
        Self {
            severity: issue.severity(),
            code: issue.code(),
            category: issue.category(),
            message: issue.message(),
            file: issue.file(),
            line: issue.line(),
            suggestion: issue.suggestion(),
        }
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    passed: bool,
    summary: Summary,
    issues: Vec<IssueRecord<'a>>,
}

/// Final result of a validation run
#[derive(Debug, Clone)]
pub struct Report {
    issues: Vec<Issue>,
    summary: Summary,
    strict: bool,
}

impl Report {
    /// Build a report; `issues` keep the order the passes produced them in
    pub fn new(issues: Vec<Issue>) -> Self {
        let summary = Summary::count(&issues);
        Self {
            issues,
            summary,
            strict: false,
        }
    }

    /// In strict mode warnings fail the run too
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Pass/fail verdict
    pub fn passed(&self) -> bool {
        self.summary.errors == 0 && !(self.strict && self.summary.warnings > 0)
    }

    /// Issues grouped by category, groups in first-seen order
    pub fn groups(&self) -> Vec<(Category, Vec<&Issue>)> {
        let mut groups: Vec<(Category, Vec<&Issue>)> = Vec::new();
        for issue in &self.issues {
            match groups.iter_mut().find(|(c, _)| *c == issue.category()) {
                Some((_, members)) => members.push(issue),
                None => groups.push((issue.category(), vec![issue])),
            }
        }
        groups
    }

    pub fn records(&self) -> Vec<IssueRecord<'_>> {
        self.issues.iter().map(IssueRecord::from).collect()
    }

    /// Human-readable grouped summary
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = vec![
            RULE.to_string(),
            "         INTEGRATION VALIDATION REPORT".to_string(),
            RULE.to_string(),
            String::new(),
        ];

        if self.issues.is_empty() {
            lines.push("All checks passed! Frontend and backend are in sync.".to_string());
            lines.push(String::new());
            return lines.join("\n");
        }

        let mut counts = format!(
            "Found {}, {}",
            plural(self.summary.errors, "error"),
            plural(self.summary.warnings, "warning")
        );
        if self.summary.infos > 0 {
            counts.push_str(&format!(", {} info", self.summary.infos));
        }
        lines.push(counts);

        for (category, members) in self.groups() {
            lines.push(String::new());
            lines.push(format!("--- {} ---", category));
            for issue in members {
                lines.push(String::new());
                lines.push(format!(
                    "[{}] {}: {}",
                    issue.severity(),
                    issue.code(),
                    issue.message()
                ));
                match (issue.file(), issue.line()) {
                    (Some(file), Some(line)) => lines.push(format!("   File: {}:{}", file, line)),
                    (Some(file), None) => lines.push(format!("   File: {}", file)),
                    _ => {}
                }
                if let Some(suggestion) = issue.suggestion() {
                    lines.push(format!("   Suggestion: {}", suggestion));
                }
            }
        }

        lines.push(String::new());
        lines.push(RULE.to_string());
        lines.push(String::new());
        lines.push(self.verdict().to_string());
        lines.push(String::new());
        lines.join("\n")
    }

    fn verdict(&self) -> &'static str {
        if self.summary.errors > 0 {
            "Validation FAILED - fix errors before deployment"
        } else if self.strict && self.summary.warnings > 0 {
            "Validation FAILED - warnings are not allowed in strict mode"
        } else if self.summary.warnings > 0 {
            "Validation passed with warnings - review before deployment"
        } else {
            "Validation passed"
        }
    }

    /// `{passed, summary, issues}` as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ReportDocument {
            passed: self.passed(),
            summary: self.summary,
            issues: self.records(),
        })
    }

    /// One JSON object per issue, newline terminated
    pub fn to_jsonl(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for record in self.records() {
            out.push_str(&serde_json::to_string(&record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
