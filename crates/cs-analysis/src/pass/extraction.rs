//! ExtractionDiagnostics pass: surfaces what the extractors could not read (C002, C003)

use super::ReconcilePass;
use crate::context::ContractModel;
use cs_contracts::{DiagnosticKind, ParseDiagnostic};
use cs_core::{Category, Config, ContractFileKind, Issue};

/// Parse resilience reporting
pub(crate) struct ExtractionDiagnostics;

impl ReconcilePass for ExtractionDiagnostics {
    fn name(&self) -> &'static str {
        "extraction"
    }

    fn description(&self) -> &'static str {
        "Reports malformed and duplicate declarations found while reading contracts"
    }

    fn run(&self, model: &ContractModel, _config: &Config) -> Vec<Issue> {
        let mut issues = Vec::new();

        let per_kind: [(ContractFileKind, Option<&[ParseDiagnostic]>); 3] = [
            (
                ContractFileKind::Schema,
                model.schema().map(|e| e.diagnostics.as_slice()),
            ),
            (
                ContractFileKind::Interfaces,
                model.interfaces().map(|e| e.diagnostics.as_slice()),
            ),
            (
                ContractFileKind::Endpoints,
                model.endpoints().map(|e| e.diagnostics.as_slice()),
            ),
        ];

        for (kind, diagnostics) in per_kind {
            for failure in model.read_failures().iter().filter(|f| f.kind == kind) {
                issues.push(
                    Issue::warning(
                        Category::ParseError,
                        format!("Could not read contract file: {}", failure.message),
                    )
                    .with_file(&failure.file)
                    .with_suggestion("Make sure the file is readable UTF-8 text"),
                );
            }
            issues.extend(diagnostics.unwrap_or_default().iter().map(diagnostic_issue));
        }

        issues
    }
}

fn diagnostic_issue(diagnostic: &ParseDiagnostic) -> Issue {
    let (category, suggestion) = match diagnostic.kind {
        DiagnosticKind::Malformed => (
            Category::ParseError,
            "Fix the declaration; it was skipped and later declarations were still read",
        ),
        DiagnosticKind::Duplicate => (
            Category::DuplicateDefinition,
            "Remove the earlier declaration; only the last one is used",
        ),
    };
    Issue::warning(category, diagnostic.message.clone())
        .with_file(&diagnostic.file)
        .with_line(diagnostic.line)
        .with_suggestion(suggestion)
}

#[cfg(test)]
#[path = "extraction_test.rs"]
mod tests;
