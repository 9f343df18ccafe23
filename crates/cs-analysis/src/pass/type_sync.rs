//! TypeSync pass: every table has an interface and every column a field (C004, C005, C006)
//!
//! A column is matched to exactly one of three outcomes: an identically
//! named field, a field whose name differs only by casing convention
//! (`full_name` vs `fullName`), or no field at all.

use super::ReconcilePass;
use crate::context::ContractModel;
use cs_contracts::{Column, Field, Interface};
use cs_core::{fold_case, interface_candidates, Category, Config, Issue};

/// Schema to interface reconciliation
pub(crate) struct TypeSync;

/// How a column is represented in its interface
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ColumnMatch<'a> {
    /// Field with the exact column name
    Exact(&'a Field),
    /// First declared field whose name folds to the same identifier
    Sibling(&'a Field),
    Missing,
}

/// Classify `column` against `interface`
pub(crate) fn match_column<'a>(column: &Column, interface: &'a Interface) -> ColumnMatch<'a> {
    if let Some(field) = interface.field(&column.name) {
        return ColumnMatch::Exact(field);
    }
    let folded = fold_case(&column.name);
    match interface.fields.iter().find(|f| fold_case(&f.name) == folded) {
        Some(field) => ColumnMatch::Sibling(field),
        None => ColumnMatch::Missing,
    }
}

impl ReconcilePass for TypeSync {
    fn name(&self) -> &'static str {
        "type_sync"
    }

    fn description(&self) -> &'static str {
        "Compares schema tables against their TypeScript interfaces"
    }

    fn enabled(&self, config: &Config) -> bool {
        config.checks.type_sync
    }

    fn run(&self, model: &ContractModel, config: &Config) -> Vec<Issue> {
        if model.interfaces().is_none() {
            log::debug!("No interfaces extracted, skipping type sync");
            return Vec::new();
        }

        let interfaces_file = &config.contracts.interfaces_file;
        let mut issues = Vec::new();

        for table in model.tables() {
            let Some(interface) = model.projection(table, config) else {
                let candidates =
                    interface_candidates(&table.name, config.interface_alias(&table.name));
                let mut issue = Issue::warning(
                    Category::TypeSync,
                    format!("No TypeScript interface found for table '{}'", table.name),
                )
                .with_file(&table.file)
                .with_line(table.line);
                if let Some(first) = candidates.first() {
                    issue = issue.with_suggestion(format!(
                        "Create interface '{}' in {}",
                        first, interfaces_file
                    ));
                }
                issues.push(issue);
                continue;
            };

            for column in &table.columns {
                match match_column(column, interface) {
                    ColumnMatch::Exact(_) => {}
                    ColumnMatch::Sibling(field) => issues.push(
                        Issue::error(
                            Category::FieldMismatch,
                            format!(
                                "Case mismatch in '{}': database has '{}', TypeScript has '{}'",
                                interface.name, column.name, field.name
                            ),
                        )
                        .with_file(&interface.file)
                        .with_line(field.line)
                        .with_suggestion(format!(
                            "Rename '{}' to '{}' in {} to match database",
                            field.name, column.name, interfaces_file
                        )),
                    ),
                    ColumnMatch::Missing => issues.push(
                        Issue::warning(
                            Category::MissingField,
                            format!(
                                "Column '{}' in table '{}' not found in interface '{}'",
                                column.name, table.name, interface.name
                            ),
                        )
                        .with_file(&interface.file)
                        .with_line(interface.line)
                        .with_suggestion(format!(
                            "Add '{}' field to '{}' interface",
                            column.name, interface.name
                        )),
                    ),
                }
            }
        }

        issues
    }
}

#[cfg(test)]
#[path = "type_sync_test.rs"]
mod tests;
