//! Nullability pass: column nullability agrees with field optionality (C009)
//!
//! Only columns with an identically named field are compared. Primary key
//! columns count as NOT NULL.

use super::type_sync::{match_column, ColumnMatch};
use super::ReconcilePass;
use crate::context::ContractModel;
use cs_core::{Category, Config, Issue};

/// Nullability comparison between tables and their interfaces
pub(crate) struct Nullability;

impl ReconcilePass for Nullability {
    fn name(&self) -> &'static str {
        "nullability"
    }

    fn description(&self) -> &'static str {
        "Compares column nullability with interface field optionality"
    }

    fn enabled(&self, config: &Config) -> bool {
        config.checks.nullability
    }

    fn run(&self, model: &ContractModel, config: &Config) -> Vec<Issue> {
        let mut issues = Vec::new();

        for table in model.tables() {
            let Some(interface) = model.projection(table, config) else {
                continue;
            };

            for column in &table.columns {
                let ColumnMatch::Exact(field) = match_column(column, interface) else {
                    continue;
                };
                let column_nullable = column.nullable && !column.primary_key;
                let field_nullable = field.accepts_null();
                if column_nullable == field_nullable {
                    continue;
                }

                let (message, suggestion) = if column_nullable {
                    (
                        format!(
                            "Column '{}.{}' is nullable but field '{}.{}' is typed '{}'",
                            table.name, column.name, interface.name, field.name, field.type_expr
                        ),
                        format!("Declare '{}' as '{} | null'", field.name, field.type_expr),
                    )
                } else {
                    (
                        format!(
                            "Column '{}.{}' is NOT NULL but field '{}.{}' accepts null",
                            table.name, column.name, interface.name, field.name
                        ),
                        format!(
                            "Make '{}' required and non-null, or drop NOT NULL from '{}'",
                            field.name, column.name
                        ),
                    )
                };

                issues.push(
                    Issue::info(Category::Nullability, message)
                        .with_file(&interface.file)
                        .with_line(field.line)
                        .with_suggestion(suggestion),
                );
            }
        }

        issues
    }
}

#[cfg(test)]
#[path = "nullability_test.rs"]
mod tests;
