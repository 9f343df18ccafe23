//! RowLevelSecurity pass: every table enables row level security (C010)

use super::ReconcilePass;
use crate::context::ContractModel;
use cs_core::{Category, Config, Issue};

pub(crate) struct RowLevelSecurity;

impl ReconcilePass for RowLevelSecurity {
    fn name(&self) -> &'static str {
        "row_level_security"
    }

    fn description(&self) -> &'static str {
        "Requires ENABLE ROW LEVEL SECURITY for every declared table"
    }

    fn enabled(&self, config: &Config) -> bool {
        config.checks.row_level_security
    }

    fn run(&self, model: &ContractModel, config: &Config) -> Vec<Issue> {
        let Some(schema) = model.schema() else {
            return Vec::new();
        };

        schema
            .value
            .tables
            .iter()
            .filter(|t| !schema.value.has_rls(&t.name))
            .map(|table| {
                Issue::warning(
                    Category::RowLevelSecurity,
                    format!("Table '{}' does not enable row level security", table.name),
                )
                .with_file(&table.file)
                .with_line(table.line)
                .with_suggestion(format!(
                    "Add 'ALTER TABLE {} ENABLE ROW LEVEL SECURITY;' to {}",
                    table.name, config.contracts.schema_file
                ))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "row_level_security_test.rs"]
mod tests;
