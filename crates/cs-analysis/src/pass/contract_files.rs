//! ContractFiles pass: the contracts directory and every required file exist (C001)

use super::ReconcilePass;
use crate::context::ContractModel;
use cs_core::{Category, Config, Issue};

/// Structural contract check
pub(crate) struct ContractFiles;

impl ReconcilePass for ContractFiles {
    fn name(&self) -> &'static str {
        "contract_files"
    }

    fn description(&self) -> &'static str {
        "Checks that the contracts directory and every required contract file exist"
    }

    fn run(&self, model: &ContractModel, config: &Config) -> Vec<Issue> {
        let Some(dir) = model.contracts_dir() else {
            let contracts = &config.contracts;
            let mut expected = vec![
                contracts.schema_file.as_str(),
                contracts.interfaces_file.as_str(),
                contracts.endpoints_file.as_str(),
            ];
            expected.extend(contracts.required_files.iter().map(String::as_str));
            return vec![
                Issue::error(Category::Contracts, "No contracts directory found").with_suggestion(
                    format!(
                        "Create contracts/ directory with {}",
                        expected.join(", ")
                    ),
                ),
            ];
        };

        model
            .contract_files()
            .iter()
            .filter(|f| !f.exists)
            .map(|f| {
                Issue::error(
                    Category::Contracts,
                    format!("Missing required contract file: {}", f.name),
                )
                .with_file(dir)
                .with_suggestion(format!("Create {} in contracts directory", f.name))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "contract_files_test.rs"]
mod tests;
