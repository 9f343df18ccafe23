//! Pass infrastructure: composable reconciliation passes over the contract model

pub mod contract_files;
pub mod extraction;
pub mod nullability;
pub mod route_sync;
pub mod row_level_security;
pub mod type_sync;

use crate::context::ContractModel;
use cs_core::{Category, Config, ConfigSeverity, Issue, Severity};
use std::collections::HashMap;

/// Project-wide reconciliation pass
pub trait ReconcilePass: Send + Sync {
    /// Pass name (used for filtering and display)
    fn name(&self) -> &'static str;
    /// Human-readable description
    fn description(&self) -> &'static str;
    /// Whether the configuration turns this pass on when no filter is given
    fn enabled(&self, _config: &Config) -> bool {
        true
    }
    /// Run the pass over the whole model
    fn run(&self, model: &ContractModel, config: &Config) -> Vec<Issue>;
}

/// Manages and runs reconciliation passes
pub struct PassManager {
    passes: Vec<Box<dyn ReconcilePass>>,
}

impl PassManager {
    /// Create a PassManager with all built-in passes registered
    pub fn with_defaults() -> Self {
        Self {
            passes: vec![
                Box::new(contract_files::ContractFiles),
                Box::new(extraction::ExtractionDiagnostics),
                Box::new(type_sync::TypeSync),
                Box::new(route_sync::RouteSync),
                Box::new(nullability::Nullability),
                Box::new(row_level_security::RowLevelSecurity),
            ],
        }
    }

    /// Run passes in registration order, returning collected issues.
    ///
    /// Without a filter every pass enabled by `config` runs. With a filter
    /// exactly the named passes run, including ones the configuration
    /// leaves off.
    pub fn run(
        &self,
        model: &ContractModel,
        config: &Config,
        pass_filter: Option<&[String]>,
    ) -> Vec<Issue> {
        let mut issues = Vec::new();

        for pass in &self.passes {
            let selected = match pass_filter {
                Some(filter) => filter.iter().any(|f| f == pass.name()),
                None => pass.enabled(config),
            };
            if !selected {
                continue;
            }

            let found = pass.run(model, config);
            log::debug!("Pass {} produced {} issue(s)", pass.name(), found.len());
            issues.extend(found);
        }

        issues
    }

    /// List all available pass names
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// List `(name, description)` for every pass
    pub fn describe(&self) -> Vec<(&'static str, &'static str)> {
        self.passes
            .iter()
            .map(|p| (p.name(), p.description()))
            .collect()
    }
}

/// Severity after applying a user override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverriddenSeverity {
    /// Drop the issue entirely
    Off,
    /// Report the issue at this level
    Level(Severity),
}

impl From<ConfigSeverity> for OverriddenSeverity {
    fn from(value: ConfigSeverity) -> Self {
        match value {
            ConfigSeverity::Info => OverriddenSeverity::Level(Severity::Info),
            ConfigSeverity::Warning => OverriddenSeverity::Level(Severity::Warning),
            ConfigSeverity::Error => OverriddenSeverity::Level(Severity::Error),
            ConfigSeverity::Off => OverriddenSeverity::Off,
        }
    }
}

/// Per-category severity overrides from the `severity_overrides` config map
#[derive(Debug, Clone, Default)]
pub struct SeverityOverrides {
    by_category: HashMap<Category, OverriddenSeverity>,
}

impl SeverityOverrides {
    /// Build from config; unknown codes are ignored here since config
    /// loading already rejects them.
    pub fn from_config(map: &HashMap<String, ConfigSeverity>) -> Self {
        let by_category = map
            .iter()
            .filter_map(|(code, level)| {
                Category::from_code(code).map(|category| (category, (*level).into()))
            })
            .collect();
        Self { by_category }
    }

    pub fn get(&self, category: Category) -> Option<OverriddenSeverity> {
        self.by_category.get(&category).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

/// Apply overrides, preserving order. `Off` removes the issue.
pub fn apply_severity_overrides(issues: Vec<Issue>, overrides: &SeverityOverrides) -> Vec<Issue> {
    if overrides.is_empty() {
        return issues;
    }

    issues
        .into_iter()
        .filter_map(|issue| match overrides.get(issue.category()) {
            Some(OverriddenSeverity::Off) => None,
            Some(OverriddenSeverity::Level(level)) if level != issue.severity() => {
                Some(issue.with_severity(level))
            }
            _ => Some(issue),
        })
        .collect()
}

#[cfg(test)]
#[path = "severity_override_test.rs"]
mod severity_override_tests;

#[cfg(test)]
#[path = "pass_manager_test.rs"]
mod pass_manager_tests;
