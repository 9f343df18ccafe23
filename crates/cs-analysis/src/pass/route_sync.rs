//! RouteSync pass: every frontend API call reaches a backend route (C007, C008)
//!
//! A literal call under the API prefix is matched against the backend route
//! paths first and the declared endpoint templates second. Endpoint table
//! references are resolved through the table. HTTP methods are not compared.

use super::ReconcilePass;
use crate::context::ContractModel;
use cs_core::path_template::has_prefix;
use cs_core::{Category, Config, Issue};
use cs_scan::{CallKind, CallSite};
use std::collections::HashSet;

/// Call site to route reconciliation
pub(crate) struct RouteSync;

/// Where a frontend call was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallMatch {
    BackendRoute,
    EndpointTemplate,
    Unmatched,
    /// Not an API call under the configured prefix
    Ignored,
}

impl ReconcilePass for RouteSync {
    fn name(&self) -> &'static str {
        "route_sync"
    }

    fn description(&self) -> &'static str {
        "Checks that frontend API calls match backend routes or declared endpoints"
    }

    fn enabled(&self, config: &Config) -> bool {
        config.checks.routes
    }

    fn run(&self, model: &ContractModel, config: &Config) -> Vec<Issue> {
        let backend: HashSet<&str> = model
            .scan()
            .routes
            .iter()
            .map(|r| r.path.as_str())
            .collect();
        let table_name = &config.contracts.endpoint_table;

        let mut issues = Vec::new();
        for call in &model.scan().calls {
            match &call.kind {
                CallKind::Literal => {
                    let Some(path) = call.path() else {
                        continue;
                    };
                    if classify(&path, &backend, model, config) == CallMatch::Unmatched {
                        issues.push(route_mismatch(call, &path));
                    }
                }
                CallKind::EndpointRef { key } => {
                    let Some(endpoints) = model.endpoints() else {
                        continue;
                    };
                    if endpoints.value.resolve(key).is_none() {
                        issues.push(
                            Issue::warning(
                                Category::UnknownEndpoint,
                                format!(
                                    "Frontend references '{}' but {} has no entry '{}'",
                                    call.raw, table_name, key
                                ),
                            )
                            .with_file(&call.file)
                            .with_line(call.line)
                            .with_suggestion(format!(
                                "Add '{}' to {} in {} or fix the reference",
                                key, table_name, config.contracts.endpoints_file
                            )),
                        );
                    }
                }
            }
        }
        issues
    }
}

/// Classify a normalized literal call path
pub(crate) fn classify(
    path: &str,
    backend: &HashSet<&str>,
    model: &ContractModel,
    config: &Config,
) -> CallMatch {
    if !has_prefix(path, &config.scan.api_prefix) {
        return CallMatch::Ignored;
    }
    if backend.contains(path) {
        return CallMatch::BackendRoute;
    }
    let declared = model
        .endpoints()
        .is_some_and(|e| e.value.contains_path(path));
    if declared {
        CallMatch::EndpointTemplate
    } else {
        CallMatch::Unmatched
    }
}

fn route_mismatch(call: &CallSite, path: &str) -> Issue {
    Issue::warning(
        Category::RouteMismatch,
        format!(
            "Frontend calls '{}' but no matching backend route found",
            path
        ),
    )
    .with_file(&call.file)
    .with_line(call.line)
    .with_suggestion("Add route to backend or fix frontend URL")
}

#[cfg(test)]
#[path = "route_sync_test.rs"]
mod tests;
