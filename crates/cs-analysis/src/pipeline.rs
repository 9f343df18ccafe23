//! End-to-end validation: extract, scan, reconcile, report

use crate::context::{ContractModel, ContractStatus, ReadFailure};
use crate::error::AnalysisResult;
use crate::pass::{apply_severity_overrides, PassManager, SeverityOverrides};
use crate::report::Report;
use cs_contracts::{
    extract_endpoints, extract_interfaces, extract_schema, read_contract, ContractError,
};
use cs_core::{Config, ContractFileKind, ProjectLayout};
use cs_scan::scan_sources;

/// Extract every present contract artifact and scan the source roots.
///
/// Each artifact is read independently: a missing or unreadable file leaves
/// only its own slot of the model empty.
pub async fn build_model(config: &Config, layout: &ProjectLayout) -> AnalysisResult<ContractModel> {
    let contracts = &config.contracts;
    let files = layout.contract_files(contracts);

    let statuses = files
        .iter()
        .map(|f| ContractStatus {
            kind: f.kind,
            name: f.name.clone(),
            file: layout.display_path(&f.path),
            exists: f.exists,
        })
        .collect();
    let contracts_dir = layout
        .contracts_dir
        .as_deref()
        .map(|dir| layout.display_path(dir));
    let mut model = ContractModel::new(contracts_dir, statuses);

    for file in files.iter().filter(|f| f.exists) {
        if file.kind == ContractFileKind::Supporting {
            continue;
        }

        let display = layout.display_path(&file.path);
        let text = match read_contract(&file.path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{}", e);
                let message = match e {
                    ContractError::Read { source, .. } => source.to_string(),
                };
                model = model.with_read_failure(ReadFailure {
                    kind: file.kind,
                    file: display,
                    message,
                });
                continue;
            }
        };

        model = match file.kind {
            ContractFileKind::Schema => {
                let schema = extract_schema(&text, &display);
                log::debug!("Extracted {} table(s) from {}", schema.value.tables.len(), display);
                model.with_schema(schema)
            }
            ContractFileKind::Interfaces => {
                let interfaces = extract_interfaces(&text, &display);
                log::debug!("Extracted {} interface(s) from {}", interfaces.value.len(), display);
                model.with_interfaces(interfaces)
            }
            ContractFileKind::Endpoints => {
                let endpoints = extract_endpoints(
                    &text,
                    &display,
                    &config.scan.api_prefix,
                    &contracts.endpoint_table,
                );
                log::debug!("Extracted {} endpoint(s) from {}", endpoints.value.len(), display);
                model.with_endpoints(endpoints)
            }
            ContractFileKind::Supporting => model,
        };
    }

    let scan = scan_sources(layout, config).await?;
    Ok(model.with_scan(scan))
}

/// Run the passes over a built model and apply the configured overrides
pub fn reconcile(model: &ContractModel, config: &Config, pass_filter: Option<&[String]>) -> Report {
    let issues = PassManager::with_defaults().run(model, config, pass_filter);
    let overrides = SeverityOverrides::from_config(&config.severity_overrides);
    Report::new(apply_severity_overrides(issues, &overrides))
}

/// Validate a whole project with every enabled pass
pub async fn validate_project(config: &Config, layout: &ProjectLayout) -> AnalysisResult<Report> {
    let model = build_model(config, layout).await?;
    Ok(reconcile(&model, config, None))
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
