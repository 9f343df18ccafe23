//! Shared test helpers for building contract models in memory

use crate::context::{ContractModel, ContractStatus};
use cs_contracts::{extract_endpoints, extract_interfaces, extract_schema};
use cs_core::path_template::normalize_path;
use cs_core::{ContractFileKind, Issue};
use cs_scan::{CallKind, CallSite, HttpMethod, RouteDeclaration, SourceScan};

pub const SCHEMA_FILE: &str = "contracts/database.sql";
pub const INTERFACES_FILE: &str = "contracts/types.ts";
pub const ENDPOINTS_FILE: &str = "contracts/endpoints.ts";

/// Contract statuses for a complete contracts directory
pub fn all_contracts_present() -> Vec<ContractStatus> {
    [
        (ContractFileKind::Schema, "database.sql"),
        (ContractFileKind::Interfaces, "types.ts"),
        (ContractFileKind::Endpoints, "endpoints.ts"),
        (ContractFileKind::Supporting, "validation.ts"),
        (ContractFileKind::Supporting, "errors.ts"),
    ]
    .into_iter()
    .map(|(kind, name)| ContractStatus {
        kind,
        name: name.to_string(),
        file: format!("contracts/{}", name),
        exists: true,
    })
    .collect()
}

/// Model with every contract present, extracted from the given texts
pub fn make_model(schema: &str, interfaces: &str, endpoints: &str) -> ContractModel {
    ContractModel::new(Some("contracts".to_string()), all_contracts_present())
        .with_schema(extract_schema(schema, SCHEMA_FILE))
        .with_interfaces(extract_interfaces(interfaces, INTERFACES_FILE))
        .with_endpoints(extract_endpoints(endpoints, ENDPOINTS_FILE, "/api", "ENDPOINTS"))
}

/// Literal frontend call
pub fn literal_call(raw: &str, file: &str, line: usize) -> CallSite {
    CallSite {
        raw: raw.to_string(),
        kind: CallKind::Literal,
        file: file.to_string(),
        line,
        column: 1,
    }
}

/// `ENDPOINTS.<key>` reference
pub fn endpoint_call(key: &str, file: &str, line: usize) -> CallSite {
    CallSite {
        raw: format!("ENDPOINTS.{}", key),
        kind: CallKind::EndpointRef {
            key: key.to_string(),
        },
        file: file.to_string(),
        line,
        column: 1,
    }
}

/// Backend route declaration
pub fn route(method: HttpMethod, raw: &str, file: &str, line: usize) -> RouteDeclaration {
    RouteDeclaration {
        method,
        path: normalize_path(raw),
        raw: raw.to_string(),
        file: file.to_string(),
        line,
        column: 1,
    }
}

/// Scan result holding the given calls and routes
pub fn make_scan(calls: Vec<CallSite>, routes: Vec<RouteDeclaration>) -> SourceScan {
    SourceScan {
        calls,
        routes,
        files_scanned: 0,
    }
}

/// Issue codes in order, for compact assertions
pub fn codes(issues: &[Issue]) -> Vec<&'static str> {
    issues.iter().map(|i| i.code()).collect()
}
