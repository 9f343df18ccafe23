//! cs-contracts - Contract extraction for contractsync
//!
//! This crate turns the three declared contract artifacts into typed models:
//! relational tables from the schema file, typed records from the interface
//! file, and path templates from the endpoint table. Extractors are
//! best-effort: they always return a value and report what they could not
//! understand as diagnostics.

pub mod endpoints;
pub mod error;
pub mod extraction;
pub mod interfaces;
pub mod lexer;
pub mod schema;

pub use endpoints::{extract_endpoints, EndpointTable, EndpointTemplate};
pub use error::{ContractError, ContractResult};
pub use extraction::{DiagnosticKind, Extraction, ParseDiagnostic};
pub use interfaces::{extract_interfaces, Field, Interface, InterfaceSet};
pub use schema::{extract_schema, Column, Schema, Table};

use std::path::Path;

/// Read a contract file into memory
pub fn read_contract(path: &Path) -> ContractResult<String> {
    std::fs::read_to_string(path).map_err(|source| ContractError::Read {
        path: path.display().to_string(),
        source,
    })
}
