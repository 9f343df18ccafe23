//! Contract model: everything the reconciliation passes look at

use cs_contracts::{EndpointTable, Extraction, Interface, InterfaceSet, Schema, Table};
use cs_core::{Config, ContractFileKind};
use cs_scan::SourceScan;
use serde::Serialize;

/// A required contract file and whether it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractStatus {
    pub kind: ContractFileKind,
    pub name: String,
    /// Path relative to the project root
    pub file: String,
    pub exists: bool,
}

/// A contract file that exists but could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadFailure {
    pub kind: ContractFileKind,
    pub file: String,
    pub message: String,
}

/// Read-only view of one project's contracts and sources.
///
/// Each parsed artifact is `None` when its file is missing or unreadable;
/// passes treat that as "nothing to compare" and leave the reporting to the
/// structural checks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContractModel {
    pub(crate) contracts_dir: Option<String>,
    pub(crate) contract_files: Vec<ContractStatus>,
    pub(crate) schema: Option<Extraction<Schema>>,
    pub(crate) interfaces: Option<Extraction<InterfaceSet>>,
    pub(crate) endpoints: Option<Extraction<EndpointTable>>,
    pub(crate) read_failures: Vec<ReadFailure>,
    pub(crate) scan: SourceScan,
}

impl ContractModel {
    /// Create a model for a project whose contracts live in `contracts_dir`
    pub fn new(contracts_dir: Option<String>, contract_files: Vec<ContractStatus>) -> Self {
        Self {
            contracts_dir,
            contract_files,
            ..Self::default()
        }
    }

    pub fn with_schema(mut self, schema: Extraction<Schema>) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_interfaces(mut self, interfaces: Extraction<InterfaceSet>) -> Self {
        self.interfaces = Some(interfaces);
        self
    }

    pub fn with_endpoints(mut self, endpoints: Extraction<EndpointTable>) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    pub fn with_scan(mut self, scan: SourceScan) -> Self {
        self.scan = scan;
        self
    }

    pub fn with_read_failure(mut self, failure: ReadFailure) -> Self {
        self.read_failures.push(failure);
        self
    }

    /// Contracts directory relative to the project root
    pub fn contracts_dir(&self) -> Option<&str> {
        self.contracts_dir.as_deref()
    }

    pub fn contract_files(&self) -> &[ContractStatus] {
        &self.contract_files
    }

    pub fn schema(&self) -> Option<&Extraction<Schema>> {
        self.schema.as_ref()
    }

    pub fn interfaces(&self) -> Option<&Extraction<InterfaceSet>> {
        self.interfaces.as_ref()
    }

    pub fn endpoints(&self) -> Option<&Extraction<EndpointTable>> {
        self.endpoints.as_ref()
    }

    pub fn read_failures(&self) -> &[ReadFailure] {
        &self.read_failures
    }

    pub fn scan(&self) -> &SourceScan {
        &self.scan
    }

    /// Declared tables, empty when there is no schema
    pub fn tables(&self) -> &[Table] {
        self.schema
            .as_ref()
            .map(|s| s.value.tables.as_slice())
            .unwrap_or_default()
    }

    /// The interface projecting `table`, if any.
    ///
    /// Candidate names are tried in precedence order and the first declared
    /// one wins.
    pub fn projection(&self, table: &Table, config: &Config) -> Option<&Interface> {
        let interfaces = &self.interfaces.as_ref()?.value;
        cs_core::interface_candidates(&table.name, config.interface_alias(&table.name))
            .iter()
            .find_map(|name| interfaces.get(name))
    }
}
