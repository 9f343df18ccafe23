//! cs-core - Core library for contractsync
//!
//! This crate provides the configuration file, the issue model shared by
//! every reconciliation pass, path and identifier normalization, and
//! discovery of the contract and source directories inside a project.

pub mod config;
pub mod error;
pub mod issue;
pub mod layout;
pub mod naming;
pub mod path_template;

pub use config::{ChecksConfig, Config, ConfigSeverity, ContractsConfig, LayoutConfig, ScanConfig};
pub use error::{CoreError, CoreResult};
pub use issue::{Category, Issue, Severity};
pub use layout::{ContractFile, ContractFileKind, ProjectLayout};
pub use naming::{fold_case, interface_candidates, snake_to_camel, title_case};
pub use path_template::{has_prefix, is_normalized, normalize_path, PARAM_PLACEHOLDER};
