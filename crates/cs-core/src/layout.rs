//! Artifact discovery: where the contracts and the source roots live.
//!
//! Explicit configuration always wins. The ranked candidate lists below are
//! only consulted for options the configuration leaves unset.

use crate::config::{ContractsConfig, LayoutConfig};
use crate::error::{CoreError, CoreResult};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Contract directory candidates, first existing wins
pub const DEFAULT_CONTRACTS_DIRS: &[&str] = &[
    "contracts",
    "packages/shared/src/contracts",
    "packages/shared/contracts",
    "src/contracts",
];

/// Frontend source root candidates, every existing one is scanned
pub const DEFAULT_FRONTEND_ROOTS: &[&str] = &["apps/web/src", "src", "frontend/src"];

/// Backend source root candidates, every existing one is scanned
pub const DEFAULT_BACKEND_ROOTS: &[&str] =
    &["apps/server/src", "server/src", "backend/src", "src/routes"];

/// Role of a file inside the contracts directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractFileKind {
    /// Relational schema (e.g. database.sql)
    Schema,
    /// Typed interfaces (e.g. types.ts)
    Interfaces,
    /// Endpoint table (e.g. endpoints.ts)
    Endpoints,
    /// Required but not parsed (e.g. validation.ts)
    Supporting,
}

/// A required contract file and whether it is present
#[derive(Debug, Clone, Serialize)]
pub struct ContractFile {
    pub kind: ContractFileKind,
    pub name: String,
    pub path: PathBuf,
    pub exists: bool,
}

/// Resolved project directories
#[derive(Debug, Clone, Serialize)]
pub struct ProjectLayout {
    /// Absolute project root
    pub root: PathBuf,
    /// Contracts directory, if one was found
    pub contracts_dir: Option<PathBuf>,
    /// Existing frontend source roots
    pub frontend_roots: Vec<PathBuf>,
    /// Existing backend source roots
    pub backend_roots: Vec<PathBuf>,
}

impl ProjectLayout {
    /// Resolve the layout of the project at `root`
    pub fn locate(root: &Path, config: &LayoutConfig) -> CoreResult<Self> {
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            std::env::current_dir()?.join(root)
        };

        if !root.is_dir() {
            return Err(CoreError::ProjectNotFound {
                path: root.display().to_string(),
            });
        }

        let contracts_dir = match &config.contracts_dir {
            Some(dir) => {
                let path = root.join(dir);
                if path.is_dir() {
                    Some(path)
                } else {
                    log::warn!("Configured contracts_dir {} does not exist", path.display());
                    None
                }
            }
            None => DEFAULT_CONTRACTS_DIRS
                .iter()
                .map(|candidate| root.join(candidate))
                .find(|path| path.is_dir()),
        };

        let frontend_roots = resolve_roots(&root, &config.frontend_roots, DEFAULT_FRONTEND_ROOTS);
        let backend_roots = resolve_roots(&root, &config.backend_roots, DEFAULT_BACKEND_ROOTS);

        log::debug!(
            "Layout: contracts={:?}, {} frontend root(s), {} backend root(s)",
            contracts_dir,
            frontend_roots.len(),
            backend_roots.len()
        );

        Ok(Self {
            root,
            contracts_dir,
            frontend_roots,
            backend_roots,
        })
    }

    /// Layout for validating a contracts directory on its own.
    ///
    /// The project root is the parent of `contracts_dir`.
    pub fn for_contracts_dir(contracts_dir: &Path, config: &LayoutConfig) -> CoreResult<Self> {
        let contracts_dir = if contracts_dir.is_absolute() {
            contracts_dir.to_path_buf()
        } else {
            std::env::current_dir()?.join(contracts_dir)
        };
        let root = contracts_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| contracts_dir.clone());

        let mut layout = Self::locate(&root, config)?;
        layout.contracts_dir = contracts_dir.is_dir().then_some(contracts_dir);
        Ok(layout)
    }

    /// Every required contract file, or nothing when there is no contracts dir
    pub fn contract_files(&self, contracts: &ContractsConfig) -> Vec<ContractFile> {
        let Some(dir) = &self.contracts_dir else {
            return Vec::new();
        };

        let parsed = [
            (ContractFileKind::Schema, &contracts.schema_file),
            (ContractFileKind::Interfaces, &contracts.interfaces_file),
            (ContractFileKind::Endpoints, &contracts.endpoints_file),
        ];
        let supporting = contracts
            .required_files
            .iter()
            .map(|name| (ContractFileKind::Supporting, name));

        parsed
            .into_iter()
            .chain(supporting)
            .map(|(kind, name)| {
                let path = dir.join(name);
                ContractFile {
                    kind,
                    name: name.clone(),
                    exists: path.is_file(),
                    path,
                }
            })
            .collect()
    }

    /// Path of a parsed contract file, only if it exists
    pub fn existing_contract(
        &self,
        contracts: &ContractsConfig,
        kind: ContractFileKind,
    ) -> Option<PathBuf> {
        self.contract_files(contracts)
            .into_iter()
            .find(|f| f.kind == kind && f.exists)
            .map(|f| f.path)
    }

    /// Render a path relative to the project root for reports
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn resolve_roots(root: &Path, configured: &[String], defaults: &[&str]) -> Vec<PathBuf> {
    if configured.is_empty() {
        return defaults
            .iter()
            .map(|candidate| root.join(candidate))
            .filter(|path| path.is_dir())
            .collect();
    }

    configured
        .iter()
        .map(|dir| root.join(dir))
        .filter(|path| {
            let exists = path.is_dir();
            if !exists {
                log::warn!("Configured source root {} does not exist", path.display());
            }
            exists
        })
        .collect()
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
