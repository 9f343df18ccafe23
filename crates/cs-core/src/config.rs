//! Configuration types and parsing for contractsync.yml

use crate::error::{CoreError, CoreResult};
use crate::issue::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Config file names probed in a project root, in order
pub const CONFIG_FILE_NAMES: &[&str] = &["contractsync.yml", "contractsync.yaml"];

/// Main project configuration from contractsync.yml
///
/// Every section is optional; a project without a config file validates
/// with [`Config::default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where contracts and source roots live
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Contract file names and the endpoint table constant
    #[serde(default)]
    pub contracts: ContractsConfig,

    /// Source scanning patterns
    #[serde(default)]
    pub scan: ScanConfig,

    /// Explicit table → interface names, consulted before the naming heuristic
    #[serde(default)]
    pub interface_aliases: HashMap<String, String>,

    /// Which reconciliation checks run
    #[serde(default)]
    pub checks: ChecksConfig,

    /// Override default severities for specific issue codes.
    ///
    /// Keys are issue code strings (e.g. "C006").
    /// Values are severity levels: info, warning, error, or off.
    #[serde(default)]
    pub severity_overrides: HashMap<String, ConfigSeverity>,
}

/// Directory layout overrides.
///
/// Relative paths are resolved against the project root. When a field is
/// left empty the locator falls back to its ranked list of conventional
/// locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Directory holding the contract files
    #[serde(default)]
    pub contracts_dir: Option<String>,

    /// Frontend source roots
    #[serde(default)]
    pub frontend_roots: Vec<String>,

    /// Backend source roots
    #[serde(default)]
    pub backend_roots: Vec<String>,

    /// Extra directory names skipped while walking source roots
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
}

/// Contract file names inside the contracts directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractsConfig {
    /// Relational schema file
    #[serde(default = "default_schema_file")]
    pub schema_file: String,

    /// Typed interface file
    #[serde(default = "default_interfaces_file")]
    pub interfaces_file: String,

    /// Endpoint table file
    #[serde(default = "default_endpoints_file")]
    pub endpoints_file: String,

    /// Additional files that must exist but are not parsed
    #[serde(default = "default_required_files")]
    pub required_files: Vec<String>,

    /// Name of the endpoint table constant (e.g. `ENDPOINTS`)
    #[serde(default = "default_endpoint_table")]
    pub endpoint_table: String,
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            schema_file: default_schema_file(),
            interfaces_file: default_interfaces_file(),
            endpoints_file: default_endpoints_file(),
            required_files: default_required_files(),
            endpoint_table: default_endpoint_table(),
        }
    }
}

/// Source scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Path prefix identifying API calls (e.g. `/api`)
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Free functions taking a URL as first argument (e.g. `fetch`)
    #[serde(default = "default_fetch_functions")]
    pub fetch_functions: Vec<String>,

    /// Client objects whose methods take a URL as first argument
    #[serde(default = "default_http_clients")]
    pub http_clients: Vec<String>,

    /// Backend objects that declare routes (e.g. `router`, `app`)
    #[serde(default = "default_route_receivers")]
    pub route_receivers: Vec<String>,

    /// File extensions scanned under frontend roots
    #[serde(default = "default_frontend_extensions")]
    pub frontend_extensions: Vec<String>,

    /// File extensions scanned under backend roots
    #[serde(default = "default_backend_extensions")]
    pub backend_extensions: Vec<String>,

    /// Size of the file-reading worker pool
    #[serde(default = "default_threads")]
    pub threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            api_prefix: default_api_prefix(),
            fetch_functions: default_fetch_functions(),
            http_clients: default_http_clients(),
            route_receivers: default_route_receivers(),
            frontend_extensions: default_frontend_extensions(),
            backend_extensions: default_backend_extensions(),
            threads: default_threads(),
        }
    }
}

/// Toggles for individual reconciliation checks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecksConfig {
    /// Compare schema tables against interfaces (default: true)
    #[serde(default = "default_enabled")]
    pub type_sync: bool,

    /// Compare frontend calls against backend routes (default: true)
    #[serde(default = "default_enabled")]
    pub routes: bool,

    /// Report nullability disagreements between columns and fields (default: false)
    #[serde(default)]
    pub nullability: bool,

    /// Require `ENABLE ROW LEVEL SECURITY` for every table (default: false)
    #[serde(default)]
    pub row_level_security: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            type_sync: true,
            routes: true,
            nullability: false,
            row_level_security: false,
        }
    }
}

/// Severity level for issue overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSeverity {
    /// Informational: no action required
    Info,
    /// Warning: shown but never fails the run
    Warning,
    /// Error: fails the run
    Error,
    /// Disabled: suppress the issue entirely
    Off,
}

fn default_schema_file() -> String {
    "database.sql".to_string()
}

fn default_interfaces_file() -> String {
    "types.ts".to_string()
}

fn default_endpoints_file() -> String {
    "endpoints.ts".to_string()
}

fn default_required_files() -> Vec<String> {
    vec!["validation.ts".to_string(), "errors.ts".to_string()]
}

fn default_endpoint_table() -> String {
    "ENDPOINTS".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_fetch_functions() -> Vec<String> {
    vec!["fetch".to_string()]
}

fn default_http_clients() -> Vec<String> {
    vec!["axios".to_string(), "api".to_string()]
}

fn default_route_receivers() -> Vec<String> {
    vec!["router".to_string(), "app".to_string()]
}

fn default_frontend_extensions() -> Vec<String> {
    vec!["ts".to_string(), "tsx".to_string()]
}

fn default_backend_extensions() -> Vec<String> {
    vec!["ts".to_string()]
}

fn default_threads() -> usize {
    8
}

fn default_enabled() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory.
    ///
    /// Looks for contractsync.yml or contractsync.yaml and falls back to the
    /// default configuration when neither exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file in {}, using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    /// Return the config file path inside `dir`, if one exists
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if !self.scan.api_prefix.starts_with('/') {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "scan.api_prefix must start with '/', found '{}'",
                    self.scan.api_prefix
                ),
            });
        }

        if self.scan.threads == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "scan.threads must be at least 1".to_string(),
            });
        }

        if self.contracts.endpoint_table.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "contracts.endpoint_table cannot be empty".to_string(),
            });
        }

        for code in self.severity_overrides.keys() {
            if Category::from_code(code).is_none() {
                let valid: Vec<&str> = Category::ALL.iter().map(|c| c.code()).collect();
                return Err(CoreError::ConfigInvalid {
                    message: format!(
                        "Unknown issue code '{}' in severity_overrides. Valid codes: {}",
                        code,
                        valid.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }

    /// Explicit interface name configured for a table
    pub fn interface_alias(&self, table: &str) -> Option<&str> {
        self.interface_aliases.get(table).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
