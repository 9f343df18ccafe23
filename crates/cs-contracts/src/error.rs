//! Error types for cs-contracts

use thiserror::Error;

/// Contract file access errors.
///
/// Malformed contract content is never an error; it is reported through
/// [`crate::ParseDiagnostic`] instead.
#[derive(Error, Debug)]
pub enum ContractError {
    /// Contract file could not be read (K001)
    #[error("[K001] Failed to read contract file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for ContractError
pub type ContractResult<T> = Result<T, ContractError>;
