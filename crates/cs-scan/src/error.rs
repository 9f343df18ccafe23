//! Error types for cs-scan

use thiserror::Error;

/// Source scanning errors
#[derive(Error, Debug)]
pub enum ScanError {
    /// A configured call or route pattern could not be compiled (S001)
    #[error("[S001] Invalid scan pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias for ScanError
pub type ScanResult<T> = Result<T, ScanError>;
