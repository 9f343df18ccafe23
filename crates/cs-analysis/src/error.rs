//! Error types for cs-analysis

use thiserror::Error;

/// Analysis error type
///
/// Bad contracts and drifting sources never produce an error; they become
/// issues. Only failures to set up the run itself end up here.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// AE001: Source scan could not be set up
    #[error("[AE001] Source scan failed: {0}")]
    Scan(#[from] cs_scan::ScanError),
}

/// Result type alias for AnalysisError
pub type AnalysisResult<T> = Result<T, AnalysisError>;
