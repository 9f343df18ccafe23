//! cs-scan - Source scanning for contractsync
//!
//! This crate walks the frontend and backend source roots and pattern-matches
//! API call sites and route declarations line by line. Files are read on a
//! bounded worker pool and the results are merged in a stable order.

pub mod discover;
pub mod error;
pub mod model;
pub mod patterns;
pub mod scanner;

pub use discover::{discover_files, DEFAULT_EXCLUDED_DIRS};
pub use error::{ScanError, ScanResult};
pub use model::{CallKind, CallSite, HttpMethod, RouteDeclaration, SourceScan};
pub use patterns::ScanPatterns;
pub use scanner::scan_sources;
