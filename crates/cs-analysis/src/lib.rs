//! cs-analysis: reconciliation of contract artifacts against source code
//!
//! This crate assembles the extracted contracts and the source scan into a
//! read-only [`ContractModel`], runs composable reconciliation passes over
//! it, applies configured severity overrides and renders the result as a
//! [`Report`].

pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod pass;
pub(crate) mod pipeline;
pub(crate) mod report;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use context::{ContractModel, ContractStatus, ReadFailure};
pub use error::{AnalysisError, AnalysisResult};
pub use pass::{
    apply_severity_overrides, OverriddenSeverity, PassManager, ReconcilePass, SeverityOverrides,
};
pub use pipeline::{build_model, reconcile, validate_project};
pub use report::{IssueRecord, Report, Summary};
