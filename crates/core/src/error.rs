//! Error types for the scoring pipeline.
//!
//! No fault in one candidate's evaluation may abort the batch: components
//! return `Result` and the aggregator drops the failing candidate. The only
//! error surfaced past the core boundary is `InsufficientSources`.

use std::fmt;

/// A fault inside one candidate's normalization/vectorization/scoring
/// pipeline.
///
/// Recovered locally by the report aggregator: the candidate is excluded
/// from the result set and its siblings run to completion.
#[derive(Debug, Clone)]
pub struct ComputationFailure {
    /// Pipeline stage that faulted.
    pub stage: &'static str,
    /// Human-readable cause.
    pub detail: String,
}

impl ComputationFailure {
    pub fn new(stage: &'static str, detail: impl Into<String>) -> Self {
        Self {
            stage,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ComputationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "computation failed in {}: {}", self.stage, self.detail)
    }
}

impl std::error::Error for ComputationFailure {}

/// Errors surfaced by the report aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// No usable candidate sources: either none were supplied, or every
    /// candidate failed evaluation. A "not found"-class result, not a
    /// server fault.
    InsufficientSources,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InsufficientSources => {
                write!(f, "no usable comparison sources")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
