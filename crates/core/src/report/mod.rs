//! Report assembly: per-candidate evaluation fan-out, ranking, and summary.

/// Candidate fan-out and report construction.
pub mod aggregator;
/// Report data types: per-source results, summary statistics, envelope.
pub mod types;

pub use aggregator::score_against_candidates;
pub use types::{Report, ReportSummary, SimilarityResult, SourceReport, SubmittedAnalysis};
