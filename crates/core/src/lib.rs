//! # copytrace-core
//!
//! Similarity-and-confidence scoring pipeline for plagiarism detection:
//! text normalization, term-weight vectors, cosine similarity, and a blended
//! 0–100 confidence score, aggregated into a ranked report.
//!
//! This is the computation crate — no HTTP, no outbound I/O. Candidate
//! documents arrive pre-fetched from the server crate's search collaborator;
//! the report aggregator is the only async entry point (it fans candidate
//! evaluation out across Tokio tasks).

/// Tuning constants: thresholds, bonus weights, limits, and server defaults.
pub mod config;
/// Candidate document types: `Document` and its optional-field `Metadata`.
pub mod document;
/// Error types: per-candidate `ComputationFailure` and `AnalysisError`.
pub mod error;
/// Report assembly: per-candidate fan-out, ranking, and summary statistics.
pub mod report;
/// Scoring primitives: term-weight vectors, cosine similarity, confidence.
pub mod score;
/// Text analysis: tokenization, descriptive statistics, sentiment.
pub mod text;
