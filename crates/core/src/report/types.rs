//! Report data types.
//!
//! A `Report` is constructed once per request, immutable afterwards, and
//! discarded after the response is sent; there is no cross-request state.

use crate::document::Metadata;
use crate::text::sentiment::Sentiment;
use crate::text::statistics::TextStatistics;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Similarity verdict for one candidate, derived during evaluation.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    /// Cosine similarity as a fraction in [0, 1].
    pub similarity: f64,
    /// Blended confidence in [0, 100].
    pub confidence_score: f64,
    /// Whether similarity exceeds the fixed plagiarism threshold.
    pub is_plagiarized: bool,
}

/// One evaluated candidate source, as it appears in the final report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceReport {
    pub url: String,
    pub title: String,
    /// Similarity as a percentage, rounded to two decimals.
    pub similarity: f64,
    pub confidence_score: f64,
    pub is_plagiarized: bool,
    pub snippet: Option<String>,
    pub metadata: Metadata,
    pub text_statistics: TextStatistics,
    pub sentiment: Sentiment,
}

/// Analysis of the submitted text itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnalysis {
    pub text_statistics: TextStatistics,
    pub sentiment: Sentiment,
    /// Number of normalized tokens that survived filtering.
    pub token_count: usize,
    /// Raw character count of the submission, whitespace included.
    pub character_count: usize,
}

/// Aggregate statistics over all surviving candidates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Highest per-source similarity, percent scale.
    pub max_similarity: f64,
    pub max_confidence: f64,
    pub average_similarity: f64,
    pub average_confidence: f64,
    /// Whether the highest similarity crosses the overall percent threshold.
    pub overall_plagiarized: bool,
    /// Sources individually classified as plagiarized.
    pub plagiarized_sources: usize,
    pub total_sources_analyzed: usize,
    /// Sources with confidence above the high-confidence threshold.
    pub high_confidence_sources: usize,
    /// URL of the top-ranked source.
    pub most_likely_source: Option<String>,
    pub most_likely_source_confidence: f64,
}

/// Complete plagiarism report for one submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub submitted: SubmittedAnalysis,
    /// Candidates sorted by confidence, descending; ties keep retrieval
    /// order.
    pub sources: Vec<SourceReport>,
    pub summary: ReportSummary,
    pub generated_at: DateTime<Utc>,
}
