//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling
//! via Axum; field names are camelCase on the wire.

use copytrace_core::report::{Report, ReportSummary, SourceReport};
use copytrace_core::text::sentiment::Sentiment;
use copytrace_core::text::statistics::TextStatistics;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /plagiarism`.
#[derive(Debug, Deserialize)]
pub struct PlagiarismParams {
    pub content: Option<String>,
}

/// Envelope for a successful plagiarism check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismResponse {
    pub status: &'static str,
    pub data: ReportData,
}

/// The report payload: the analyzed submission, the per-source results,
/// and the generation timestamp.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub user_provided_content: UserContent,
    pub plagiarism_results: PlagiarismResults,
    pub timestamp: String,
}

/// Echo of the submission with its own analysis attached.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContent {
    pub content: String,
    pub text_stats: TextStatistics,
    pub sentiment: Sentiment,
    /// Normalized token count (after stop word and length filtering).
    pub word_count: usize,
    /// Raw character count, whitespace included.
    pub character_count: usize,
}

/// Ranked per-source results plus summary statistics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismResults {
    pub sources: Vec<SourceReport>,
    pub summary: ReportSummary,
}

impl PlagiarismResponse {
    /// Maps a core report into the wire envelope.
    pub fn from_report(content: &str, report: Report) -> Self {
        Self {
            status: "success",
            data: ReportData {
                user_provided_content: UserContent {
                    content: content.to_string(),
                    text_stats: report.submitted.text_statistics,
                    sentiment: report.submitted.sentiment,
                    word_count: report.submitted.token_count,
                    character_count: report.submitted.character_count,
                },
                plagiarism_results: PlagiarismResults {
                    sources: report.sources,
                    summary: report.summary,
                },
                timestamp: report.generated_at.to_rfc3339(),
            },
        }
    }
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    pub timestamp: String,
}
