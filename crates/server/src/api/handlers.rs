//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::{HealthResponse, PlagiarismParams, PlagiarismResponse};
use crate::fetch::SourceFetcher;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use copytrace_core::config;
use copytrace_core::error::AnalysisError;
use copytrace_core::report::score_against_candidates;
use copytrace_core::text::tokenizer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::time::Instant;
use uuid::Uuid;

/// Shared application state passed to every handler via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState<F> {
    /// Outbound search-and-fetch collaborator.
    pub fetcher: F,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

/// `GET /plagiarism?content=...`
pub async fn check_plagiarism<F: SourceFetcher>(
    State(state): State<AppState<F>>,
    Query(params): Query<PlagiarismParams>,
) -> Result<Json<PlagiarismResponse>, ApiError> {
    let started = Instant::now();
    let request_id = Uuid::new_v4();

    let content = validate_content(params.content.as_deref())?;
    tracing::info!(
        %request_id,
        chars = content.chars().count(),
        "plagiarism check started"
    );

    let query: String = content
        .chars()
        .take(config::SEARCH_QUERY_PREFIX_CHARS)
        .collect();
    let candidates = state.fetcher.search_and_fetch(&query).await;
    metrics::record_candidates_fetched(candidates.len());

    let report = match score_against_candidates(content, candidates).await {
        Ok(report) => report,
        Err(AnalysisError::InsufficientSources) => {
            metrics::record_scan("insufficient_sources");
            tracing::info!(%request_id, "no usable comparison sources");
            return Err(ApiError::NotFound("No comparison sources found".into()));
        }
    };

    metrics::record_scan(if report.summary.overall_plagiarized {
        "plagiarized"
    } else {
        "clean"
    });
    metrics::record_scan_duration(started.elapsed());
    tracing::info!(
        %request_id,
        sources = report.summary.total_sources_analyzed,
        max_similarity = report.summary.max_similarity,
        plagiarized = report.summary.overall_plagiarized,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "plagiarism check finished"
    );

    Ok(Json(PlagiarismResponse::from_report(content, report)))
}

fn validate_content(content: Option<&str>) -> Result<&str, ApiError> {
    let content =
        content.ok_or_else(|| ApiError::BadRequest("Content parameter is required".into()))?;
    if content.chars().count() < config::MIN_CONTENT_LEN {
        return Err(ApiError::BadRequest(format!(
            "Content must be at least {} characters long",
            config::MIN_CONTENT_LEN
        )));
    }
    if tokenizer::tokenize(content).is_empty() {
        return Err(ApiError::BadRequest(
            "No valid content to analyze after processing".into(),
        ));
    }
    Ok(content)
}

/// `GET /health`
pub async fn health<F: SourceFetcher>(
    State(state): State<AppState<F>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime_secs: state.start_time.elapsed().as_secs(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// `GET /metrics` (Prometheus exposition)
pub async fn render_metrics<F: SourceFetcher>(State(state): State<AppState<F>>) -> String {
    state.prometheus_handle.render()
}

/// Fallback for unknown routes.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".into())
}
