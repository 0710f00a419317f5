//! Candidate fan-out and report construction.

use crate::config;
use crate::document::Document;
use crate::error::{AnalysisError, ComputationFailure};
use crate::report::types::{
    Report, ReportSummary, SimilarityResult, SourceReport, SubmittedAnalysis,
};
use crate::score::confidence::confidence_score;
use crate::score::similarity::cosine;
use crate::score::vector::{vectorize, TermVector};
use crate::text::{sentiment, statistics, tokenizer};
use chrono::Utc;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Scores one submitted text against a set of candidate documents.
///
/// The submitted text is tokenized and vectorized once; each candidate is
/// then evaluated on its own task against the shared read-only vector.
/// Evaluations are mutually independent and are all awaited before
/// aggregation; a failing (or panicking) candidate is dropped from the
/// result set and its siblings run to completion. With no candidates, or
/// none surviving, the caller gets [`AnalysisError::InsufficientSources`]
/// instead of a degenerate report.
pub async fn score_against_candidates(
    submitted_text: &str,
    candidates: Vec<Document>,
) -> Result<Report, AnalysisError> {
    let submitted_tokens = tokenizer::tokenize(submitted_text);
    let submitted = SubmittedAnalysis {
        text_statistics: statistics::analyze(submitted_text),
        sentiment: sentiment::analyze(submitted_text),
        token_count: submitted_tokens.len(),
        character_count: submitted_text.chars().count(),
    };

    if candidates.is_empty() {
        return Err(AnalysisError::InsufficientSources);
    }

    let submitted_vector = Arc::new(vectorize(&submitted_tokens));
    let submitted_text: Arc<str> = Arc::from(submitted_text);

    let mut tasks = JoinSet::new();
    for (index, candidate) in candidates.into_iter().enumerate() {
        let vector = Arc::clone(&submitted_vector);
        let text = Arc::clone(&submitted_text);
        tasks.spawn(async move { (index, evaluate_candidate(&text, &vector, candidate)) });
    }

    let mut survivors: Vec<(usize, SourceReport)> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, Ok(source))) => survivors.push((index, source)),
            Ok((index, Err(failure))) => {
                tracing::warn!(candidate = index, error = %failure, "dropping candidate");
            }
            Err(join_error) => {
                tracing::warn!(error = %join_error, "dropping candidate: task failed");
            }
        }
    }

    if survivors.is_empty() {
        return Err(AnalysisError::InsufficientSources);
    }

    // Descending confidence; equal scores keep the original retrieval
    // order via the index key.
    survivors.sort_by_key(|(index, source)| {
        (Reverse(OrderedFloat(source.confidence_score)), *index)
    });
    let sources: Vec<SourceReport> = survivors.into_iter().map(|(_, source)| source).collect();

    let summary = summarize(&sources);

    Ok(Report {
        submitted,
        sources,
        summary,
        generated_at: Utc::now(),
    })
}

/// Evaluates one candidate against the precomputed submitted vector.
fn evaluate_candidate(
    submitted_text: &str,
    submitted_vector: &TermVector,
    candidate: Document,
) -> Result<SourceReport, ComputationFailure> {
    let tokens = tokenizer::tokenize(&candidate.raw_text);
    let candidate_vector = vectorize(&tokens);
    let similarity = cosine(submitted_vector, &candidate_vector);

    let stats = statistics::analyze(&candidate.raw_text);
    let confidence = confidence_score(
        similarity,
        &stats,
        &candidate.metadata,
        submitted_text,
        &candidate.raw_text,
    )?;

    let verdict = SimilarityResult {
        similarity,
        confidence_score: confidence,
        is_plagiarized: similarity > config::PLAGIARISM_THRESHOLD,
    };

    Ok(SourceReport {
        url: candidate.url,
        title: candidate.title,
        similarity: round2(verdict.similarity * 100.0),
        confidence_score: verdict.confidence_score,
        is_plagiarized: verdict.is_plagiarized,
        snippet: candidate.snippet,
        metadata: candidate.metadata,
        text_statistics: stats,
        sentiment: sentiment::analyze(&candidate.raw_text),
    })
}

fn summarize(sources: &[SourceReport]) -> ReportSummary {
    let total = sources.len();
    let max_similarity = sources.iter().map(|s| s.similarity).fold(0.0, f64::max);
    let max_confidence = sources.iter().map(|s| s.confidence_score).fold(0.0, f64::max);
    let average_similarity =
        round2(sources.iter().map(|s| s.similarity).sum::<f64>() / total as f64);
    let average_confidence =
        round2(sources.iter().map(|s| s.confidence_score).sum::<f64>() / total as f64);

    ReportSummary {
        max_similarity,
        max_confidence,
        average_similarity,
        average_confidence,
        overall_plagiarized: max_similarity > config::OVERALL_PLAGIARISM_THRESHOLD_PCT,
        plagiarized_sources: sources.iter().filter(|s| s.is_plagiarized).count(),
        total_sources_analyzed: total,
        high_confidence_sources: sources
            .iter()
            .filter(|s| s.confidence_score > config::HIGH_CONFIDENCE_THRESHOLD)
            .count(),
        most_likely_source: sources.first().map(|s| s.url.clone()),
        most_likely_source_confidence: sources.first().map_or(0.0, |s| s.confidence_score),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
