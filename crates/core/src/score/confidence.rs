//! Heuristic confidence scoring.
//!
//! Blends cosine similarity with candidate-document richness and metadata
//! completeness into a bounded 0–100 score. Distinct from raw similarity:
//! a long, well-described candidate earns more confidence than a bare one
//! at the same overlap.

use crate::config;
use crate::document::Metadata;
use crate::error::ComputationFailure;
use crate::text::statistics::TextStatistics;

/// Computes the confidence score for one candidate, in [0, 100].
///
/// The running score mixes scales on purpose: the similarity base lives in
/// 0–0.5 and the statistics/metadata bonuses in 0–1, while the very-high
/// overlap bonus is 20 whole points. The final ×100 rescale turns the base
/// into 0–50 points and each bonus into 0–15 points, and pushes any
/// similarity above 0.8 straight into the 100 clamp. Normalizing the
/// scales would change every score; keep the arithmetic as is.
///
/// The statistics bonuses read the two-decimal ratio strings, so the
/// formatting rounding feeds the score exactly as reported.
pub fn confidence_score(
    similarity: f64,
    stats: &TextStatistics,
    metadata: &Metadata,
    submitted_text: &str,
    candidate_text: &str,
) -> Result<f64, ComputationFailure> {
    // Exact-match fast path: identical trimmed texts bypass all other
    // scoring.
    if submitted_text.trim() == candidate_text.trim() {
        return Ok(100.0);
    }

    let mut score = similarity * config::SIMILARITY_BASE_WEIGHT;

    if similarity > config::HIGH_SIMILARITY_THRESHOLD {
        score += config::HIGH_SIMILARITY_BONUS;
    }

    score += (stats.word_count as f64 / config::WORD_COUNT_BONUS_DIVISOR
        * config::WORD_COUNT_BONUS_WEIGHT)
        .min(config::WORD_COUNT_BONUS_CAP);

    let lexical_density = parse_ratio(&stats.lexical_density, "lexical density")?;
    score += lexical_density / 100.0 * config::LEXICAL_DENSITY_BONUS_WEIGHT;

    let words_per_sentence =
        parse_ratio(&stats.average_words_per_sentence, "words per sentence")?;
    score += ((config::SENTENCE_LENGTH_REFERENCE - words_per_sentence).abs()
        / config::SENTENCE_LENGTH_REFERENCE)
        .min(1.0)
        * config::SENTENCE_LENGTH_BONUS_WEIGHT;

    score += metadata.completeness() * config::METADATA_BONUS_WEIGHT;

    Ok(((score * 100.0 * 100.0).round() / 100.0).min(100.0))
}

fn parse_ratio(value: &str, field: &'static str) -> Result<f64, ComputationFailure> {
    value.parse::<f64>().map_err(|err| {
        ComputationFailure::new("confidence", format!("malformed {field} ratio {value:?}: {err}"))
    })
}
