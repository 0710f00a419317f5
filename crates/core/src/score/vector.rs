//! Term-weight vectorization.
//!
//! Each document is weighted as its own single-document corpus: no shared
//! vocabulary, no cross-document smoothing, no mutable state between calls.

use crate::text::tokenizer::TokenSequence;
use std::collections::HashMap;

/// Sparse term→weight mapping scoped to a single document. Terms absent
/// from the map have implicit weight 0 when looked up from another vector.
pub type TermVector = HashMap<String, f64>;

/// Builds a term-weight vector from one token sequence.
///
/// The document frequency of every present term is 1 by construction (the
/// corpus is the document itself), so the IDF factor degenerates to the
/// constant `1 + ln(1/2)` and weights stay proportional to raw term counts.
/// The degenerate weighting is deliberate; swapping in a shared-corpus IDF
/// would change every downstream score.
pub fn vectorize(tokens: &TokenSequence) -> TermVector {
    let idf = 1.0 + (1.0_f64 / 2.0).ln();

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for token in tokens.iter() {
        *counts.entry(token).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), f64::from(count) * idf))
        .collect()
}
