//! Cosine similarity over sparse term vectors.

use crate::score::vector::TermVector;

/// Cosine similarity of two sparse vectors, in [0, 1].
///
/// The dot product runs over the key union (a key missing from either
/// vector contributes 0) and the two Euclidean magnitudes are computed
/// independently. A zero magnitude on either side yields 0: the
/// empty-vocabulary document is defined as maximally dissimilar, never NaN.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    let dot: f64 = a
        .iter()
        .map(|(term, weight)| weight * b.get(term).copied().unwrap_or(0.0))
        .sum();
    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot / (magnitude_a * magnitude_b)
    }
}

fn magnitude(vector: &TermVector) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}
