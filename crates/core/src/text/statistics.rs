//! Descriptive text statistics.
//!
//! Counts words, characters, sentences, and vocabulary over raw text.
//! Unique words are case-sensitive, unnormalized whitespace segments,
//! intentionally a different vocabulary than the tokenizer's, computed in
//! one pass over the raw text.

use serde::Serialize;
use std::collections::HashSet;

/// Immutable snapshot of descriptive metrics over one raw text.
///
/// The three ratio fields are pre-formatted to exactly two decimals so the
/// output is stable and comparable across runs. Consumers that need the
/// numeric value parse the rounded string back; the rounding is part of
/// the contract, not a display concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    /// Whitespace-delimited segments, floored to 1.
    pub word_count: usize,
    /// Characters excluding whitespace.
    pub character_count: usize,
    /// Segments split on `.` `!` `?` (consecutive delimiters collapse),
    /// floored to 1.
    pub sentence_count: usize,
    /// Distinct whitespace-delimited segments, case-sensitive.
    pub unique_word_count: usize,
    /// `character_count / word_count`, two decimals.
    pub average_word_length: String,
    /// `unique_word_count / word_count × 100`, two decimals.
    pub lexical_density: String,
    /// `word_count / sentence_count`, two decimals.
    pub average_words_per_sentence: String,
}

impl TextStatistics {
    /// The all-zero statistics value returned for empty input.
    pub fn zero() -> Self {
        Self {
            word_count: 0,
            character_count: 0,
            sentence_count: 0,
            unique_word_count: 0,
            average_word_length: "0.00".to_string(),
            lexical_density: "0.00".to_string(),
            average_words_per_sentence: "0.00".to_string(),
        }
    }
}

/// Computes descriptive statistics over raw text.
///
/// Word and sentence counts are floored to 1 so the ratio fields never
/// divide by zero; empty input short-circuits to [`TextStatistics::zero`].
pub fn analyze(text: &str) -> TextStatistics {
    if text.is_empty() {
        return TextStatistics::zero();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let unique: HashSet<&str> = words.iter().copied().collect();
    let character_count = text.chars().filter(|c| !c.is_whitespace()).count();
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|segment| !segment.is_empty())
        .count();

    let word_count = words.len().max(1);
    let sentence_count = sentences.max(1);

    TextStatistics {
        word_count,
        character_count,
        sentence_count,
        unique_word_count: unique.len(),
        average_word_length: format!("{:.2}", character_count as f64 / word_count as f64),
        lexical_density: format!(
            "{:.2}",
            unique.len() as f64 / word_count as f64 * 100.0
        ),
        average_words_per_sentence: format!(
            "{:.2}",
            word_count as f64 / sentence_count as f64
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(analyze(""), TextStatistics::zero());
    }

    #[test]
    fn single_sentence() {
        let stats = analyze("The quick brown fox jumps.");
        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.character_count, 22);
        assert_eq!(stats.unique_word_count, 5);
        assert_eq!(stats.average_word_length, "4.40");
        assert_eq!(stats.lexical_density, "100.00");
        assert_eq!(stats.average_words_per_sentence, "5.00");
    }

    #[test]
    fn consecutive_delimiters_collapse() {
        let stats = analyze("One sentence!! Another?! And a third...");
        assert_eq!(stats.sentence_count, 3);
    }

    #[test]
    fn unique_words_are_case_sensitive() {
        let stats = analyze("Word word WORD word");
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.unique_word_count, 3);
        assert_eq!(stats.lexical_density, "75.00");
    }

    #[test]
    fn whitespace_only_floors_counts() {
        let stats = analyze("   ");
        assert_eq!(stats.word_count, 1);
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.character_count, 0);
        assert_eq!(stats.average_word_length, "0.00");
    }

    #[test]
    fn character_count_excludes_whitespace() {
        let stats = analyze("a b\tc\nd");
        assert_eq!(stats.character_count, 4);
        assert_eq!(stats.word_count, 4);
    }
}
