//! Normalizing tokenizer with stop word removal.
//!
//! Lowercases the input, treats every character outside the word class
//! (alphanumeric or `_`) as a separator, and drops stop words and
//! single-character tokens. Duplicates and order are preserved; term
//! weighting downstream counts occurrences. Uses a zero-per-token
//! allocation design via byte spans into one lowercased buffer.

use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down",
        "during", "each", "few", "for", "from", "further", "had", "has", "have", "having",
        "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if",
        "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my",
        "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
        "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
        "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
        "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
        "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
        "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
        "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Ordered sequence of normalized tokens derived from one document's text.
/// Owns the lowercased buffer and provides `&str` slices via byte spans, so
/// the whole sequence costs one heap allocation plus the span vector.
pub struct TokenSequence {
    buffer: String,
    spans: Vec<(u32, u32)>, // (start, end) byte offsets into buffer
}

impl TokenSequence {
    /// Returns an iterator over the token `&str` slices, in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(|&(s, e)| &self.buffer[s as usize..e as usize])
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Tokenize text: lowercase, split on non-word characters, remove stop words
/// and single-character tokens.
///
/// Empty or all-separator input yields an empty sequence, which every
/// downstream consumer treats as a valid, maximally dissimilar document
/// rather than an error.
pub fn tokenize(text: &str) -> TokenSequence {
    let buffer = text.to_lowercase();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in buffer.char_indices() {
        if is_word_char(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start {
            push_span(&buffer, s, i, &mut spans);
            start = None;
        }
    }
    // Handle last token (no trailing separator)
    if let Some(s) = start {
        push_span(&buffer, s, buffer.len(), &mut spans);
    }

    TokenSequence { buffer, spans }
}

/// Word characters are alphanumerics plus `_`; everything else separates.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn push_span(buffer: &str, start: usize, end: usize, spans: &mut Vec<(u32, u32)>) {
    let token = &buffer[start..end];
    if token.chars().count() > 1 && !STOP_WORDS.contains(token) {
        spans.push((start as u32, end as u32));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<String> {
        tokenize(text).iter().map(str::to_string).collect()
    }

    #[test]
    fn drops_stop_words_and_lowercases() {
        let words = collect("The quick brown fox jumps over the lazy dog");
        assert!(words.iter().all(|w| w != "the"));
        assert_eq!(words, vec!["quick", "brown", "fox", "jumps", "lazy", "dog"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let words = collect("rust loves rust");
        assert_eq!(words, vec!["rust", "loves", "rust"]);
    }

    #[test]
    fn punctuation_separates_tokens() {
        let words = collect("well-known facts, clearly stated!");
        assert_eq!(words, vec!["well", "known", "facts", "clearly", "stated"]);
    }

    #[test]
    fn underscores_are_word_characters() {
        let words = collect("snake_case stays whole");
        assert_eq!(words, vec!["snake_case", "stays", "whole"]);
    }

    #[test]
    fn single_characters_are_dropped() {
        let words = collect("x marks 1 spot");
        assert_eq!(words, vec!["marks", "spot"]);
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
        assert_eq!(tokenize("").len(), 0);
    }

    #[test]
    fn all_punctuation_yields_empty_sequence() {
        assert!(tokenize("?!... --- ***").is_empty());
    }
}
