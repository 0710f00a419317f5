//! Lexicon-based sentiment scoring.
//!
//! Scores raw text against an embedded AFINN-style valence table. The
//! result is attached to reports as an enrichment field only — confidence
//! scoring never reads it, so the lexicon can be swapped without touching
//! any numeric contract.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Word valences in -5..=5, a subset of the AFINN wordlist covering common
/// sentiment-bearing English words.
static VALENCES: &[(&str, i32)] = &[
    ("abandoned", -2),
    ("abuse", -3),
    ("accident", -2),
    ("admire", 3),
    ("adorable", 3),
    ("advantage", 2),
    ("afraid", -2),
    ("aggressive", -2),
    ("alarm", -2),
    ("amazing", 4),
    ("anger", -3),
    ("angry", -3),
    ("annoy", -2),
    ("anxious", -2),
    ("appreciate", 2),
    ("ashamed", -2),
    ("attack", -1),
    ("award", 3),
    ("awesome", 4),
    ("awful", -3),
    ("bad", -3),
    ("beautiful", 3),
    ("benefit", 2),
    ("best", 3),
    ("betray", -3),
    ("bless", 2),
    ("boring", -3),
    ("brave", 2),
    ("brilliant", 4),
    ("broken", -1),
    ("calm", 2),
    ("celebrate", 3),
    ("charm", 3),
    ("cheat", -3),
    ("cheerful", 2),
    ("clean", 2),
    ("clever", 2),
    ("comfort", 2),
    ("confident", 2),
    ("confused", -2),
    ("crash", -2),
    ("crisis", -3),
    ("cruel", -3),
    ("cry", -1),
    ("damage", -3),
    ("danger", -2),
    ("dead", -3),
    ("defeat", -2),
    ("delight", 3),
    ("depressed", -2),
    ("destroy", -3),
    ("die", -3),
    ("dirty", -2),
    ("disappointed", -2),
    ("disaster", -3),
    ("dishonest", -2),
    ("doubt", -1),
    ("dream", 1),
    ("eager", 2),
    ("effective", 2),
    ("embarrassed", -2),
    ("empty", -1),
    ("encourage", 2),
    ("enjoy", 2),
    ("enthusiastic", 3),
    ("evil", -3),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("fail", -2),
    ("failure", -2),
    ("fake", -3),
    ("fantastic", 4),
    ("fear", -2),
    ("fine", 2),
    ("fraud", -4),
    ("free", 1),
    ("fresh", 1),
    ("friendly", 2),
    ("fun", 4),
    ("funny", 4),
    ("generous", 2),
    ("gift", 2),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("greed", -3),
    ("grief", -2),
    ("guilty", -3),
    ("happy", 3),
    ("harm", -2),
    ("hate", -3),
    ("hell", -4),
    ("help", 2),
    ("honest", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("horrible", -3),
    ("hurt", -2),
    ("ignore", -1),
    ("important", 2),
    ("impressive", 3),
    ("improve", 2),
    ("innovative", 2),
    ("interesting", 2),
    ("jealous", -2),
    ("joy", 3),
    ("kill", -3),
    ("kind", 2),
    ("laugh", 1),
    ("lazy", -1),
    ("liar", -3),
    ("lie", -2),
    ("like", 2),
    ("lonely", -2),
    ("lose", -3),
    ("loss", -3),
    ("love", 3),
    ("lucky", 3),
    ("mad", -3),
    ("miracle", 4),
    ("mistake", -2),
    ("nice", 3),
    ("noble", 2),
    ("pain", -2),
    ("panic", -3),
    ("peace", 2),
    ("perfect", 3),
    ("pleasant", 3),
    ("pleasure", 3),
    ("poor", -2),
    ("popular", 3),
    ("positive", 2),
    ("powerful", 2),
    ("praise", 3),
    ("pretty", 1),
    ("problem", -2),
    ("progress", 2),
    ("promise", 1),
    ("protect", 1),
    ("proud", 2),
    ("rage", -2),
    ("reject", -1),
    ("relax", 2),
    ("rich", 2),
    ("ruin", -2),
    ("sad", -2),
    ("safe", 1),
    ("satisfied", 2),
    ("save", 2),
    ("scam", -2),
    ("scared", -2),
    ("secure", 2),
    ("sick", -2),
    ("smart", 1),
    ("smile", 2),
    ("solid", 2),
    ("sorry", -1),
    ("strong", 2),
    ("stupid", -2),
    ("success", 2),
    ("successful", 3),
    ("suffer", -2),
    ("super", 3),
    ("superb", 5),
    ("support", 2),
    ("terrible", -3),
    ("terror", -3),
    ("thank", 2),
    ("threat", -2),
    ("tired", -2),
    ("tragedy", -2),
    ("trust", 1),
    ("ugly", -3),
    ("unhappy", -2),
    ("useful", 2),
    ("useless", -2),
    ("violent", -3),
    ("war", -2),
    ("warm", 1),
    ("waste", -1),
    ("weak", -2),
    ("welcome", 2),
    ("win", 4),
    ("winner", 4),
    ("wonderful", 4),
    ("worry", -3),
    ("worst", -3),
    ("wow", 4),
    ("wrong", -2),
];

static LEXICON: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| VALENCES.iter().copied().collect());

/// Polarity analysis of one raw text.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    /// Sum of matched word valences.
    pub score: i32,
    /// Score divided by the total token count; 0 for empty input.
    pub comparative: f64,
    /// Matched tokens that contributed positively.
    pub positive_tokens: Vec<String>,
    /// Matched tokens that contributed negatively.
    pub negative_tokens: Vec<String>,
}

/// Scores raw text against the valence lexicon.
///
/// A negator immediately before a matched word inverts its valence
/// ("not good" counts against the text). Empty input scores zero.
pub fn analyze(text: &str) -> Sentiment {
    let tokens = sentiment_tokens(text);
    let mut score = 0;
    let mut positive_tokens = Vec::new();
    let mut negative_tokens = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let Some(&valence) = LEXICON.get(token.as_str()) else {
            continue;
        };
        let negated = i > 0 && is_negator(&tokens[i - 1]);
        let adjusted = if negated { -valence } else { valence };
        score += adjusted;
        if adjusted > 0 {
            positive_tokens.push(token.clone());
        } else if adjusted < 0 {
            negative_tokens.push(token.clone());
        }
    }

    let comparative = if tokens.is_empty() {
        0.0
    } else {
        f64::from(score) / tokens.len() as f64
    };

    Sentiment {
        score,
        comparative,
        positive_tokens,
        negative_tokens,
    }
}

/// Sentiment tokenization keeps apostrophes so contracted negators
/// ("isn't", "won't") survive; the scoring tokenizer's stop word and
/// length filters do not apply here.
fn sentiment_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_negator(token: &str) -> bool {
    matches!(
        token,
        "not"
            | "no"
            | "never"
            | "cannot"
            | "can't"
            | "won't"
            | "don't"
            | "doesn't"
            | "didn't"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "without"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_scores_zero() {
        let result = analyze("");
        assert_eq!(result.score, 0);
        assert_eq!(result.comparative, 0.0);
        assert!(result.positive_tokens.is_empty());
        assert!(result.negative_tokens.is_empty());
    }

    #[test]
    fn positive_and_negative_words_are_collected() {
        let result = analyze("A wonderful day ruined by terrible weather");
        assert_eq!(result.positive_tokens, vec!["wonderful"]);
        assert_eq!(result.negative_tokens, vec!["terrible"]);
        assert_eq!(result.score, 4 - 3);
    }

    #[test]
    fn negation_inverts_valence() {
        let negated = analyze("this is not good");
        assert_eq!(negated.score, -3);
        assert_eq!(negated.negative_tokens, vec!["good"]);

        let plain = analyze("this is good");
        assert_eq!(plain.score, 3);
    }

    #[test]
    fn contracted_negators_survive_tokenization() {
        let result = analyze("it isn't bad");
        assert_eq!(result.score, 3);
        assert_eq!(result.positive_tokens, vec!["bad"]);
    }

    #[test]
    fn comparative_is_score_over_token_count() {
        let result = analyze("good good");
        assert_eq!(result.score, 6);
        assert!((result.comparative - 3.0).abs() < 1e-12);
    }

    #[test]
    fn neutral_text_scores_zero() {
        let result = analyze("the report lists seven numbered appendices");
        assert_eq!(result.score, 0);
    }
}
