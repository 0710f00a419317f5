//! Tuning constants for the scoring pipeline and server defaults.
//!
//! These are compile-time constants; runtime configuration (port, timeouts,
//! search endpoint) is handled via CLI arguments in the server crate.

/// Minimum length (in characters) of a submitted text. Shorter submissions
/// are rejected before the scoring core is invoked.
pub const MIN_CONTENT_LEN: usize = 10;

/// Maximum number of candidate sources fetched and evaluated per request.
/// Bounds worst-case fan-out and outbound traffic.
pub const MAX_CANDIDATES: usize = 5;

/// Number of leading characters of the submission used as the search query.
pub const SEARCH_QUERY_PREFIX_CHARS: usize = 100;

/// Similarity fraction above which a single candidate is classified as a
/// plagiarism source.
pub const PLAGIARISM_THRESHOLD: f64 = 0.6;

/// Maximum per-source similarity (percent scale) above which the overall
/// submission is flagged as plagiarized.
pub const OVERALL_PLAGIARISM_THRESHOLD_PCT: f64 = 60.0;

/// Confidence score above which a source counts as high-confidence in the
/// report summary.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 70.0;

/// Weight of the similarity base term in the confidence running score.
/// The running score is rescaled by 100 at the end, so this maps similarity
/// onto a 0–50 point range.
pub const SIMILARITY_BASE_WEIGHT: f64 = 0.5;

/// Similarity fraction above which the flat very-high-overlap bonus applies.
pub const HIGH_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Flat bonus added for very high lexical overlap. Expressed in whole points
/// on the pre-rescale running score, so after the final ×100 rescale it
/// saturates the 100-point clamp.
pub const HIGH_SIMILARITY_BONUS: f64 = 20.0;

/// Candidate word count is divided by this before the length bonus weight.
pub const WORD_COUNT_BONUS_DIVISOR: f64 = 1000.0;

/// Weight of the candidate-length bonus term.
pub const WORD_COUNT_BONUS_WEIGHT: f64 = 0.1;

/// Saturation cap of the candidate-length bonus term.
pub const WORD_COUNT_BONUS_CAP: f64 = 0.15;

/// Weight of the lexical-density bonus term.
pub const LEXICAL_DENSITY_BONUS_WEIGHT: f64 = 0.1;

/// Reference sentence length (words per sentence) for the sentence-length
/// bonus; the bonus saturates at a distance of one full reference length.
pub const SENTENCE_LENGTH_REFERENCE: f64 = 20.0;

/// Weight of the sentence-length bonus term.
pub const SENTENCE_LENGTH_BONUS_WEIGHT: f64 = 0.1;

/// Weight of the metadata-completeness bonus term.
pub const METADATA_BONUS_WEIGHT: f64 = 0.15;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Timeout in seconds for each outbound search or page fetch.
pub const FETCH_TIMEOUT_SECS: u64 = 5;

/// Default search endpoint scraped for candidate sources.
pub const DEFAULT_SEARCH_BASE: &str = "https://www.google.com/search";

/// User-Agent header sent on outbound fetches. Result pages served to
/// unidentified clients are heavily degraded, so we present as a browser.
pub const FETCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Accept header sent on outbound fetches.
pub const FETCH_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Accept-Language header sent on outbound fetches.
pub const FETCH_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
