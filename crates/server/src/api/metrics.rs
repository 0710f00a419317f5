//! Prometheus metrics recording.

use metrics::{counter, histogram};

/// Records a completed plagiarism scan with its outcome
/// (`clean`, `plagiarized`, or `insufficient_sources`).
pub fn record_scan(outcome: &str) {
    counter!("copytrace_scans_total", "outcome" => outcome.to_string()).increment(1);
}

/// Records how many candidate documents a search produced.
pub fn record_candidates_fetched(count: usize) {
    histogram!("copytrace_candidates_fetched").record(count as f64);
}

/// Records end-to-end scan latency in seconds.
pub fn record_scan_duration(duration: std::time::Duration) {
    histogram!("copytrace_scan_duration_seconds").record(duration.as_secs_f64());
}
