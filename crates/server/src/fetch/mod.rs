//! Candidate source retrieval.
//!
//! The fetcher is the service's only outbound dependency: given a query it
//! returns fully fetched candidate documents. Every failure path degrades
//! to fewer (or zero) candidates rather than an error; the scoring core
//! decides whether what survived is sufficient.

/// Page fetching and HTML field extraction.
pub mod page;
/// Search-results scraping and the production fetcher.
pub mod search;

use copytrace_core::document::Document;
use std::future::Future;

/// Retrieves candidate source documents for a search query.
///
/// The seam between the HTTP layer and the outside world; integration tests
/// substitute a canned implementation.
pub trait SourceFetcher: Send + Sync + 'static {
    /// Searches the web and returns fetched candidate documents, capped at
    /// the configured fan-out. Failures yield fewer results, never an error.
    fn search_and_fetch(&self, query: &str) -> impl Future<Output = Vec<Document>> + Send;
}

pub use search::WebFetcher;
