//! copytrace-server — HTTP surface for copytrace.
//!
//! Provides the REST API and the outbound web-search/page-fetch client.
//! Scoring logic lives in `copytrace-core`.

/// REST API layer: Axum router, handlers, models, errors, metrics.
pub mod api;
/// Outbound search-and-fetch client for candidate source documents.
pub mod fetch;
