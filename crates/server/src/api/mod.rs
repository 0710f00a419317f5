//! REST API layer.

/// API error types mapped to HTTP status codes.
pub mod errors;
/// HTTP request handlers and shared application state.
pub mod handlers;
/// Prometheus metrics recording.
pub mod metrics;
/// Request and response data transfer objects.
pub mod models;

use crate::fetch::SourceFetcher;
use axum::routing::get;
use axum::Router;
use handlers::AppState;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router with middleware.
pub fn create_router<F: SourceFetcher + Clone>(
    state: AppState<F>,
    request_timeout: Duration,
) -> Router {
    Router::new()
        .route("/plagiarism", get(handlers::check_plagiarism::<F>))
        .route("/health", get(handlers::health::<F>))
        .route("/metrics", get(handlers::render_metrics::<F>))
        .fallback(handlers::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
