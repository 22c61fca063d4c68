//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::DefaultBodyLimit,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let max_body = state.settings.upload.max_body_bytes;

    Router::new()
        .nest("/api/v1", api_routes(max_body))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API v1 routes
fn api_routes(max_body: usize) -> Router<AppState> {
    Router::new()
        .nest("/services", service_routes(max_body))
        .nest("/owners", owner_routes())
}

/// Service record routes. Create and update carry the image, so the body
/// limit follows the upload setting.
fn service_routes(max_body: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::service::list_services).post(handlers::service::create_service),
        )
        .route(
            "/{service_id}",
            get(handlers::service::get_service)
                .put(handlers::service::update_service)
                .delete(handlers::service::delete_service),
        )
        .route("/{service_id}/image", get(handlers::service::get_service_image))
        .layer(DefaultBodyLimit::max(max_body))
}

/// Owner-scoped routes
fn owner_routes() -> Router<AppState> {
    Router::new().route(
        "/{owner_id}/services",
        get(handlers::service::list_owner_services),
    )
}
