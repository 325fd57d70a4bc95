//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`      - Create an alias
//! - `GET    /{alias}`  - Redirect
//! - `DELETE /{alias}`  - Remove an alias
//! - `GET    /health`   - Health check: store and cache
//!
//! Unmatched paths get the JSON error envelope from the fallback handler.
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed on the response
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler};
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware, without path
/// normalization.
///
/// `/health` is registered as a static route, so it takes precedence over
/// the `/{alias}` capture.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::url_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}

/// Constructs the application service served by the binary.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
