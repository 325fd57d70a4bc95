//! API route configuration.

use crate::api::handlers::{delete_handler, redirect_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Alias routes.
///
/// # Endpoints
///
/// - `POST   /url`      - Map a URL to a caller-chosen or generated alias
/// - `GET    /{alias}`  - Redirect to the stored URL
/// - `DELETE /{alias}`  - Remove an alias
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/{alias}", get(redirect_handler).delete(delete_handler))
}
