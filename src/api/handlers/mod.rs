//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod delete;
pub mod fallback;
pub mod health;
pub mod redirect;
pub mod save;

pub use delete::delete_handler;
pub use fallback::fallback_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use save::save_handler;

use axum::extract::{Path, rejection::PathRejection};
use serde_json::json;

use crate::error::AppError;

/// Unwraps the `{alias}` path segment, mapping a malformed segment (for
/// example invalid percent-encoded UTF-8) to a validation error envelope.
pub(crate) fn alias_from_path(
    path: Result<Path<String>, PathRejection>,
) -> Result<String, AppError> {
    path.map(|Path(alias)| alias).map_err(|rejection| {
        AppError::bad_request(
            "invalid request",
            json!({ "field": "alias", "reason": rejection.body_text() }),
        )
    })
}
