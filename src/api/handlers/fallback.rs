//! Handler for requests that match no route.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers unmatched paths with the error envelope instead of an empty body.
///
/// The bare root is an empty alias and is rejected as an invalid request,
/// like an empty alias reaching the services. Any other path (for example one
/// with several segments) cannot name an alias and is reported as not found.
pub async fn fallback_handler(uri: Uri) -> AppError {
    if uri.path() == "/" {
        return AppError::bad_request(
            "invalid request",
            json!({ "field": "alias", "reason": "alias is empty" }),
        );
    }

    AppError::not_found("url not found", json!({ "path": uri.path() }))
}
