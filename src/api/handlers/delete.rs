//! Handler for alias removal.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use super::alias_from_path;
use crate::api::dto::url::DeleteResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Permanently removes an alias.
///
/// # Endpoint
///
/// `DELETE /{alias}`
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "oai" }
/// ```
///
/// The deletion service also invalidates the cached mapping.
///
/// # Errors
///
/// Returns 400 Bad Request if the path segment is malformed.
/// Returns 404 Not Found if the alias does not exist.
pub async fn delete_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let alias = alias_from_path(path)?;

    state.deletion_service.delete(&alias).await?;

    Ok(Json(DeleteResponse::ok(alias)))
}
