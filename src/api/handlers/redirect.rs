//! Handler for alias redirects.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use super::alias_from_path;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Request Flow
///
/// 1. Check the cache for the alias
/// 2. On a miss, resolve through the store and populate the cache before responding
/// 3. Return `302 Found` with the stored URL in `Location`
///
/// A cache error is logged and treated as a miss. The fill never overwrites a
/// tombstone, so a delete racing this request is not undone.
///
/// # Errors
///
/// Returns 400 Bad Request if the path segment is malformed.
/// Returns 404 Not Found with an error body (no redirect) if the alias is unknown.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let alias = alias_from_path(path)?;

    let target_url = match state.cache.get_url(&alias).await {
        Ok(Some(cached)) => {
            debug!(alias = %alias, "cache hit");
            cached
        }
        Ok(None) => {
            let url = state.resolution_service.resolve(&alias).await?;

            if let Err(e) = state.cache.set_url(&alias, &url, None).await {
                warn!(alias = %alias, error = %e, "failed to cache url");
            }

            url
        }
        Err(e) => {
            warn!(alias = %alias, error = %e, "cache lookup failed, falling back to store");
            state.resolution_service.resolve(&alias).await?
        }
    };

    found(&alias, &target_url)
}

/// Builds a `302 Found` response pointing at `target_url`.
fn found(alias: &str, target_url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_bytes(target_url.as_bytes()).map_err(|e| {
        error!(alias, error = %e, "stored url is not a valid Location header");
        AppError::internal("failed to get url")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
