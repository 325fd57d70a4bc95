//! Handler for the create endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::api::dto::url::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Maps a URL to a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://openai.com",
///   "alias": "oai"              // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "oai" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body cannot be decoded or fails validation.
/// Returns 409 Conflict if the alias is already mapped.
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        info!(reason = %rejection.body_text(), "failed to decode request body");
        AppError::bad_request(
            "failed to decode request",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    request.validate()?;

    let shortened = state
        .shortening_service
        .shorten(&request.url, request.alias.as_deref())
        .await?;

    Ok(Json(SaveResponse::ok(shortened.alias)))
}
