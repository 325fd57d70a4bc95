//! DTOs for the create, delete and redirect endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Status;

/// Request to map a URL to an alias.
///
/// An absent or empty `alias` asks the service to generate one.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "field url is a required field"))]
    pub url: String,

    #[serde(default)]
    pub alias: Option<String>,
}

/// Successful create response.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: Status,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: Status::Ok,
            alias,
        }
    }
}

/// Successful delete response.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: Status,
    pub alias: String,
}

impl DeleteResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: Status::Ok,
            alias,
        }
    }
}
