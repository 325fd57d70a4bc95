//! Alias resolution.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};

use crate::domain::repositories::{StoreError, UrlGetter};
use crate::error::AppError;

const OP: &str = "services::resolution::resolve";

/// Service resolving an alias to its stored target URL.
pub struct ResolutionService {
    getter: Arc<dyn UrlGetter>,
}

impl ResolutionService {
    pub fn new(getter: Arc<dyn UrlGetter>) -> Self {
        Self { getter }
    }

    /// Returns the target URL stored under `alias`, unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is empty (the store is not queried).
    /// Returns [`AppError::NotFound`] if `alias` is not mapped.
    /// Returns [`AppError::Internal`] on any other store failure.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            info!(op = OP, "alias is empty");
            return Err(AppError::bad_request(
                "invalid request",
                json!({ "field": "alias", "reason": "alias is empty" }),
            ));
        }

        match self.getter.get_url(alias).await {
            Ok(url) => {
                info!(op = OP, alias, url = %url, "got url");
                Ok(url)
            }
            Err(StoreError::NotFound) => {
                info!(op = OP, alias, "url not found");
                Err(AppError::not_found(
                    "url not found",
                    json!({ "alias": alias }),
                ))
            }
            Err(e) => {
                error!(op = OP, alias, error = %e, "failed to get url");
                Err(AppError::internal("failed to get url"))
            }
        }
    }
}
