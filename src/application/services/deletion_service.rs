//! Alias removal.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};

use crate::domain::repositories::{StoreError, UrlDeleter};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

const OP: &str = "services::deletion::delete";

/// Service permanently removing alias mappings.
///
/// Deleting an alias that does not exist is reported as not found rather than
/// treated as an idempotent success. Every entry point deletes through this
/// service, so the redirect cache is invalidated whichever one is used.
pub struct DeletionService {
    deleter: Arc<dyn UrlDeleter>,
    cache: Arc<dyn CacheService>,
}

impl DeletionService {
    pub fn new(deleter: Arc<dyn UrlDeleter>, cache: Arc<dyn CacheService>) -> Self {
        Self { deleter, cache }
    }

    /// Removes the mapping stored under `alias`, then invalidates its cache
    /// entry.
    ///
    /// A failed invalidation is logged but does not fail the call: the store
    /// removal has already happened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is empty (the store is not called).
    /// Returns [`AppError::NotFound`] if `alias` is not mapped.
    /// Returns [`AppError::Internal`] on any other store failure.
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        if alias.is_empty() {
            info!(op = OP, "alias is empty");
            return Err(AppError::bad_request(
                "invalid request",
                json!({ "field": "alias", "reason": "alias is empty" }),
            ));
        }

        match self.deleter.delete_url(alias).await {
            Ok(()) => {
                info!(op = OP, alias, "url deleted");
                if let Err(e) = self.cache.invalidate(alias).await {
                    error!(op = OP, alias, error = %e, "failed to invalidate cache");
                }
                Ok(())
            }
            Err(StoreError::NotFound) => {
                info!(op = OP, alias, "url not found");
                Err(AppError::not_found(
                    "url not found",
                    json!({ "alias": alias }),
                ))
            }
            Err(e) => {
                error!(op = OP, alias, error = %e, "failed to delete url");
                Err(AppError::internal("failed to delete url"))
            }
        }
    }
}
