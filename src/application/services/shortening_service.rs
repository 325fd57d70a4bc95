//! Short link creation.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};

use crate::domain::repositories::{StoreError, UrlSaver};
use crate::error::AppError;
use crate::utils::alias_generator::AliasGenerator;
use crate::utils::validation::{is_reserved_alias, validate_alias, validate_target_url};

const OP: &str = "services::shortening::shorten";

/// Result of a successful shortening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub alias: String,
    /// Store-assigned id, only used for diagnostics.
    pub id: i64,
}

/// Service validating requests, choosing an alias and persisting the mapping.
pub struct ShorteningService {
    saver: Arc<dyn UrlSaver>,
    generator: Arc<AliasGenerator>,
    alias_length: usize,
}

impl ShorteningService {
    /// Creates a new shortening service.
    ///
    /// `alias_length` is the length of generated aliases.
    pub fn new(
        saver: Arc<dyn UrlSaver>,
        generator: Arc<AliasGenerator>,
        alias_length: usize,
    ) -> Self {
        Self {
            saver,
            generator,
            alias_length,
        }
    }

    /// Maps `raw_url` to `requested_alias`, or to a generated alias when none
    /// (or an empty one) is requested.
    ///
    /// The store is called exactly once. A taken alias is never retried with a
    /// new one, for caller-supplied and generated aliases alike.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or the requested alias is invalid.
    /// Returns [`AppError::Conflict`] if the alias is already mapped.
    /// Returns [`AppError::Internal`] on any other store failure.
    pub async fn shorten(
        &self,
        raw_url: &str,
        requested_alias: Option<&str>,
    ) -> Result<Shortened, AppError> {
        if let Err(e) = validate_target_url(raw_url) {
            info!(op = OP, url = raw_url, reason = %e, "invalid url");
            return Err(e);
        }

        let alias = match requested_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => {
                if let Err(e) = validate_alias(alias) {
                    info!(op = OP, alias, reason = %e, "invalid alias");
                    return Err(e);
                }
                alias.to_string()
            }
            None => self
                .generator
                .generate_excluding(self.alias_length, is_reserved_alias),
        };

        match self.saver.save_url(raw_url, &alias).await {
            Ok(id) => {
                info!(op = OP, alias = %alias, id, "url added");
                Ok(Shortened { alias, id })
            }
            Err(StoreError::AlreadyExists) => {
                info!(op = OP, alias = %alias, url = raw_url, "url already exists");
                Err(AppError::conflict(
                    "url already exists",
                    json!({ "alias": alias }),
                ))
            }
            Err(e) => {
                error!(op = OP, alias = %alias, error = %e, "failed to save url");
                Err(AppError::internal("failed to save url"))
            }
        }
    }
}
