//! Syntax rules for target URLs and caller-supplied aliases.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use url::Url;

/// Maximum length of a caller-supplied alias.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Path segments routed to system endpoints; they cannot be aliases.
const RESERVED_ALIASES: &[&str] = &["health", "url"];

static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Checks that `raw_url` is an absolute URL with a scheme and a non-empty host.
///
/// The URL is only inspected, never rewritten.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL is empty, relative, or has no host.
pub fn validate_target_url(raw_url: &str) -> Result<(), AppError> {
    if raw_url.is_empty() {
        return Err(AppError::bad_request(
            "field url is a required field",
            json!({ "field": "url" }),
        ));
    }

    let parsed = Url::parse(raw_url).map_err(|e| {
        AppError::bad_request(
            "field url is not a valid URL",
            json!({ "field": "url", "reason": e.to_string() }),
        )
    })?;

    let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
    if parsed.scheme().is_empty() || !has_host {
        return Err(AppError::bad_request(
            "field url is not a valid URL",
            json!({ "field": "url", "reason": "URL must have a scheme and a host" }),
        ));
    }

    Ok(())
}

/// Returns whether `alias` collides with a system route.
pub fn is_reserved_alias(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `_` and `-`
/// - Cannot be a reserved path segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            format!("field alias must be 1-{} characters", MAX_ALIAS_LENGTH),
            json!({ "field": "alias", "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "field alias can only contain letters, digits, '_' and '-'",
            json!({ "field": "alias", "alias": alias }),
        ));
    }

    if is_reserved_alias(alias) {
        return Err(AppError::bad_request(
            "field alias is reserved",
            json!({ "field": "alias", "alias": alias }),
        ));
    }

    Ok(())
}
