//! Store contract for alias to URL mappings.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by store implementations.
///
/// `AlreadyExists` and `NotFound` are the two distinguishable conditions the
/// services react to. Everything else is opaque and treated as an internal
/// failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("alias already exists")]
    AlreadyExists,

    #[error("alias not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store error: {0}")]
    Internal(String),
}

/// Persists new mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Stores `url` under `alias` and returns the store-assigned id.
    ///
    /// The uniqueness check and the insert are one atomic operation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if `alias` is already mapped.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StoreError>;
}

/// Looks up mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the target URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `alias` is not mapped.
    async fn get_url(&self, alias: &str) -> Result<String, StoreError>;
}

/// Removes mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Permanently removes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing was removed.
    async fn delete_url(&self, alias: &str) -> Result<(), StoreError>;
}

/// Connectivity check used by the health endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}

/// A store providing every capability. Implemented automatically.
pub trait UrlStore: UrlSaver + UrlGetter + UrlDeleter + StoreHealth {}

impl<T> UrlStore for T where T: UrlSaver + UrlGetter + UrlDeleter + StoreHealth {}
