//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while setting up or talking to the cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    Connection(String),
    #[error("cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Read-through cache for alias to URL mappings used by redirects.
///
/// Lookups and fills are fail-open: a broken cache degrades to store lookups
/// and never fails a redirect.
///
/// # Invalidation
///
/// [`CacheService::invalidate`] leaves a tombstone in place of the entry and
/// [`CacheService::set_url`] only writes when no entry or tombstone exists. A
/// fill that resolved the alias before a delete therefore cannot resurrect it
/// afterwards. A tombstoned alias that is created again is served from the
/// store until the tombstone expires.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the target URL cached for an alias.
    ///
    /// Returns `Ok(None)` on a miss or a tombstone.
    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>>;

    /// Stores an alias mapping with an optional TTL in seconds, unless an
    /// entry or tombstone already exists.
    ///
    /// `None` uses the implementation's default TTL.
    async fn set_url(
        &self,
        alias: &str,
        target_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Replaces a cached mapping with a tombstone after its alias was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Operation`] if the tombstone could not be written,
    /// in which case a stale entry may be served until it expires.
    async fn invalidate(&self, alias: &str) -> CacheResult<()>;

    /// Reports whether the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
