//! Redis-backed redirect cache.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{
    AsyncCommands, Client, ExistenceCheck, SetExpiry, SetOptions, aio::ConnectionManager,
};
use tracing::{debug, info, warn};

/// Key namespace for cached aliases.
const KEY_PREFIX: &str = "alias:";

/// Value marking a deleted alias. Never a valid target URL.
const TOMBSTONE: &str = "";

/// Redis cache for alias lookups.
///
/// Uses a `ConnectionManager` for automatic reconnects. Lookup and fill errors
/// are logged and swallowed so that redirects fall back to the store.
/// Fills use `SET NX`, deletes overwrite the entry with a tombstone.
pub struct RedisCache {
    conn: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects to Redis and verifies the connection with a PING.
    ///
    /// `default_ttl_seconds` applies when [`CacheService::set_url`] is called
    /// without an explicit TTL (`CACHE_TTL_SECONDS`). Tombstones live for the
    /// same duration.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("invalid Redis URL: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("failed to connect: {}", e)))?;

        let mut conn = manager.clone();
        conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            conn: manager,
            default_ttl: default_ttl_seconds,
        })
    }

    fn key(alias: &str) -> String {
        format!("{}{}", KEY_PREFIX, alias)
    }

    fn fill_options(ttl: u64) -> SetOptions {
        SetOptions::default()
            .conditional_set(ExistenceCheck::NX)
            .with_expiration(SetExpiry::EX(ttl))
    }
}

/// Maps a raw cached value to a hit, treating tombstones as misses.
fn live_entry(raw: Option<String>) -> Option<String> {
    raw.filter(|value| value != TOMBSTONE)
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();

        match conn.get::<_, Option<String>>(Self::key(alias)).await {
            Ok(raw) => {
                let hit = live_entry(raw);
                debug!(alias, hit = hit.is_some(), "cache lookup");
                Ok(hit)
            }
            Err(e) => {
                warn!(alias, error = %e, "Redis GET failed");
                Ok(None)
            }
        }
    }

    async fn set_url(
        &self,
        alias: &str,
        target_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let mut conn = self.conn.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        match conn
            .set_options::<_, _, Option<String>>(
                Self::key(alias),
                target_url,
                Self::fill_options(ttl),
            )
            .await
        {
            Ok(Some(_)) => debug!(alias, "cache filled"),
            Ok(None) => debug!(alias, "cache fill skipped, entry or tombstone present"),
            Err(e) => warn!(alias, error = %e, "Redis SET failed"),
        }

        Ok(())
    }

    async fn invalidate(&self, alias: &str) -> CacheResult<()> {
        let mut conn = self.conn.clone();

        conn.set_ex::<_, _, ()>(Self::key(alias), TOMBSTONE, self.default_ttl)
            .await
            .map_err(|e| CacheError::Operation(format!("failed to write tombstone: {}", e)))?;

        debug!(alias, "cache entry invalidated");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
