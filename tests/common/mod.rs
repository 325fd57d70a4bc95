#![allow(dead_code)]

use alias_shortener::domain::repositories::{
    StoreError, StoreHealth, UrlDeleter, UrlGetter, UrlSaver,
};
use alias_shortener::infrastructure::cache::{CacheError, CacheResult, CacheService, NullCache};
use alias_shortener::infrastructure::persistence::MemoryUrlStore;
use alias_shortener::routes::build_router;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias_generator::{AliasGenerator, DEFAULT_ALIAS_LENGTH};
use async_trait::async_trait;
use axum_test::TestServer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn create_test_state(store: Arc<MemoryUrlStore>, cache: Arc<dyn CacheService>) -> AppState {
    AppState::new(
        store,
        cache,
        Arc::new(AliasGenerator::from_os_rng()),
        DEFAULT_ALIAS_LENGTH,
    )
}

/// Server over a fresh in-memory store without a cache.
pub fn create_test_server() -> (TestServer, Arc<MemoryUrlStore>) {
    let store = Arc::new(MemoryUrlStore::new());
    let state = create_test_state(store.clone(), Arc::new(NullCache::new()));
    let server = TestServer::new(build_router(state)).unwrap();
    (server, store)
}

/// Server over a fresh in-memory store and an inspectable cache.
pub fn create_cached_test_server() -> (TestServer, Arc<MemoryUrlStore>, Arc<MapCache>) {
    let store = Arc::new(MemoryUrlStore::new());
    let cache = Arc::new(MapCache::default());
    let state = create_test_state(store.clone(), cache.clone());
    let server = TestServer::new(build_router(state)).unwrap();
    (server, store, cache)
}

/// Server over a fresh in-memory store and the given cache.
pub fn create_test_server_with_cache(
    cache: Arc<dyn CacheService>,
) -> (TestServer, Arc<MemoryUrlStore>) {
    let store = Arc::new(MemoryUrlStore::new());
    let state = create_test_state(store.clone(), cache);
    let server = TestServer::new(build_router(state)).unwrap();
    (server, store)
}

/// Server whose generator is seeded, so generated aliases are reproducible.
pub fn create_seeded_test_server(seed: u64) -> (TestServer, Arc<MemoryUrlStore>) {
    let store = Arc::new(MemoryUrlStore::new());
    let state = AppState::new(
        store.clone(),
        Arc::new(NullCache::new()),
        Arc::new(AliasGenerator::with_rng(StdRng::seed_from_u64(seed))),
        DEFAULT_ALIAS_LENGTH,
    );
    let server = TestServer::new(build_router(state)).unwrap();
    (server, store)
}

/// Server over a store where every operation fails.
pub fn create_failing_test_server() -> TestServer {
    let state = AppState::new(
        Arc::new(FailingStore),
        Arc::new(NullCache::new()),
        Arc::new(AliasGenerator::from_os_rng()),
        DEFAULT_ALIAS_LENGTH,
    );
    TestServer::new(build_router(state)).unwrap()
}

pub async fn save_link(store: &MemoryUrlStore, alias: &str, url: &str) {
    store.save_url(url, alias).await.unwrap();
}

/// Store that reports an internal failure for every call.
pub struct FailingStore;

#[async_trait]
impl UrlSaver for FailingStore {
    async fn save_url(&self, _url: &str, _alias: &str) -> Result<i64, StoreError> {
        Err(StoreError::Internal("connection refused".to_string()))
    }
}

#[async_trait]
impl UrlGetter for FailingStore {
    async fn get_url(&self, _alias: &str) -> Result<String, StoreError> {
        Err(StoreError::Internal("connection refused".to_string()))
    }
}

#[async_trait]
impl UrlDeleter for FailingStore {
    async fn delete_url(&self, _alias: &str) -> Result<(), StoreError> {
        Err(StoreError::Internal("connection refused".to_string()))
    }
}

#[async_trait]
impl StoreHealth for FailingStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Internal("connection refused".to_string()))
    }
}

/// Process-local cache with the same fill and tombstone rules as Redis.
///
/// `None` marks a tombstone.
#[derive(Default)]
pub struct MapCache {
    entries: Mutex<HashMap<String, Option<String>>>,
}

impl MapCache {
    /// Stores a live entry, replacing anything already there.
    pub fn insert(&self, alias: &str, url: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(alias.to_string(), Some(url.to_string()));
    }

    /// Returns whether a live (non-tombstone) entry exists.
    pub fn contains(&self, alias: &str) -> bool {
        matches!(self.entries.lock().unwrap().get(alias), Some(Some(_)))
    }

    pub fn is_tombstoned(&self, alias: &str) -> bool {
        matches!(self.entries.lock().unwrap().get(alias), Some(None))
    }
}

#[async_trait]
impl CacheService for MapCache {
    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(alias).cloned().flatten())
    }

    async fn set_url(
        &self,
        alias: &str,
        target_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .entry(alias.to_string())
            .or_insert_with(|| Some(target_url.to_string()));
        Ok(())
    }

    async fn invalidate(&self, alias: &str) -> CacheResult<()> {
        self.entries.lock().unwrap().insert(alias.to_string(), None);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// [`MapCache`] whose fills land only after a delay, as with a slow Redis
/// round trip.
pub struct SlowFillCache {
    pub inner: MapCache,
    delay: Duration,
}

impl SlowFillCache {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MapCache::default(),
            delay,
        }
    }
}

#[async_trait]
impl CacheService for SlowFillCache {
    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>> {
        self.inner.get_url(alias).await
    }

    async fn set_url(
        &self,
        alias: &str,
        target_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.set_url(alias, target_url, ttl_seconds).await
    }

    async fn invalidate(&self, alias: &str) -> CacheResult<()> {
        self.inner.invalidate(alias).await
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Cache where every operation fails.
pub struct BrokenCache;

#[async_trait]
impl CacheService for BrokenCache {
    async fn get_url(&self, _alias: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Operation("connection reset".to_string()))
    }

    async fn set_url(
        &self,
        _alias: &str,
        _target_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Err(CacheError::Operation("connection reset".to_string()))
    }

    async fn invalidate(&self, _alias: &str) -> CacheResult<()> {
        Err(CacheError::Operation("connection reset".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
