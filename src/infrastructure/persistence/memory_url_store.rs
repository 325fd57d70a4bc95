//! In-memory implementation of the URL store.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{StoreError, StoreHealth, UrlDeleter, UrlGetter, UrlSaver};

/// Process-local store used for development and tests.
///
/// Saves take the write lock for the whole check-and-insert, which makes alias
/// uniqueness atomic. Contents are lost when the process exits.
pub struct MemoryUrlStore {
    links: RwLock<HashMap<String, ShortLink>>,
    next_id: AtomicI64,
}

impl MemoryUrlStore {
    pub fn new() -> Self {
        debug!("Using in-memory URL store");
        Self {
            links: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(0),
        }
    }

    /// Returns the full record stored under `alias`, if any.
    pub async fn find(&self, alias: &str) -> Option<ShortLink> {
        self.links.read().await.get(alias).cloned()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

impl Default for MemoryUrlStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlSaver for MemoryUrlStore {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StoreError> {
        let mut links = self.links.write().await;

        match links.entry(alias.to_string()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                slot.insert(ShortLink::new(
                    id,
                    alias.to_string(),
                    url.to_string(),
                    Utc::now(),
                ));
                Ok(id)
            }
        }
    }
}

#[async_trait]
impl UrlGetter for MemoryUrlStore {
    async fn get_url(&self, alias: &str) -> Result<String, StoreError> {
        self.links
            .read()
            .await
            .get(alias)
            .map(|link| link.target_url.clone())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl UrlDeleter for MemoryUrlStore {
    async fn delete_url(&self, alias: &str) -> Result<(), StoreError> {
        self.links
            .write()
            .await
            .remove(alias)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl StoreHealth for MemoryUrlStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
