//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{DeletionService, ResolutionService, ShorteningService};
use crate::domain::repositories::{StoreHealth, UrlStore};
use crate::infrastructure::cache::CacheService;
use crate::utils::alias_generator::AliasGenerator;

#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService>,
    pub resolution_service: Arc<ResolutionService>,
    pub deletion_service: Arc<DeletionService>,
    pub store_health: Arc<dyn StoreHealth>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires every service to the same store.
    ///
    /// Each service receives only the store capability it needs.
    pub fn new<S>(
        store: Arc<S>,
        cache: Arc<dyn CacheService>,
        generator: Arc<AliasGenerator>,
        alias_length: usize,
    ) -> Self
    where
        S: UrlStore + 'static,
    {
        Self {
            shortening_service: Arc::new(ShorteningService::new(
                store.clone(),
                generator,
                alias_length,
            )),
            resolution_service: Arc::new(ResolutionService::new(store.clone())),
            deletion_service: Arc::new(DeletionService::new(
                store.clone(),
                cache.clone(),
            )),
            store_health: store,
            cache,
        }
    }
}
