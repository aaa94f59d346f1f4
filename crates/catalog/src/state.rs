//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses trait objects for storage and cache abstraction
//! and supports different backend combinations via feature flags.

use std::{sync::Arc, time::Duration};

use catalog_core::cache::Cache;
use catalog_core::storage::ProductRepository;

use crate::cache::DisabledCache;
use crate::config::Config;
use crate::storage::cached::{CachePolicy, CachedProductRepository};

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Product repository (cached, wraps underlying storage).
    pub product_repo: Arc<dyn ProductRepository>,
    /// The cache behind `product_repo`, kept for health checks.
    pub cache: Arc<dyn Cache>,
    /// Upper bound on a single cache call.
    pub cache_timeout: Duration,
}

impl AppState {
    /// Wraps `repository` with the cache-aside layer.
    pub fn from_parts(
        repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn Cache>,
        policy: CachePolicy,
    ) -> Self {
        let cache_timeout = policy.timeout;
        let product_repo = Arc::new(CachedProductRepository::new(
            repository,
            cache.clone(),
            policy,
        ));

        Self {
            product_repo,
            cache,
            cache_timeout,
        }
    }

    /// Creates AppState from the compiled-in backends.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repository = build_repository(config).await?;

        let cache: Arc<dyn Cache> = if config.cache_enabled {
            build_cache(config)?
        } else {
            tracing::info!("Collection cache disabled");
            Arc::new(DisabledCache)
        };

        tracing::info!(
            key = %config.cache_key,
            ttl_minutes = config.cache_ttl_minutes,
            timeout_ms = config.cache_timeout_ms,
            "Cache policy"
        );

        Ok(Self::from_parts(repository, cache, config.cache_policy()))
    }
}

// ============================================================================
// Factory functions for different backends
// ============================================================================

#[cfg(feature = "inmemory")]
async fn build_repository(_config: &Config) -> anyhow::Result<Arc<dyn ProductRepository>> {
    use crate::storage::InMemoryRepository;

    tracing::info!("Using in-memory product storage");
    Ok(Arc::new(InMemoryRepository::new()))
}

#[cfg(feature = "sqlite")]
async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn ProductRepository>> {
    use crate::storage::SqliteRepository;

    tracing::info!(path = %config.sqlite_path, "Using SQLite product storage");
    Ok(Arc::new(SqliteRepository::new(&config.sqlite_path).await?))
}

#[cfg(feature = "memory")]
fn build_cache(config: &Config) -> anyhow::Result<Arc<dyn Cache>> {
    use crate::cache::MemoryCache;

    tracing::info!(max_entries = config.cache_max_entries, "Using in-memory cache");
    Ok(Arc::new(MemoryCache::new(config.cache_max_entries)))
}

#[cfg(feature = "redis")]
fn build_cache(config: &Config) -> anyhow::Result<Arc<dyn Cache>> {
    use crate::cache::RedisCache;

    tracing::info!(url = %config.redis_url, "Using Redis cache");
    Ok(Arc::new(RedisCache::new(&config.redis_url)?))
}

#[cfg(test)]
impl AppState {
    /// State backed by an empty in-memory repository and cache.
    pub fn in_memory() -> Self {
        use crate::cache::MemoryCache;
        use crate::storage::InMemoryRepository;

        Self::from_parts(
            Arc::new(InMemoryRepository::new()),
            Arc::new(MemoryCache::new(16)),
            CachePolicy::default(),
        )
    }
}
