//! Cache-aside coordination for the product collection.

use std::sync::Arc;
use std::time::Duration;

use catalog_core::cache::{
    classify_lookup, deserialize_products, serialize_products, with_timeout, Cache, CacheLookup,
    CacheWrite, DEFAULT_CACHE_TIMEOUT, DEFAULT_COLLECTION_TTL, PRODUCTS_COLLECTION_KEY,
};
use catalog_core::catalog::Product;
use catalog_core::storage::{ProductRepository, Result};

/// Where and for how long the product collection is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    /// Key holding the serialized collection.
    pub key: String,
    /// Lifetime of a populated entry.
    pub ttl: Duration,
    /// Upper bound on a single cache call.
    pub timeout: Duration,
}

impl CachePolicy {
    pub fn new(key: impl Into<String>, ttl: Duration, timeout: Duration) -> Self {
        Self {
            key: key.into(),
            ttl,
            timeout,
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(
            PRODUCTS_COLLECTION_KEY,
            DEFAULT_COLLECTION_TTL,
            DEFAULT_CACHE_TIMEOUT,
        )
    }
}

/// Keeps the cached product collection consistent with the repository.
///
/// - **Reads**: refresh the key's expiry, then check the cache; on a miss or
///   backend failure read the repository and populate the cache
/// - **Invalidation**: delete the key after every successful write
///
/// Cache failures never reach the caller. Repository failures always do.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CacheAsideCoordinator<R, C>
where
    R: ProductRepository + ?Sized,
    C: Cache + ?Sized,
{
    repository: Arc<R>,
    cache: Arc<C>,
    policy: CachePolicy,
}

impl<R, C> CacheAsideCoordinator<R, C>
where
    R: ProductRepository + ?Sized,
    C: Cache + ?Sized,
{
    /// Creates a new coordinator.
    ///
    /// # Arguments
    ///
    /// * `repository` - The source of truth for products
    /// * `cache` - The cache holding the collection snapshot
    /// * `policy` - Key, TTL and per-call timeout
    pub fn new(repository: Arc<R>, cache: Arc<C>, policy: CachePolicy) -> Self {
        Self {
            repository,
            cache,
            policy,
        }
    }

    /// Returns the full product collection, from the cache when possible.
    ///
    /// Only a repository failure is returned as an error.
    pub async fn fetch_collection(&self) -> Result<Vec<Product>> {
        let key = self.policy.key.as_str();

        match self.lookup().await {
            CacheLookup::Hit(products) => {
                tracing::debug!(key = %key, count = products.len(), "Cache hit for products");
                return Ok(products);
            }
            CacheLookup::Miss => {
                tracing::debug!(key = %key, "Cache miss for products");
            }
            CacheLookup::Unavailable(err) => {
                tracing::warn!(
                    key = %key,
                    error = %err,
                    "Cache unavailable, reading products from storage"
                );
            }
        }

        let products = self.repository.list_products().await?;

        if products.is_empty() {
            tracing::debug!(key = %key, "No products stored, skipping cache population");
            return Ok(products);
        }

        self.populate(&products).await;
        Ok(products)
    }

    /// Removes the cached collection.
    ///
    /// A failure is logged and reported in the returned value, never raised.
    pub async fn invalidate(&self) -> CacheWrite {
        let key = self.policy.key.as_str();
        let write: CacheWrite = with_timeout(self.policy.timeout, self.cache.delete(key))
            .await
            .into();

        match &write {
            CacheWrite::Applied => tracing::debug!(key = %key, "Products cache invalidated"),
            CacheWrite::Failed(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to invalidate products cache")
            }
        }

        write
    }

    async fn lookup(&self) -> CacheLookup<Vec<Product>> {
        let key = self.policy.key.as_str();

        // Keep a hot entry alive before reading it.
        let refreshed = with_timeout(
            self.policy.timeout,
            self.cache.set_expiry(key, self.policy.ttl),
        )
        .await;
        if let Err(err) = refreshed {
            return CacheLookup::Unavailable(err);
        }

        let raw = with_timeout(self.policy.timeout, self.cache.get(key)).await;
        classify_lookup(raw).and_then(|bytes| deserialize_products(&bytes).map_err(Into::into))
    }

    async fn populate(&self, products: &[Product]) -> CacheWrite {
        let key = self.policy.key.as_str();

        let write: CacheWrite = match serialize_products(products) {
            Ok(bytes) => with_timeout(
                self.policy.timeout,
                self.cache.set(key, &bytes, Some(self.policy.ttl)),
            )
            .await
            .into(),
            Err(err) => CacheWrite::Failed(err.into()),
        };

        match &write {
            CacheWrite::Applied => {
                tracing::debug!(key = %key, count = products.len(), "Cached products")
            }
            CacheWrite::Failed(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to cache products")
            }
        }

        write
    }
}
