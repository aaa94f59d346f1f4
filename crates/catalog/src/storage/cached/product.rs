//! Cached product repository decorator.
//!
//! Wraps a `ProductRepository` implementation with the cache-aside pattern.

use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::cache::Cache;
use catalog_core::catalog::Product;
use catalog_core::storage::{ProductRepository, Result};

use super::coordinator::{CacheAsideCoordinator, CachePolicy};

/// Cached product repository decorator.
///
/// - **Reads**: served through [`CacheAsideCoordinator::fetch_collection`]
/// - **Writes**: persist to the repository, then invalidate the collection
///
/// A failed write leaves the cache untouched. A failed invalidation never
/// changes the outcome of the write.
pub struct CachedProductRepository<R, C>
where
    R: ProductRepository + ?Sized,
    C: Cache + ?Sized,
{
    repository: Arc<R>,
    coordinator: CacheAsideCoordinator<R, C>,
}

impl<R, C> CachedProductRepository<R, C>
where
    R: ProductRepository + ?Sized,
    C: Cache + ?Sized,
{
    pub fn new(repository: Arc<R>, cache: Arc<C>, policy: CachePolicy) -> Self {
        let coordinator = CacheAsideCoordinator::new(repository.clone(), cache, policy);
        Self {
            repository,
            coordinator,
        }
    }
}

#[async_trait]
impl<R, C> ProductRepository for CachedProductRepository<R, C>
where
    R: ProductRepository + ?Sized + 'static,
    C: Cache + ?Sized + 'static,
{
    async fn list_products(&self) -> Result<Vec<Product>> {
        self.coordinator.fetch_collection().await
    }

    async fn create_product(&self, product: &Product) -> Result<i64> {
        let id = self.repository.create_product(product).await?;
        let invalidated = self.coordinator.invalidate().await.is_applied();

        tracing::debug!(product_id = id, name = %product.name, invalidated, "Product created");
        Ok(id)
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        self.repository.update_product(product).await?;
        let invalidated = self.coordinator.invalidate().await.is_applied();

        tracing::debug!(
            product_id = product.id,
            name = %product.name,
            invalidated,
            "Product updated"
        );
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        self.repository.delete_product(id).await?;
        let invalidated = self.coordinator.invalidate().await.is_applied();

        tracing::debug!(product_id = id, invalidated, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::storage::cached::coordinator::tests::{
        sample_product, FailingCache, OfflineRepository, RecordingCache,
    };
    use crate::storage::InMemoryRepository;
    use catalog_core::storage::RepositoryError;

    fn cached(
        repository: Arc<InMemoryRepository>,
        cache: Arc<RecordingCache>,
    ) -> CachedProductRepository<InMemoryRepository, RecordingCache> {
        CachedProductRepository::new(repository, cache, CachePolicy::default())
    }

    #[tokio::test]
    async fn test_create_invalidates_collection() {
        let repository = Arc::new(InMemoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let cached = cached(repository, cache.clone());

        cached.create_product(&sample_product()).await.unwrap();
        assert_eq!(cached.list_products().await.unwrap().len(), 1);

        cached
            .create_product(&Product::new("Cable", "Accessories", "9.90"))
            .await
            .unwrap();

        assert_eq!(RecordingCache::count(&cache.deletes), 2);
        assert_eq!(cached.list_products().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_invalidates_collection() {
        let repository = Arc::new(InMemoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let cached = cached(repository, cache.clone());
        let id = cached.create_product(&sample_product()).await.unwrap();
        cached.list_products().await.unwrap();

        let renamed = sample_product().with_id(id);
        let renamed = Product {
            name: "Wireless Mouse".to_string(),
            ..renamed
        };
        cached.update_product(&renamed).await.unwrap();

        assert_eq!(cached.list_products().await.unwrap(), vec![renamed]);
    }

    #[tokio::test]
    async fn test_delete_invalidates_collection() {
        let repository = Arc::new(InMemoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let cached = cached(repository, cache.clone());
        let id = cached.create_product(&sample_product()).await.unwrap();
        cached.list_products().await.unwrap();

        cached.delete_product(id).await.unwrap();

        assert!(cached.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_does_not_invalidate() {
        let repository = Arc::new(InMemoryRepository::new());
        let cache = Arc::new(RecordingCache::new());
        let cached = cached(repository, cache.clone());

        let result = cached
            .create_product(&Product::new("", "Accessories", "9.90"))
            .await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert_eq!(RecordingCache::count(&cache.deletes), 0);
    }

    #[tokio::test]
    async fn test_repository_failure_does_not_invalidate() {
        let cache = Arc::new(RecordingCache::new());
        let cached = CachedProductRepository::new(
            Arc::new(OfflineRepository),
            cache.clone(),
            CachePolicy::default(),
        );

        assert!(cached.delete_product(1).await.is_err());
        assert_eq!(RecordingCache::count(&cache.deletes), 0);
    }

    #[tokio::test]
    async fn test_write_succeeds_when_cache_is_down() {
        let repository = Arc::new(InMemoryRepository::new());
        let cached = CachedProductRepository::new(
            repository,
            Arc::new(FailingCache),
            CachePolicy::default(),
        );

        let id = cached.create_product(&sample_product()).await.unwrap();

        assert_eq!(cached.list_products().await.unwrap()[0].id, id);
    }

    #[tokio::test]
    async fn test_works_with_trait_objects() {
        let repository: Arc<dyn ProductRepository> = Arc::new(InMemoryRepository::new());
        let cache: Arc<dyn Cache> = Arc::new(RecordingCache::new());
        let cached = CachedProductRepository::new(repository, cache, CachePolicy::default());

        cached.create_product(&sample_product()).await.unwrap();

        assert_eq!(cached.list_products().await.unwrap().len(), 1);
    }
}
