use async_trait::async_trait;

use crate::catalog::Product;

use super::Result;

/// Repository for product operations: the source of truth behind the cache.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists every product in the catalog.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Creates a new product and returns the identifier assigned to it.
    ///
    /// The `id` field of `product` is ignored.
    async fn create_product(&self, product: &Product) -> Result<i64>;

    /// Replaces the product stored under `product.id`.
    async fn update_product(&self, product: &Product) -> Result<()>;

    /// Deletes a product by its ID. Deleting an unknown ID succeeds.
    async fn delete_product(&self, id: i64) -> Result<()>;
}
