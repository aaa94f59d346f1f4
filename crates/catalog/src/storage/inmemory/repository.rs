//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::catalog::{validate_product, validate_product_id, Product};
use catalog_core::storage::{ProductRepository, RepositoryError, Result};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

/// In-memory storage backend.
///
/// Identifiers are assigned from a monotonically increasing sequence and
/// never reused, matching an auto-increment column. Products are listed in
/// identifier order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create_product(&self, product: &Product) -> Result<i64> {
        validate_product(product)?;

        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, product.clone().with_id(id));
        Ok(id)
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        validate_product_id(product.id)?;
        validate_product(product)?;

        let mut table = self.table.write().await;
        let Some(stored) = table.rows.get_mut(&product.id) else {
            return Err(RepositoryError::NotFound {
                entity_type: "Product",
                id: product.id.to_string(),
            });
        };
        *stored = product.clone();
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        validate_product_id(id)?;

        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product::new("Lamp", "Lighting", "35.00").with_quantity(4)
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();

        let first = repo.create_product(&lamp()).await.unwrap();
        let second = repo.create_product(&lamp()).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_create_ignores_incoming_id() {
        let repo = InMemoryRepository::new();

        let id = repo.create_product(&lamp().with_id(500)).await.unwrap();
        let products = repo.list_products().await.unwrap();

        assert_eq!(id, 1);
        assert_eq!(products[0].id, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields() {
        let repo = InMemoryRepository::new();

        let result = repo
            .create_product(&Product::new("Lamp", " ", "35.00"))
            .await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert!(repo.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_in_id_order() {
        let repo = InMemoryRepository::new();
        repo.create_product(&Product::new("B", "x", "1")).await.unwrap();
        repo.create_product(&Product::new("A", "x", "1")).await.unwrap();

        let names: Vec<_> = repo
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_update_replaces_product() {
        let repo = InMemoryRepository::new();
        let id = repo.create_product(&lamp()).await.unwrap();

        let updated = Product::new("Desk Lamp", "Lighting", "39.00").with_id(id);
        repo.update_product(&updated).await.unwrap();

        let products = repo.list_products().await.unwrap();
        assert_eq!(products, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryRepository::new();

        let result = repo.update_product(&lamp().with_id(9)).await;

        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                entity_type: "Product",
                id: "9".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_update_non_positive_id_is_invalid() {
        let repo = InMemoryRepository::new();

        let result = repo.update_product(&lamp().with_id(0)).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_product() {
        let repo = InMemoryRepository::new();
        let id = repo.create_product(&lamp()).await.unwrap();

        repo.delete_product(id).await.unwrap();

        assert!(repo.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let repo = InMemoryRepository::new();
        assert!(repo.delete_product(42).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_non_positive_id_is_invalid() {
        let repo = InMemoryRepository::new();

        let result = repo.delete_product(-1).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryRepository::new();
        let id = repo.create_product(&lamp()).await.unwrap();
        repo.delete_product(id).await.unwrap();

        let next = repo.create_product(&lamp()).await.unwrap();

        assert_eq!(next, id + 1);
    }
}
