//! SQLite repository implementation.
//!
//! Implements `ProductRepository` from `catalog_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use catalog_core::catalog::{validate_product, validate_product_id, Product};
use catalog_core::storage::{ProductRepository, RepositoryError, Result};

use super::conversions::{format_date, row_to_product};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based product repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ProductRepository for SqliteRepository {
    async fn list_products(&self) -> Result<Vec<Product>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_PRODUCTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_product).map_err(wrap_err)?;

                let mut products = Vec::new();
                for row_result in rows {
                    products.push(row_result.map_err(wrap_err)?);
                }
                Ok(products)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product"))
    }

    async fn create_product(&self, product: &Product) -> Result<i64> {
        validate_product(product)?;

        let name = product.name.clone();
        let category = product.category.clone();
        let price = product.price.clone();
        let quantity = product.quantity;
        let created_on = format_date(&product.created_on);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_PRODUCT,
                    rusqlite::params![name, category, price, quantity, created_on],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product"))
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        validate_product_id(product.id)?;
        validate_product(product)?;

        let id = product.id;
        let name = product.name.clone();
        let category = product.category.clone();
        let price = product.price.clone();
        let quantity = product.quantity;
        let created_on = format_date(&product.created_on);

        let rows_affected = self
            .conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PRODUCT,
                        rusqlite::params![id, name, category, price, quantity, created_on],
                    )
                    .map_err(wrap_err)?;
                Ok(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Product", id.to_string()))?;

        if rows_affected == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "Product",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        validate_product_id(id)?;

        // Deleting a missing row is not an error.
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_PRODUCT, [id])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Product", id.to_string()))
    }
}
