//! API request types for product operations.
//!
//! Pure data types with no I/O; the HTTP layer deserializes these from JSON
//! bodies and converts them into [`Product`] values.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::types::Product;

/// Request payload for creating a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: i32,
    /// Defaults to today when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<NaiveDate>,
}

impl CreateProductRequest {
    /// Converts the request into an unsaved product.
    pub fn into_product(self) -> Product {
        Product {
            id: 0,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            created_on: self
                .created_on
                .unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

/// Request payload for replacing an existing product.
///
/// The identifier comes from the path, never from the body. `created_on` is
/// required so a replacement never rewrites the creation date implicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: i32,
    pub created_on: NaiveDate,
}

impl UpdateProductRequest {
    /// Converts the request into the product stored under `id`.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            created_on: self.created_on,
        }
    }
}
