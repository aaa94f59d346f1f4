use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// `id` is assigned by the repository on creation and is `0` until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Price as entered, kept textual to avoid float rounding.
    pub price: String,
    pub quantity: i32,
    pub created_on: NaiveDate,
}

impl Product {
    /// Creates an unsaved product dated today with zero stock.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category: category.into(),
            price: price.into(),
            quantity: 0,
            created_on: Utc::now().date_naive(),
        }
    }

    /// Sets a specific ID for this product.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the stock quantity.
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the creation date (useful for testing).
    pub fn with_created_on(mut self, created_on: NaiveDate) -> Self {
        self.created_on = created_on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_has_no_id() {
        let product = Product::new("Keyboard", "Peripherals", "49.90");

        assert_eq!(product.id, 0);
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn test_builder_methods() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let product = Product::new("Mouse", "Peripherals", "19.90")
            .with_id(7)
            .with_quantity(12)
            .with_created_on(date);

        assert_eq!(product.id, 7);
        assert_eq!(product.quantity, 12);
        assert_eq!(product.created_on, date);
    }

    #[test]
    fn test_json_field_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let product = Product::new("Mouse", "Peripherals", "19.90")
            .with_id(1)
            .with_created_on(date);

        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Mouse");
        assert_eq!(json["category"], "Peripherals");
        assert_eq!(json["price"], "19.90");
        assert_eq!(json["quantity"], 0);
        assert_eq!(json["created_on"], "2024-03-10");
    }
}
