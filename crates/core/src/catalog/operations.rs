use super::error::ProductError;
use super::types::Product;

/// Validates the fields required to create or update a product.
///
/// Name, category and price must contain something other than whitespace.
/// The identifier is not checked here, see [`validate_product_id`].
pub fn validate_product(product: &Product) -> Result<(), ProductError> {
    if product.name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }
    if product.category.trim().is_empty() {
        return Err(ProductError::EmptyCategory);
    }
    if product.price.trim().is_empty() {
        return Err(ProductError::EmptyPrice);
    }
    Ok(())
}

/// Validates an identifier addressed by an update or delete.
pub fn validate_product_id(id: i64) -> Result<(), ProductError> {
    if id <= 0 {
        return Err(ProductError::InvalidId(id));
    }
    Ok(())
}
