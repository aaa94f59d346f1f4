use thiserror::Error;

/// Errors that can occur when validating a product.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product name cannot be empty")]
    EmptyName,
    #[error("Product category cannot be empty")]
    EmptyCategory,
    #[error("Product price cannot be empty")]
    EmptyPrice,
    #[error("Product ID must be greater than zero, got {0}")]
    InvalidId(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_error_display() {
        assert_eq!(
            ProductError::EmptyName.to_string(),
            "Product name cannot be empty"
        );
        assert_eq!(
            ProductError::EmptyPrice.to_string(),
            "Product price cannot be empty"
        );
        assert_eq!(
            ProductError::InvalidId(-3).to_string(),
            "Product ID must be greater than zero, got -3"
        );
    }
}
