mod error;
mod operations;
mod requests;
mod types;

pub use error::ProductError;
pub use operations::{validate_product, validate_product_id};
pub use requests::{CreateProductRequest, UpdateProductRequest};
pub use types::Product;
