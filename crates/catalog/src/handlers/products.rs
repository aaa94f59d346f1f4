//! Product CRUD handlers.
//!
//! These handlers use the repository trait object for database access.
//! Cache invalidation is handled by the cached repository decorator.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use catalog_core::catalog::{
    validate_product, validate_product_id, CreateProductRequest, Product, UpdateProductRequest,
};

use crate::{handlers::AppError, state::AppState};

/// List all products (GET /api/product).
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.product_repo.list_products().await?;
    Ok(Json(products))
}

/// Create a new product (POST /api/product).
///
/// Responds with the stored product, including its assigned id.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let product = request.into_product();
    validate_product(&product)?;

    let id = state.product_repo.create_product(&product).await?;
    let product = product.with_id(id);

    tracing::info!(product_id = id, name = %product.name, "Created new product");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product by ID (PUT /api/product/{id}).
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    validate_product_id(id)?;

    let Json(request) = payload?;
    let product = request.into_product(id);
    validate_product(&product)?;

    state.product_repo.update_product(&product).await?;

    tracing::info!(product_id = id, "Updated product");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product by ID (DELETE /api/product/{id}).
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    validate_product_id(id)?;

    state.product_repo.delete_product(id).await?;

    tracing::info!(product_id = id, "Deleted product");

    Ok(StatusCode::NO_CONTENT)
}
