use axum::extract::{Path, State};
use axum::Json;

use storefront_core::catalog::Product;
use storefront_core::error::StorefrontError;

use crate::app_state::AppState;
use crate::routes::ApiError;

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    // Guard records into product_processing_seconds when it drops, on every
    // exit path.
    let _timer = state.product_processing().start_timer();
    Json(state.products().all().to_vec())
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .products()
        .find(id)
        .cloned()
        .ok_or(StorefrontError::NotFound("Product"))?;
    Ok(Json(product))
}
