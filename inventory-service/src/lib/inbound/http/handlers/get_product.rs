use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::InventoryServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_product(
    State(state): State<AppState>,
    product_id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let Path(product_id) = product_id?;

    state
        .inventory_service
        .get_product(ProductId(product_id))
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
