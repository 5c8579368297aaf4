use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::InventoryServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_product(
    State(state): State<AppState>,
    product_id: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Path(product_id) = product_id?;

    state
        .inventory_service
        .delete_product(ProductId(product_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageData::success()))
}
