use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use super::ProductRequestBody;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::InventoryServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_product(
    State(state): State<AppState>,
    product_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Path(product_id) = product_id?;
    let Json(body) = body?;

    state
        .inventory_service
        .update_product(ProductId(product_id), body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageData::success()))
}
