use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use super::ProductRequestBody;
use crate::domain::product::ports::InventoryServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let Json(body) = body?;

    state
        .inventory_service
        .create_product(body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}
