use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::order::{OrderError, ProductRecord};

use super::super::state::AppState;
use super::super::types::{ErrorResponse, PlaceOrderRequest};

/// Place order endpoint
///
/// POST /orders
///
/// Locks the row, checks stock, and decrements it by `qty` in one
/// transaction. A zero or missing stock and a `qty` above stock are both
/// 409 and leave the row untouched.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed, updated row returned", body = ProductRecord),
        (status = 400, description = "qty is not positive", body = ErrorResponse),
        (status = 409, description = "Out of stock, or items not enough (with in_stock)", body = ErrorResponse),
        (status = 500, description = "Database failure, transaction rolled back", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<ProductRecord>), OrderError> {
    let record = state.order_service.place_order(req.id, req.qty).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
