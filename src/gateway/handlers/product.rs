use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::order::{OrderError, ProductRecord};

use super::super::state::AppState;
use super::super::types::{CreateProductRequest, ErrorResponse};

/// Create product endpoint
///
/// POST /products
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductRecord),
        (status = 400, description = "Negative stock", body = ErrorResponse),
        (status = 500, description = "Database failure, transaction rolled back", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductRecord>), OrderError> {
    let record = state.order_service.create_product(req.into()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
