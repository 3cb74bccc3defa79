//! Request bodies, error body, and the mapping from [`OrderError`] to HTTP

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::order::{NewProduct, OrderError};

/// POST /products body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "A1")]
    pub sku: String,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 10)]
    pub stock: i32,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct::new(req.sku, req.name, req.stock)
    }
}

/// POST /orders body
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    /// `order_id` of the product row
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 3)]
    pub qty: i32,
}

/// Body of every non-2xx response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "items not enough.")]
    pub message: String,
    /// Present on "items not enough." rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 7)]
    pub in_stock: Option<i32>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            in_stock: None,
        }
    }
}

/// Storage details stay in the log, not in the response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match self {
            OrderError::OutOfStock => (StatusCode::CONFLICT, ErrorResponse::new(message)),
            OrderError::InsufficientStock { in_stock } => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    message,
                    in_stock: Some(in_stock),
                },
            ),
            OrderError::InvalidParameter(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            OrderError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
            ),
        };
        (status, Json(body)).into_response()
    }
}
