//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{CreateProductRequest, ErrorResponse, PlaceOrderRequest};
use crate::order::ProductRecord;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock Service API",
        version = "0.1.0",
        description = "Create products and place stock-checked orders.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::product::create_product,
        crate::gateway::handlers::order::place_order,
    ),
    components(
        schemas(
            ProductRecord,
            CreateProductRequest,
            PlaceOrderRequest,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Products", description = "Product creation"),
        (name = "Orders", description = "Order placement against product stock"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
