//! HTTP handlers
//!
//! Each handler emits exactly one response: the success body, or the
//! [`OrderError`](crate::order::OrderError) rendered by its `IntoResponse`.

pub mod health;
pub mod order;
pub mod product;

pub use health::{HealthResponse, health_check};
pub use order::place_order;
pub use product::create_product;
