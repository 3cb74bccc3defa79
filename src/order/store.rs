//! Storage abstraction for product rows
//!
//! Lets the service run against PostgreSQL in production and an in-memory
//! map in tests or local runs.

use async_trait::async_trait;

use super::error::OrderError;
use super::models::{NewProduct, ProductRecord};

#[async_trait]
pub trait ProductStore: Send + Sync {
    fn name(&self) -> &'static str;

    /// Insert a row and return it with its assigned `order_id`.
    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, OrderError>;

    /// Atomically check availability and decrement `stock` by `qty`.
    ///
    /// On any `Err` the stored stock is unchanged.
    async fn place_order(&self, order_id: i32, qty: i32) -> Result<ProductRecord, OrderError>;

    /// Read a row without modifying it
    async fn get_product(&self, order_id: i32) -> Result<Option<ProductRecord>, OrderError>;
}
