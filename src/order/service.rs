//! Order Service - input checks and logging around a [`ProductStore`]
//!
//! Handlers stay thin HTTP adapters; everything that decides an outcome
//! lives here or in the store.

use std::sync::Arc;

use tracing::{error, info};

use super::error::OrderError;
use super::models::{NewProduct, ProductRecord};
use super::store::ProductStore;

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn ProductStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    /// Insert a product row
    pub async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, OrderError> {
        if product.stock < 0 {
            return Err(OrderError::InvalidParameter(
                "stock must not be negative".to_string(),
            ));
        }

        info!(sku = %product.sku, stock = product.stock, "create product");
        let result = self.store.create_product(product).await;
        match &result {
            Ok(record) => info!(order_id = record.order_id, "product created"),
            Err(e) => log_failure("create product", e),
        }
        result
    }

    /// Decrement `stock` of row `order_id` by `qty`
    pub async fn place_order(&self, order_id: i32, qty: i32) -> Result<ProductRecord, OrderError> {
        if qty <= 0 {
            return Err(OrderError::InvalidParameter(
                "qty must be positive".to_string(),
            ));
        }

        info!(order_id, qty, "place order");
        let result = self.store.place_order(order_id, qty).await;
        match &result {
            Ok(record) => info!(order_id, stock = record.stock, "order placed"),
            Err(e) => log_failure("place order", e),
        }
        result
    }

    pub async fn get_product(&self, order_id: i32) -> Result<Option<ProductRecord>, OrderError> {
        self.store.get_product(order_id).await
    }
}

fn log_failure(op: &str, e: &OrderError) {
    if e.is_rejection() {
        info!(op, reason = %e, "rejected");
    } else {
        error!(op, error = %e, "failed, transaction rolled back");
    }
}
