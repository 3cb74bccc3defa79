//! In-memory product store
//!
//! Serializes every operation behind one mutex, so a check and its update
//! can never interleave with another order on the same row.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::error::OrderError;
use super::models::{NewProduct, ProductRecord};
use super::stock::check_stock;
use super::store::ProductStore;

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, ProductRecord>,
}

#[derive(Default)]
pub struct MemoryProductStore {
    inner: Mutex<Inner>,
    fail_writes: AtomicBool,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail after its checks have passed, the way
    /// a dropped connection would fail mid-transaction.
    #[cfg(any(test, feature = "fault-injection"))]
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_write(&self) -> Result<(), OrderError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(OrderError::Database(sqlx::Error::Protocol(
                "simulated write failure".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, OrderError> {
        if product.stock < 0 {
            return Err(OrderError::InvalidParameter(
                "stock must not be negative".to_string(),
            ));
        }

        let mut inner = self.inner.lock().await;
        self.check_write()?;

        inner.last_id += 1;
        let record = product.into_record(inner.last_id);
        inner.rows.insert(record.order_id, record.clone());
        debug!(order_id = record.order_id, "memory insert");
        Ok(record)
    }

    async fn place_order(&self, order_id: i32, qty: i32) -> Result<ProductRecord, OrderError> {
        let mut inner = self.inner.lock().await;

        let stock = inner.rows.get(&order_id).map(|r| r.stock);
        let new_stock = check_stock(stock, qty)?;
        self.check_write()?;

        let Some(row) = inner.rows.get_mut(&order_id) else {
            return Err(OrderError::OutOfStock);
        };
        row.stock = new_stock;
        debug!(order_id, new_stock, "memory update");
        Ok(row.clone())
    }

    async fn get_product(&self, order_id: i32) -> Result<Option<ProductRecord>, OrderError> {
        Ok(self.inner.lock().await.rows.get(&order_id).cloned())
    }
}
