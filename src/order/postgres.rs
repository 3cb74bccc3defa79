//! PostgreSQL product store
//!
//! Each call borrows one pooled connection for the lifetime of its
//! transaction. Dropping an uncommitted `Transaction` rolls it back and hands
//! the connection back to the pool, so every early return releases it.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, warn};

use super::error::OrderError;
use super::models::{NewProduct, ProductRecord};
use super::stock::check_stock;
use super::store::ProductStore;

const INSERT_PRODUCT: &str = r#"
    INSERT INTO orders (sku, name, stock)
    VALUES ($1, $2, $3)
    RETURNING order_id, sku, name, stock
"#;

// Row lock is held until commit/rollback; concurrent orders on the same row
// queue behind it instead of reading a stale stock.
const SELECT_STOCK_FOR_UPDATE: &str = "SELECT stock FROM orders WHERE order_id = $1 FOR UPDATE";

const UPDATE_STOCK: &str = r#"
    UPDATE orders SET stock = $2
    WHERE order_id = $1
    RETURNING order_id, sku, name, stock
"#;

const SELECT_PRODUCT: &str = "SELECT order_id, sku, name, stock FROM orders WHERE order_id = $1";

pub struct PgProductStore {
    pool: PgPool,
    fail_before_commit: AtomicBool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            fail_before_commit: AtomicBool::new(false),
        }
    }

    /// Fail every subsequent write after its statements ran but before
    /// COMMIT, leaving the transaction to roll back.
    #[cfg(any(test, feature = "fault-injection"))]
    pub fn fail_before_commit(&self, fail: bool) {
        self.fail_before_commit.store(fail, Ordering::SeqCst);
    }

    fn check_commit(&self) -> Result<(), OrderError> {
        if self.fail_before_commit.load(Ordering::SeqCst) {
            return Err(OrderError::Database(sqlx::Error::Protocol(
                "simulated failure before commit".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, OrderError> {
        let mut tx = self.pool.begin().await?;

        let record: ProductRecord = sqlx::query_as(INSERT_PRODUCT)
            .bind(&product.sku)
            .bind(&product.name)
            .bind(product.stock)
            .fetch_one(&mut *tx)
            .await?;

        // tx dropped on error: rollback
        self.check_commit()?;
        tx.commit().await?;
        debug!(order_id = record.order_id, sku = %record.sku, "product inserted");
        Ok(record)
    }

    async fn place_order(&self, order_id: i32, qty: i32) -> Result<ProductRecord, OrderError> {
        let mut tx = self.pool.begin().await?;

        let stock: Option<i32> = sqlx::query_scalar(SELECT_STOCK_FOR_UPDATE)
            .bind(order_id)
            .fetch_optional(&mut *tx)
            .await?;

        let new_stock = match check_stock(stock, qty) {
            Ok(new_stock) => new_stock,
            Err(rejection) => {
                if let Err(e) = tx.rollback().await {
                    warn!(order_id, error = %e, "rollback after rejection failed");
                }
                return Err(rejection);
            }
        };

        let record: ProductRecord = sqlx::query_as(UPDATE_STOCK)
            .bind(order_id)
            .bind(new_stock)
            .fetch_one(&mut *tx)
            .await?;

        self.check_commit()?;
        tx.commit().await?;
        debug!(order_id, qty, new_stock, "stock decremented");
        Ok(record)
    }

    async fn get_product(&self, order_id: i32) -> Result<Option<ProductRecord>, OrderError> {
        let record = sqlx::query_as(SELECT_PRODUCT)
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::Database;

    async fn create_test_store() -> PgProductStore {
        let mut config = DatabaseConfig::default();
        if let Ok(url) = std::env::var(crate::config::DATABASE_URL_ENV) {
            config.url = url;
        }
        let db = Database::connect(&config).await.expect("Failed to connect");
        db.init_schema().await.expect("Failed to init schema");
        PgProductStore::new(db.pool().clone())
    }

    #[test]
    fn test_update_statement_has_no_stray_comma() {
        assert!(!UPDATE_STOCK.contains(", WHERE"));
        assert!(!UPDATE_STOCK.contains(",\n    WHERE"));
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL database"]
    async fn test_create_then_order() {
        let store = create_test_store().await;

        let created = store
            .create_product(NewProduct::new("A1", "Widget", 10))
            .await
            .unwrap();
        assert!(created.order_id > 0);
        assert_eq!(created.stock, 10);

        let updated = store.place_order(created.order_id, 3).await.unwrap();
        assert_eq!(updated.stock, 7);

        match store.place_order(created.order_id, 100).await {
            Err(OrderError::InsufficientStock { in_stock }) => assert_eq!(in_stock, 7),
            other => panic!("expected InsufficientStock, got {:?}", other),
        }
        let stored = store.get_product(created.order_id).await.unwrap().unwrap();
        assert_eq!(stored.stock, 7);
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL database"]
    async fn test_zero_stock_and_missing_row() {
        let store = create_test_store().await;

        let empty = store
            .create_product(NewProduct::new("Z0", "Empty", 0))
            .await
            .unwrap();
        assert!(matches!(
            store.place_order(empty.order_id, 1).await,
            Err(OrderError::OutOfStock)
        ));
        assert!(matches!(
            store.place_order(i32::MAX, 1).await,
            Err(OrderError::OutOfStock)
        ));
    }

    fn unique_sku(prefix: &str) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        format!("{}-{}", prefix, nanos)
    }

    async fn count_sku(store: &PgProductStore, sku: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE sku = $1")
            .bind(sku)
            .fetch_one(&store.pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL database"]
    async fn test_negative_stock_insert_rolls_back() {
        let store = create_test_store().await;
        let sku = unique_sku("N1");

        // CHECK (stock >= 0) rejects the insert inside the transaction
        let result = store
            .create_product(NewProduct::new(sku.clone(), "Negative", -1))
            .await;
        assert!(matches!(result, Err(OrderError::Database(_))));
        assert_eq!(count_sku(&store, &sku).await, 0);
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL database"]
    async fn test_failed_commit_discards_insert() {
        let store = create_test_store().await;
        let sku = unique_sku("F1");

        store.fail_before_commit(true);
        let result = store
            .create_product(NewProduct::new(sku.clone(), "Lost", 4))
            .await;
        assert!(matches!(result, Err(OrderError::Database(_))));
        assert_eq!(count_sku(&store, &sku).await, 0);
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL database"]
    async fn test_failed_commit_leaves_stock_unchanged() {
        let store = create_test_store().await;
        let created = store
            .create_product(NewProduct::new(unique_sku("R1"), "Rollback", 10))
            .await
            .unwrap();

        // UPDATE runs under the row lock, then the transaction is abandoned
        store.fail_before_commit(true);
        let result = store.place_order(created.order_id, 3).await;
        assert!(matches!(result, Err(OrderError::Database(_))));
        let stored = store.get_product(created.order_id).await.unwrap().unwrap();
        assert_eq!(stored.stock, 10);

        // lock was released with the rolled back transaction
        store.fail_before_commit(false);
        let updated = store.place_order(created.order_id, 3).await.unwrap();
        assert_eq!(updated.stock, 7);
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL database"]
    async fn test_negative_qty_leaves_stock_unchanged() {
        let store = create_test_store().await;
        let created = store
            .create_product(NewProduct::new(unique_sku("Q1"), "Guarded", 10))
            .await
            .unwrap();

        let result = store.place_order(created.order_id, -5).await;
        assert!(matches!(result, Err(OrderError::InvalidParameter(_))));
        let stored = store.get_product(created.order_id).await.unwrap().unwrap();
        assert_eq!(stored.stock, 10);
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL database"]
    async fn test_concurrent_orders_never_oversell() {
        let store = std::sync::Arc::new(create_test_store().await);
        let created = store
            .create_product(NewProduct::new("C1", "Contended", 5))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..20 {
            let store = store.clone();
            let id = created.order_id;
            handles.push(tokio::spawn(async move { store.place_order(id, 1).await }));
        }

        let mut filled = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                filled += 1;
            }
        }
        assert_eq!(filled, 5);
        let stored = store.get_product(created.order_id).await.unwrap().unwrap();
        assert_eq!(stored.stock, 0);
    }
}
