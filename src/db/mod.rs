//! Database connection management

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::DatabaseConfig;

/// `orders` holds one row per product; `stock` is decremented by orders.
pub const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    order_id SERIAL PRIMARY KEY,
    sku      TEXT    NOT NULL,
    name     TEXT    NOT NULL,
    stock    INTEGER NOT NULL CHECK (stock >= 0)
)
"#;

/// PostgreSQL database connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        tracing::info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create the `orders` table if missing
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_ORDERS_TABLE).execute(&self.pool).await?;
        tracing::info!("Schema ready: orders");
        Ok(())
    }
}
