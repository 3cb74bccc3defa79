//! stock_service - product stock and order placement over HTTP
//!
//! # Modules
//!
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL pool, health check, schema
//! - [`order`] - Product rows, stock check, stores, service
//! - [`gateway`] - axum router and handlers

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod order;

/// Git hash of the build, set by `build.rs`
pub const VERSION: &str = env!("GIT_HASH");

pub use config::{AppConfig, StorageBackend};
pub use db::Database;
pub use gateway::{build_router, run_server, state::AppState};
pub use order::{
    MemoryProductStore, NewProduct, OrderError, OrderService, PgProductStore, ProductRecord,
    ProductStore,
};
