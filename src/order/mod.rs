//! Product stock and order placement
//!
//! A single `orders` table holds one row per product. Creating a product
//! inserts a row; placing an order decrements that row's `stock` inside one
//! transaction, after checking availability with [`check_stock`].

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod service;
pub mod stock;
pub mod store;

pub use error::OrderError;
pub use memory::MemoryProductStore;
pub use models::{NewProduct, ProductRecord};
pub use postgres::PgProductStore;
pub use service::OrderService;
pub use stock::check_stock;
pub use store::ProductStore;
