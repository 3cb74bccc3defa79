use crate::db::Database;
use crate::order::OrderService;

/// Shared by every handler
pub struct AppState {
    pub order_service: OrderService,
    /// Absent when running on the in-memory store
    pub pg_db: Option<Database>,
}

impl AppState {
    pub fn new(order_service: OrderService, pg_db: Option<Database>) -> Self {
        Self {
            order_service,
            pg_db,
        }
    }
}
