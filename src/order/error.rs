use thiserror::Error;

/// Outcome of a failed product/order operation.
///
/// `OutOfStock`, `InsufficientStock` and `InvalidParameter` are rejections
/// decided before anything is written; `Database` means the transaction was
/// rolled back.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Out of stock.")]
    OutOfStock,

    #[error("items not enough.")]
    InsufficientStock { in_stock: i32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl OrderError {
    /// True for business-rule and input rejections, false for storage failures
    pub fn is_rejection(&self) -> bool {
        !matches!(self, OrderError::Database(_))
    }
}
