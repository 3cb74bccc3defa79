use super::error::OrderError;

/// Decide an order against the stock currently recorded for a row.
///
/// `stock` is `None` when the row does not exist. A recorded stock of zero is
/// treated the same as a missing row. Returns the stock remaining after the
/// order is applied, which is never negative.
pub fn check_stock(stock: Option<i32>, qty: i32) -> Result<i32, OrderError> {
    if qty <= 0 {
        return Err(OrderError::InvalidParameter(
            "qty must be positive".to_string(),
        ));
    }
    match stock {
        None | Some(0) => Err(OrderError::OutOfStock),
        Some(in_stock) if qty > in_stock => Err(OrderError::InsufficientStock { in_stock }),
        Some(in_stock) => in_stock
            .checked_sub(qty)
            .filter(|remaining| *remaining >= 0)
            .ok_or(OrderError::InsufficientStock { in_stock }),
    }
}
