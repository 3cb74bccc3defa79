use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `orders` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ProductRecord {
    /// Assigned by storage on insert
    #[schema(example = 1)]
    pub order_id: i32,
    #[schema(example = "A1")]
    pub sku: String,
    #[schema(example = "Widget")]
    pub name: String,
    /// Units currently available, never negative
    #[schema(example = 10)]
    pub stock: i32,
}

/// Fields for a product that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub stock: i32,
}

impl NewProduct {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, stock: i32) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            stock,
        }
    }

    pub(crate) fn into_record(self, order_id: i32) -> ProductRecord {
        ProductRecord {
            order_id,
            sku: self.sku,
            name: self.name,
            stock: self.stock,
        }
    }
}
