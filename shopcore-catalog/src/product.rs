use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// One batch of inventory received for a product.
///
/// Lots are append-only from the catalog's perspective: depletion is recorded
/// as separate sales in the store, never by mutating a lot. `created_at`
/// establishes FIFO ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLot {
    pub id: Uuid,

    /// Units received in this lot.
    pub added_quantity: u32,

    /// Unit sale price fixed when the lot was received, in cents.
    pub price_per_unit_cents: i64,

    /// Unit acquisition cost, in cents.
    pub cost_per_unit_cents: i64,

    pub created_at: DateTime<Utc>,
}

/// Core product structure
///
/// A product owns its lot history. The store does not guarantee any ordering
/// on `lots`; pricing sorts its own view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,

    /// Catalog price in cents, used only when no lots exist.
    pub price_cents: i64,

    pub is_active: bool,
    pub lots: Vec<StockLot>,
    pub metadata: serde_json::Value,
}

impl Product {
    pub fn new(name: impl Into<String>, price_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            price_cents,
            is_active: true,
            lots: Vec::new(),
            metadata: serde_json::json!({}),
        }
    }
}
