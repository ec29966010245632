use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Cart status in the purchase lifecycle. Serialized lowercase to match the
/// values the store keeps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CartStatus {
    Pending,
    Paid,
    Cancelled,
}

/// One product line in a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
}

/// A customer's cart; once paid it doubles as the order record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: CartStatus,
    pub total_cents: i64,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            status: CartStatus::Pending,
            total_cents: 0,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn add_item(&mut self, product_id: Uuid, quantity: u32) {
        self.items.push(CartItem {
            id: Uuid::new_v4(),
            product_id,
            quantity,
        });
    }
}

/// A captured payment for a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub cart_id: Uuid,
    /// Gateway transaction reference.
    pub tx_ref: String,
    pub amount_cents: i64,
    pub created_at: DateTime<Utc>,
}

/// A refund issued against a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Refund {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub amount_cents: i64,
    pub created_at: DateTime<Utc>,
}
