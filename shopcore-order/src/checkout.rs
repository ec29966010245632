//! Server-side cart pricing.
//!
//! Totals are always recomputed from the product snapshot at checkout time,
//! never trusted from the client; line prices come from the FIFO pricing in
//! the catalog so the charge matches what the storefront displays.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcore_catalog::{current_cost, current_price, Product};

use crate::models::CartItem;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Cart has no items")]
    EmptyCart,
}

/// Priced cart, ready to hand to the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub subtotal_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
}

fn find_product<'a>(products: &'a [Product], id: Uuid) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

/// Price a cart against a product snapshot.
///
/// Items whose product is missing from the snapshot contribute zero rather
/// than failing the checkout; the storefront treats stale cart lines the same
/// way.
pub fn price_cart(
    items: &[CartItem],
    products: &[Product],
    delivery_fee_cents: i64,
) -> Result<CheckoutSummary, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut subtotal_cents = 0i64;
    for item in items {
        match find_product(products, item.product_id) {
            Some(product) => {
                subtotal_cents += current_price(product) * i64::from(item.quantity);
            }
            None => {
                tracing::warn!(product_id = %item.product_id, "cart line references unknown product");
            }
        }
    }

    Ok(CheckoutSummary {
        subtotal_cents,
        delivery_fee_cents,
        total_cents: subtotal_cents + delivery_fee_cents,
    })
}

/// Acquisition cost of a cart at current FIFO cost, for profit reporting.
/// Unknown products cost zero, mirroring `price_cart`.
pub fn cart_cost(items: &[CartItem], products: &[Product]) -> i64 {
    items
        .iter()
        .map(|item| {
            find_product(products, item.product_id)
                .map(|product| current_cost(product) * i64::from(item.quantity))
                .unwrap_or(0)
        })
        .sum()
}
