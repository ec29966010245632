//! FIFO stock pricing.
//!
//! The current price of a product comes from its oldest lot with remaining
//! stock; once every lot is depleted, the most recently received lot applies;
//! a product with no lot history falls back to its catalog price.
//!
//! Everything here is a pure function over a snapshot: no store access, no
//! mutation of the caller's data, no failure modes. Degenerate input (empty
//! lot list, zero prices) coalesces to a defensible default because these
//! values feed storefront and admin displays, not accounting.

use serde::{Deserialize, Serialize};

use crate::product::{Product, StockLot};

/// Point-in-time availability and pricing snapshot for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockStatus {
    pub in_stock: bool,
    pub quantity: u32,
    pub current_price_cents: i64,
    pub current_cost_cents: i64,
}

/// Total units across all lots. An empty history counts as zero.
pub fn total_stock_quantity(lots: &[StockLot]) -> u32 {
    lots.iter().map(|lot| lot.added_quantity).sum()
}

/// FIFO view of the lot history: oldest first, ties broken by lot id so
/// repeated calls on identical input always agree.
fn fifo_ordered(lots: &[StockLot]) -> Vec<&StockLot> {
    let mut ordered: Vec<&StockLot> = lots.iter().collect();
    ordered.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    ordered
}

/// The lot whose price and cost apply right now: the oldest lot with
/// remaining stock, or the most recently received lot once everything is
/// depleted. `None` only when the product has no lot history at all.
fn effective_lot(lots: &[StockLot]) -> Option<&StockLot> {
    let ordered = fifo_ordered(lots);
    ordered
        .iter()
        .copied()
        .find(|lot| lot.added_quantity > 0)
        .or_else(|| ordered.last().copied())
}

/// Current selling price in cents.
///
/// A selected lot with a zero price falls back to the catalog price, matching
/// how incomplete stock records are displayed elsewhere.
pub fn current_price(product: &Product) -> i64 {
    match effective_lot(&product.lots) {
        Some(lot) if lot.price_per_unit_cents > 0 => lot.price_per_unit_cents,
        _ => product.price_cents,
    }
}

/// Current acquisition cost in cents, for profit figures.
///
/// There is no catalog-level cost, so a product without lots costs zero.
pub fn current_cost(product: &Product) -> i64 {
    effective_lot(&product.lots)
        .map(|lot| lot.cost_per_unit_cents)
        .unwrap_or(0)
}

pub fn is_in_stock(product: &Product) -> bool {
    total_stock_quantity(&product.lots) > 0
}

/// One consistent snapshot of availability and pricing.
///
/// Callers rendering a product should prefer this over separate calls so the
/// quantity, price and cost all come from the same view of the lot list.
pub fn stock_status(product: &Product) -> StockStatus {
    let quantity = total_stock_quantity(&product.lots);

    StockStatus {
        in_stock: quantity > 0,
        quantity,
        current_price_cents: current_price(product),
        current_cost_cents: current_cost(product),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn lot(qty: u32, price: i64, cost: i64, age_days: i64) -> StockLot {
        StockLot {
            id: Uuid::new_v4(),
            added_quantity: qty,
            price_per_unit_cents: price,
            cost_per_unit_cents: cost,
            created_at: Utc::now() - Duration::days(age_days),
        }
    }

    fn product_with_lots(price_cents: i64, lots: Vec<StockLot>) -> Product {
        let mut product = Product::new("Dried Hibiscus", price_cents);
        product.lots = lots;
        product
    }

    #[test]
    fn test_total_quantity_empty() {
        assert_eq!(total_stock_quantity(&[]), 0);
    }

    #[test]
    fn test_total_quantity_ignores_order() {
        let a = vec![lot(3, 100, 50, 2), lot(7, 120, 60, 1)];
        let b: Vec<StockLot> = a.iter().rev().cloned().collect();
        assert_eq!(total_stock_quantity(&a), 10);
        assert_eq!(total_stock_quantity(&b), 10);
    }

    #[test]
    fn test_price_skips_depleted_oldest_lot() {
        let product = product_with_lots(1500, vec![
            lot(0, 1000, 400, 10),
            lot(5, 1200, 500, 5),
        ]);
        assert_eq!(current_price(&product), 1200);
        assert_eq!(current_cost(&product), 500);
    }

    #[test]
    fn test_price_prefers_oldest_available_lot() {
        let product = product_with_lots(1500, vec![
            lot(5, 1200, 500, 5),
            lot(5, 1000, 400, 10),
        ]);
        // Storage order is newest-first here; FIFO must still pick the oldest.
        assert_eq!(current_price(&product), 1000);
        assert_eq!(current_cost(&product), 400);
    }

    #[test]
    fn test_all_depleted_uses_most_recent_lot() {
        let product = product_with_lots(1500, vec![
            lot(0, 1000, 400, 10),
            lot(0, 1200, 500, 5),
        ]);
        assert_eq!(current_price(&product), 1200);
        assert_eq!(current_cost(&product), 500);
        assert!(!is_in_stock(&product));
    }

    #[test]
    fn test_no_lots_falls_back_to_catalog_price() {
        let product = product_with_lots(1500, Vec::new());
        assert_eq!(current_price(&product), 1500);
        assert_eq!(current_cost(&product), 0);
        assert!(!is_in_stock(&product));
    }

    #[test]
    fn test_zero_lot_price_falls_back_to_catalog_price() {
        let product = product_with_lots(1500, vec![lot(5, 0, 0, 1)]);
        assert_eq!(current_price(&product), 1500);
        // Cost has no catalog fallback: zero stays zero.
        assert_eq!(current_cost(&product), 0);
    }

    #[test]
    fn test_created_at_tie_broken_by_id() {
        let at = Utc::now();
        let mut a = lot(5, 1000, 400, 0);
        let mut b = lot(5, 1200, 500, 0);
        a.created_at = at;
        b.created_at = at;

        let product = product_with_lots(1500, vec![a.clone(), b.clone()]);
        let reversed = product_with_lots(1500, vec![b, a]);
        assert_eq!(current_price(&product), current_price(&reversed));
    }

    #[test]
    fn test_input_lots_not_reordered() {
        let lots = vec![lot(5, 1200, 500, 5), lot(5, 1000, 400, 10)];
        let ids: Vec<Uuid> = lots.iter().map(|l| l.id).collect();
        let product = product_with_lots(1500, lots);

        let first = current_price(&product);
        let second = current_price(&product);
        assert_eq!(first, second);

        let ids_after: Vec<Uuid> = product.lots.iter().map(|l| l.id).collect();
        assert_eq!(ids, ids_after);
    }

    #[test]
    fn test_status_consistent_over_random_lot_sets() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..200 {
            let count = rng.random_range(0..8);
            let lots: Vec<StockLot> = (0..count)
                .map(|_| {
                    lot(
                        rng.random_range(0..20),
                        rng.random_range(0..5000),
                        rng.random_range(0..2500),
                        rng.random_range(0..30),
                    )
                })
                .collect();
            let product = product_with_lots(999, lots);

            let status = stock_status(&product);
            assert_eq!(status.quantity, total_stock_quantity(&product.lots));
            assert_eq!(status.in_stock, status.quantity > 0);
            assert_eq!(status.current_price_cents, current_price(&product));
            assert_eq!(status.current_cost_cents, current_cost(&product));
        }
    }
}
