use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcore_catalog::{total_stock_quantity, Product};
use shopcore_order::{cart_cost, Cart, CartStatus, Payment, Refund};

use crate::models::{Shopper, Visit};

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Invalid report range: {from} is after {to}")]
    InvalidRange {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

/// Inclusive time window a report runs over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl ReportRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, AnalyticsError> {
        if from > to {
            return Err(AnalyticsError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Window ending now, e.g. the dashboard's default last-30-days view.
    pub fn last_days(days: i64) -> Self {
        let to = Utc::now();
        Self {
            from: to - Duration::days(days),
            to,
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.from && at <= self.to
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: DateTime<Utc>,
    pub revenue_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: CartStatus,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitPoint {
    pub date: DateTime<Utc>,
    pub revenue_cents: i64,
    pub cost_cents: i64,
    pub profit_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_id: Uuid,
    pub name: String,
    pub units_sold: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyVisits {
    pub day: NaiveDate,
    pub visits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_revenue_cents: i64,
    pub total_orders: u64,
    pub total_refunds_cents: i64,
    pub new_users: u64,
    pub total_users: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub product_id: Uuid,
    pub name: String,
    pub quantity: u32,
}

fn is_paid(carts: &[Cart], cart_id: Uuid) -> bool {
    carts
        .iter()
        .any(|c| c.id == cart_id && c.status == CartStatus::Paid)
}

/// Payments captured on paid carts within the range, oldest first.
pub fn revenue_series(payments: &[Payment], carts: &[Cart], range: ReportRange) -> Vec<RevenuePoint> {
    let mut points: Vec<RevenuePoint> = payments
        .iter()
        .filter(|p| range.contains(p.created_at) && is_paid(carts, p.cart_id))
        .map(|p| RevenuePoint {
            date: p.created_at,
            revenue_cents: p.amount_cents,
        })
        .collect();
    points.sort_by_key(|p| p.date);

    tracing::debug!(points = points.len(), "computed revenue series");
    points
}

/// How many carts landed in each status during the range.
pub fn cart_status_counts(carts: &[Cart], range: ReportRange) -> Vec<StatusCount> {
    [CartStatus::Pending, CartStatus::Paid, CartStatus::Cancelled]
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: carts
                .iter()
                .filter(|c| c.status == status && range.contains(c.created_at))
                .count() as u64,
        })
        .collect()
}

/// Per-order profit for paid carts in the range: gateway revenue minus the
/// cart's acquisition cost at current FIFO cost.
pub fn profit_series(
    carts: &[Cart],
    payments: &[Payment],
    products: &[Product],
    range: ReportRange,
) -> Vec<ProfitPoint> {
    let mut points: Vec<ProfitPoint> = carts
        .iter()
        .filter(|c| c.status == CartStatus::Paid && range.contains(c.created_at))
        .map(|cart| {
            let revenue_cents = payments
                .iter()
                .find(|p| p.cart_id == cart.id)
                .map(|p| p.amount_cents)
                .unwrap_or(0);
            let cost_cents = cart_cost(&cart.items, products);

            ProfitPoint {
                date: cart.created_at,
                revenue_cents,
                cost_cents,
                profit_cents: revenue_cents - cost_cents,
            }
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Best sellers by units across paid carts in the range.
pub fn top_products(
    carts: &[Cart],
    products: &[Product],
    range: ReportRange,
    limit: usize,
) -> Vec<ProductSales> {
    let mut units: BTreeMap<Uuid, u64> = BTreeMap::new();
    for cart in carts {
        if cart.status != CartStatus::Paid || !range.contains(cart.created_at) {
            continue;
        }
        for item in &cart.items {
            *units.entry(item.product_id).or_insert(0) += u64::from(item.quantity);
        }
    }

    let mut ranked: Vec<ProductSales> = units
        .into_iter()
        .map(|(product_id, units_sold)| ProductSales {
            product_id,
            name: products
                .iter()
                .find(|p| p.id == product_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            units_sold,
        })
        .collect();
    // BTreeMap iteration already fixed the id order, so the sort is stable
    // across runs for equal unit counts.
    ranked.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
    ranked.truncate(limit);
    ranked
}

/// Unique visitors per calendar day. The same fingerprint counts once per day
/// no matter how many rows it produced.
pub fn daily_visits(visits: &[Visit], range: ReportRange) -> Vec<DailyVisits> {
    let mut seen: HashSet<(NaiveDate, &str)> = HashSet::new();
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for visit in visits {
        if !range.contains(visit.visited_at) {
            continue;
        }
        let day = visit.visited_at.date_naive();
        if seen.insert((day, visit.fingerprint.as_str())) {
            *per_day.entry(day).or_insert(0) += 1;
        }
    }

    per_day
        .into_iter()
        .map(|(day, visits)| DailyVisits { day, visits })
        .collect()
}

/// Headline dashboard figures for the range. User totals span all time;
/// `new_users` is scoped to the range.
pub fn kpis(
    payments: &[Payment],
    carts: &[Cart],
    refunds: &[Refund],
    shoppers: &[Shopper],
    range: ReportRange,
) -> Kpis {
    let total_revenue_cents = payments
        .iter()
        .filter(|p| range.contains(p.created_at) && is_paid(carts, p.cart_id))
        .map(|p| p.amount_cents)
        .sum();

    let total_orders = carts
        .iter()
        .filter(|c| c.status == CartStatus::Paid && range.contains(c.created_at))
        .count() as u64;

    let total_refunds_cents = refunds
        .iter()
        .filter(|r| range.contains(r.created_at))
        .map(|r| r.amount_cents)
        .sum();

    let new_users = shoppers
        .iter()
        .filter(|s| range.contains(s.created_at))
        .count() as u64;

    Kpis {
        total_revenue_cents,
        total_orders,
        total_refunds_cents,
        new_users,
        total_users: shoppers.len() as u64,
    }
}

/// Active products running out of stock, emptiest first.
pub fn low_stock_products(products: &[Product], threshold: u32) -> Vec<LowStockAlert> {
    let mut alerts: Vec<LowStockAlert> = products
        .iter()
        .filter(|p| p.is_active)
        .filter_map(|p| {
            let quantity = total_stock_quantity(&p.lots);
            (quantity <= threshold).then(|| LowStockAlert {
                product_id: p.id,
                name: p.name.clone(),
                quantity,
            })
        })
        .collect();
    alerts.sort_by(|a, b| a.quantity.cmp(&b.quantity).then_with(|| a.name.cmp(&b.name)));
    alerts
}
