//! Admin reporting over storefront records.
//!
//! Every report is a pure reduction over in-memory snapshots supplied by the
//! data-access layer; nothing here queries or caches.

pub mod app_config;
pub mod models;
pub mod reports;

pub use app_config::{Config, ReportingConfig};
pub use models::{Shopper, Visit};
pub use reports::{
    cart_status_counts, daily_visits, kpis, low_stock_products, profit_series, revenue_series,
    top_products, AnalyticsError, DailyVisits, Kpis, LowStockAlert, ProductSales, ProfitPoint,
    ReportRange, RevenuePoint, StatusCount,
};
