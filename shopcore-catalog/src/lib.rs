pub mod product;
pub mod pricing;

pub use product::{Product, StockLot};
pub use pricing::{
    current_cost, current_price, is_in_stock, stock_status, total_stock_quantity, StockStatus,
};
