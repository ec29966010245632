pub mod models;
pub mod checkout;

pub use models::{Cart, CartItem, CartStatus, Payment, Refund};
pub use checkout::{cart_cost, price_cart, CheckoutError, CheckoutSummary};
