use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub reporting: ReportingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportingConfig {
    /// Window applied when a report request carries no explicit range.
    #[serde(default = "default_window_days")]
    pub default_window_days: i64,

    /// Row cap for the top-products report.
    #[serde(default = "default_top_products_limit")]
    pub top_products_limit: usize,

    /// Products at or below this quantity show up in the low-stock listing.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_window_days() -> i64 { 30 }
fn default_top_products_limit() -> usize { 10 }
fn default_low_stock_threshold() -> u32 { 5 }

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            default_window_days: default_window_days(),
            top_products_limit: default_top_products_limit(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SHOPCORE__REPORTING__LOW_STOCK_THRESHOLD=3`
            .add_source(config::Environment::with_prefix("SHOPCORE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
