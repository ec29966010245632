use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// One recorded storefront visit. The client reports at most one per browser
/// per day, but the aggregation dedupes again by fingerprint and calendar day
/// since nothing enforces that server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    pub id: Uuid,
    pub fingerprint: String,
    pub visited_at: DateTime<Utc>,
}

/// Minimal account record, enough for the user KPIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shopper {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}
