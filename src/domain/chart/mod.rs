//! Chart domain — historical price series for the detail view.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub use state::ChartState;

/// A single point on a historical price chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in milliseconds.
    pub time: i64,
    /// Price in the currency the series was requested with.
    pub price: f64,
}

impl PricePoint {
    /// Timestamp as a `DateTime`, when in representable range.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.time).single()
    }
}

impl From<wire::ChartTick> for PricePoint {
    fn from((time, price): wire::ChartTick) -> Self {
        Self {
            time: time as i64,
            price,
        }
    }
}
