//! Wire types for `GET /coins/{id}/market_chart` (REST).

use serde::{Deserialize, Serialize};

/// One `[timestamp_ms, value]` pair as the API sends it. Timestamps arrive
/// as plain JSON numbers and can exceed integer notation, so both slots
/// deserialize as floats.
pub type ChartTick = (f64, f64);

/// Raw chart response: parallel series over the requested timeframe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketChartResponse {
    pub prices: Vec<ChartTick>,
    #[serde(default)]
    pub market_caps: Vec<ChartTick>,
    #[serde(default)]
    pub total_volumes: Vec<ChartTick>,
}
