//! Wire types for `GET /coins/{id}` (REST).

use crate::shared::CoinId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw detail response. The API sends far more than this; unknown keys are
/// ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinDetailResponse {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<DescriptionResponse>,
    #[serde(default)]
    pub image: Option<ImageResponse>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub market_data: Option<MarketDataResponse>,
    #[serde(default)]
    pub genesis_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Localized description block; only English is requested
/// (`localization=false`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DescriptionResponse {
    #[serde(default)]
    pub en: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageResponse {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Localized market data, keyed by lowercase currency code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketDataResponse {
    #[serde(default)]
    pub current_price: HashMap<String, Decimal>,
    #[serde(default)]
    pub market_cap: HashMap<String, Decimal>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<Decimal>,
    #[serde(default)]
    pub sparkline_7d: Option<SparklineResponse>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparklineResponse {
    #[serde(default)]
    pub price: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_detail_response() {
        let raw = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "description": {"en": "Bitcoin is the first cryptocurrency."},
            "image": {
                "thumb": "https://assets.coingecko.com/coins/images/1/thumb/bitcoin.png",
                "small": "https://assets.coingecko.com/coins/images/1/small/bitcoin.png",
                "large": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png"
            },
            "market_cap_rank": 1,
            "market_data": {
                "current_price": {"usd": 69702.3, "eur": 64535.1, "rub": 6447892.0},
                "market_cap": {"usd": 1370247487960},
                "price_change_percentage_24h": -0.44498,
                "sparkline_7d": {"price": [68123.1, 68950.4, 69702.3]}
            },
            "genesis_date": "2009-01-03",
            "last_updated": "2024-04-07T16:49:31.736Z"
        }"#;

        let detail: CoinDetailResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.id.as_str(), "bitcoin");
        let market_data = detail.market_data.unwrap();
        assert_eq!(market_data.current_price.len(), 3);
        assert_eq!(market_data.sparkline_7d.unwrap().price.len(), 3);
        assert!(detail.genesis_date.is_some());
    }

    #[test]
    fn test_deserialize_sparse_detail_response() {
        let raw = r#"{"id": "ghost-coin", "symbol": "gst", "name": "Ghost Coin"}"#;
        let detail: CoinDetailResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.market_data, None);
        assert_eq!(detail.description, None);
    }
}
