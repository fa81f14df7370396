//! Wire types for `GET /coins/markets` (REST).

use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw market record as the API sends it. Every key is present in the
/// response; fields the API nulls out for dead or thinly traded coins are
/// `Option`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinMarketResponse {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub current_price: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub fully_diluted_valuation: Option<Decimal>,
    pub total_volume: Option<Decimal>,
    #[serde(default)]
    pub high_24h: Option<Decimal>,
    #[serde(default)]
    pub low_24h: Option<Decimal>,
    #[serde(default)]
    pub price_change_24h: Option<Decimal>,
    pub price_change_percentage_24h: Option<Decimal>,
    #[serde(default)]
    pub market_cap_change_24h: Option<Decimal>,
    #[serde(default)]
    pub market_cap_change_percentage_24h: Option<Decimal>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub ath: Option<Decimal>,
    #[serde(default)]
    pub atl: Option<Decimal>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const BITCOIN_RECORD: &str = r#"{
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
        "current_price": 69702.3,
        "market_cap": 1370247487960,
        "market_cap_rank": 1,
        "fully_diluted_valuation": 1463543546359,
        "total_volume": 31178429679,
        "high_24h": 70846,
        "low_24h": 68895,
        "price_change_24h": -311.55,
        "price_change_percentage_24h": -0.44498,
        "market_cap_change_24h": -7974732593.3,
        "market_cap_change_percentage_24h": -0.57866,
        "circulating_supply": 19675987.0,
        "total_supply": 21000000.0,
        "max_supply": 21000000.0,
        "ath": 73738,
        "atl": 67.81,
        "last_updated": "2024-04-07T16:49:31.736Z"
    }"#;

    #[test]
    fn test_deserialize_market_record() {
        let record: CoinMarketResponse = serde_json::from_str(BITCOIN_RECORD).unwrap();
        assert_eq!(record.id.as_str(), "bitcoin");
        assert_eq!(
            record.current_price,
            Some(Decimal::from_str("69702.3").unwrap())
        );
        assert_eq!(record.market_cap_rank, Some(1));
        assert!(record
            .price_change_percentage_24h
            .unwrap()
            .is_sign_negative());
        assert!(record.last_updated.is_some());
    }

    #[test]
    fn test_deserialize_nulled_fields() {
        let raw = r#"{
            "id": "ghost-coin",
            "symbol": "gst",
            "name": "Ghost Coin",
            "image": null,
            "current_price": null,
            "market_cap": null,
            "market_cap_rank": null,
            "total_volume": null,
            "price_change_percentage_24h": null
        }"#;
        let record: CoinMarketResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(record.current_price, None);
        assert_eq!(record.market_cap_rank, None);
        assert_eq!(record.last_updated, None);
    }
}
