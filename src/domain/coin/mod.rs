//! Coin-detail domain — extended per-coin data behind the detail view.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{CoinId, Currency};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ─── ImageSet ────────────────────────────────────────────────────────────────

/// Logo URLs at the sizes the API publishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
}

// ─── CoinDetail ──────────────────────────────────────────────────────────────

/// Extended detail for a single coin.
///
/// Monetary fields come localized per currency, keyed by lowercase currency
/// code; `price_in` / `market_cap_in` perform the lookup the detail view
/// needs for the selected display currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: ImageSet,
    /// English description; may be empty.
    pub description: String,
    pub market_cap_rank: Option<u32>,
    pub current_price: HashMap<String, Decimal>,
    pub market_cap: HashMap<String, Decimal>,
    pub change_24h_pct: Option<Decimal>,
    /// 7-day price sparkline in the API's native currency.
    pub sparkline_7d: Vec<f64>,
    pub genesis_date: Option<NaiveDate>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl CoinDetail {
    /// Current price in the given display currency, if quoted.
    pub fn price_in(&self, currency: Currency) -> Option<Decimal> {
        self.current_price.get(currency.api_code()).copied()
    }

    /// Market cap in the given display currency, if quoted.
    pub fn market_cap_in(&self, currency: Currency) -> Option<Decimal> {
        self.market_cap.get(currency.api_code()).copied()
    }

    /// First sentence of the description, for list-style blurbs.
    pub fn summary(&self) -> &str {
        match self.description.find(". ") {
            Some(pos) => &self.description[..=pos],
            None => &self.description,
        }
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    MissingMarketData,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::MissingMarketData => write!(f, "Missing market data"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_cuts_at_first_sentence() {
        let detail = CoinDetail {
            id: CoinId::from("bitcoin"),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            image: ImageSet::default(),
            description: "Bitcoin is the first cryptocurrency. It launched in 2009.".to_string(),
            market_cap_rank: Some(1),
            current_price: HashMap::new(),
            market_cap: HashMap::new(),
            change_24h_pct: None,
            sparkline_7d: Vec::new(),
            genesis_date: None,
            last_updated: None,
        };
        assert_eq!(detail.summary(), "Bitcoin is the first cryptocurrency.");
    }

    #[test]
    fn test_price_lookup_by_currency() {
        let mut current_price = HashMap::new();
        current_price.insert("usd".to_string(), Decimal::from(69702));
        current_price.insert("eur".to_string(), Decimal::from(64535));
        let detail = CoinDetail {
            id: CoinId::from("bitcoin"),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            image: ImageSet::default(),
            description: String::new(),
            market_cap_rank: None,
            current_price,
            market_cap: HashMap::new(),
            change_24h_pct: None,
            sparkline_7d: Vec::new(),
            genesis_date: None,
            last_updated: None,
        };
        assert_eq!(detail.price_in(Currency::Eur), Some(Decimal::from(64535)));
        assert_eq!(detail.price_in(Currency::Rub), None);
    }
}
