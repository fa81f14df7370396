//! Market domain — ranked market-list snapshots, one record per coin.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Coin ────────────────────────────────────────────────────────────────────

/// A validated market snapshot for one coin.
///
/// Immutable per fetch: the store replaces the whole list on every completed
/// refresh, views never mutate individual records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    /// Logo URL.
    pub image: String,
    /// Price in the currency the list was requested with.
    pub current_price: Decimal,
    /// 24h price change percentage; `None` for thinly traded coins.
    pub change_24h_pct: Option<Decimal>,
    pub market_cap: Decimal,
    pub market_cap_rank: Option<u32>,
    pub total_volume: Option<Decimal>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Coin {
    /// Whether the 24h change should render as a gain.
    pub fn is_up_24h(&self) -> bool {
        self.change_24h_pct
            .map(|change| !change.is_sign_negative())
            .unwrap_or(false)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingId,
    MissingName,
    MissingImage,
    MissingPrice,
    MissingMarketCap,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::MissingImage => write!(f, "Missing image"),
            ValidationError::MissingPrice => write!(f, "Missing current price"),
            ValidationError::MissingMarketCap => write!(f, "Missing market cap"),
        }
    }
}

impl std::error::Error for ValidationError {}
