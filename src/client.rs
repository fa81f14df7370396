//! High-level client — `CoinboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and the accessor methods. The client itself is
//! stateless: all mutable dashboard state lives in the app-owned
//! [`MarketStore`](crate::store::MarketStore).

use crate::domain::chart::client::Charts;
use crate::domain::coin::client::Coins;
use crate::domain::market::client::Markets;
use crate::error::SdkError;
use crate::http::CoinGeckoHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::chart::client::Charts as ChartsClient;
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::market::client::Markets as MarketsClient;

/// The primary entry point for remote market data.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.coins()`, `client.charts()`.
#[derive(Clone)]
pub struct CoinboardClient {
    pub(crate) http: CoinGeckoHttp,
    pub(crate) per_page: u32,
}

impl CoinboardClient {
    pub fn builder() -> CoinboardClientBuilder {
        CoinboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn charts(&self) -> Charts<'_> {
        Charts { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinboardClientBuilder {
    base_url: String,
    per_page: u32,
}

impl Default for CoinboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            per_page: crate::network::PER_PAGE,
        }
    }
}

impl CoinboardClientBuilder {
    /// Point at a different API host (self-hosted mirror, test server).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Coins per page of the ranked list.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn build(self) -> Result<CoinboardClient, SdkError> {
        Ok(CoinboardClient {
            http: CoinGeckoHttp::new(&self.base_url),
            per_page: self.per_page,
        })
    }
}
