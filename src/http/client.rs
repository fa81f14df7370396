//! Low-level HTTP client — `CoinGeckoHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the high-level-client boundary). Internal to the SDK —
//! `CoinboardClient` wraps this.

use crate::domain::chart::wire::MarketChartResponse;
use crate::domain::coin::wire::CoinDetailResponse;
use crate::domain::market::wire::CoinMarketResponse;
use crate::error::HttpError;
use crate::shared::{ChartRange, CoinId, Currency, Page};

use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Low-level HTTP client for the CoinGecko REST API.
#[derive(Clone)]
pub struct CoinGeckoHttp {
    base_url: String,
    client: Client,
}

impl CoinGeckoHttp {
    pub fn new(base_url: &str) -> Self {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    // ── Market list ──────────────────────────────────────────────────────

    pub async fn get_markets(
        &self,
        currency: Currency,
        page: Page,
        per_page: u32,
    ) -> Result<Vec<CoinMarketResponse>, HttpError> {
        let url = format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page={}&sparkline=false",
            self.base_url,
            currency.api_code(),
            per_page,
            page
        );
        self.get(&url).await
    }

    // ── Coin detail ──────────────────────────────────────────────────────

    pub async fn get_coin(&self, id: &CoinId) -> Result<CoinDetailResponse, HttpError> {
        let url = format!(
            "{}/coins/{}?localization=false&tickers=false&market_data=true&sparkline=true",
            self.base_url,
            urlencoding::encode(id.as_str())
        );
        self.get(&url).await
    }

    // ── Historical chart ─────────────────────────────────────────────────

    pub async fn get_market_chart(
        &self,
        id: &CoinId,
        currency: Currency,
        range: ChartRange,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            currency.api_code(),
            range.as_str()
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::from(e)
            }
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        // Public API rate limits announce a Retry-After in seconds.
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok())
            .map(|secs| secs * 1_000);

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
