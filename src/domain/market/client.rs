//! Markets sub-client — the ranked, paginated coin list.

use crate::client::CoinboardClient;
use crate::domain::market::Coin;
use crate::error::SdkError;
use crate::shared::{Currency, Page};
use crate::store::ListRequest;
use tracing::warn;

/// Sub-client for market-list operations.
pub struct Markets<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> Markets<'a> {
    /// Fetch one page of the ranked coin list, ordered by market cap
    /// descending.
    ///
    /// Records that fail validation are skipped with a warning rather than
    /// failing the whole page.
    pub async fn list(&self, currency: Currency, page: Page) -> Result<Vec<Coin>, SdkError> {
        let records = self
            .client
            .http
            .get_markets(currency, page, self.client.per_page)
            .await?;

        let mut coins = Vec::with_capacity(records.len());
        for record in records {
            let id = record.id.clone();
            match Coin::try_from(record) {
                Ok(coin) => coins.push(coin),
                Err(e) => warn!(coin = %id, error = %e, "skipping invalid market record"),
            }
        }
        Ok(coins)
    }

    /// Resolve a list request issued by the market store.
    pub async fn fetch(&self, request: &ListRequest) -> Result<Vec<Coin>, SdkError> {
        self.list(request.currency, request.page).await
    }
}
