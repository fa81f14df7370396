//! Charts sub-client — historical price series.

use crate::client::CoinboardClient;
use crate::domain::chart::PricePoint;
use crate::error::SdkError;
use crate::shared::{ChartRange, CoinId, Currency};

/// Sub-client for historical chart operations.
pub struct Charts<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> Charts<'a> {
    /// Fetch the price series for one coin over the given timeframe, in the
    /// given display currency.
    pub async fn get(
        &self,
        id: &CoinId,
        currency: Currency,
        range: ChartRange,
    ) -> Result<Vec<PricePoint>, SdkError> {
        let resp = self
            .client
            .http
            .get_market_chart(id, currency, range)
            .await?;
        Ok(resp.prices.into_iter().map(PricePoint::from).collect())
    }
}
