//! Coins sub-client — per-coin detail.

use crate::client::CoinboardClient;
use crate::domain::coin::{self, CoinDetail};
use crate::error::SdkError;
use crate::shared::CoinId;

/// Sub-client for coin-detail operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> Coins<'a> {
    /// Fetch extended detail for one coin.
    pub async fn get(&self, id: &CoinId) -> Result<CoinDetail, SdkError> {
        let resp = self.client.http.get_coin(id).await?;
        resp.try_into()
            .map_err(|e: coin::ValidationError| SdkError::Validation(e.to_string()))
    }
}
