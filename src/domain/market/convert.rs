//! Conversion: CoinMarketResponse → Coin (TryFrom + validation).

use super::wire;
use super::{Coin, ValidationError};

impl TryFrom<wire::CoinMarketResponse> for Coin {
    type Error = ValidationError;

    fn try_from(source: wire::CoinMarketResponse) -> Result<Self, Self::Error> {
        if source.id.as_str().is_empty() {
            return Err(ValidationError::MissingId);
        }
        if source.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let image = source
            .image
            .filter(|url| !url.is_empty())
            .ok_or(ValidationError::MissingImage)?;
        let current_price = source.current_price.ok_or(ValidationError::MissingPrice)?;
        let market_cap = source.market_cap.ok_or(ValidationError::MissingMarketCap)?;

        Ok(Coin {
            id: source.id,
            symbol: source.symbol,
            name: source.name,
            image,
            current_price,
            change_24h_pct: source.price_change_percentage_24h,
            market_cap,
            market_cap_rank: source.market_cap_rank,
            total_volume: source.total_volume,
            last_updated: source.last_updated,
        })
    }
}
