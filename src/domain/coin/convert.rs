//! Conversion: CoinDetailResponse → CoinDetail (TryFrom + validation).

use super::wire;
use super::{CoinDetail, ImageSet, ValidationError};

impl TryFrom<wire::CoinDetailResponse> for CoinDetail {
    type Error = ValidationError;

    fn try_from(source: wire::CoinDetailResponse) -> Result<Self, Self::Error> {
        if source.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        // Detail is always requested with market_data=true; a response
        // without it cannot back the detail view.
        let market_data = source.market_data.ok_or(ValidationError::MissingMarketData)?;

        let image = source
            .image
            .map(|image| ImageSet {
                thumb: image.thumb,
                small: image.small,
                large: image.large,
            })
            .unwrap_or_default();

        Ok(CoinDetail {
            id: source.id,
            symbol: source.symbol,
            name: source.name,
            image,
            description: source
                .description
                .and_then(|description| description.en)
                .unwrap_or_default(),
            market_cap_rank: source.market_cap_rank,
            current_price: market_data.current_price,
            market_cap: market_data.market_cap,
            change_24h_pct: market_data.price_change_percentage_24h,
            sparkline_7d: market_data
                .sparkline_7d
                .map(|sparkline| sparkline.price)
                .unwrap_or_default(),
            genesis_date: source.genesis_date,
            last_updated: source.last_updated,
        })
    }
}
