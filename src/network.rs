//! Network constants for the coinboard SDK.

/// Default REST API base URL (CoinGecko public v3 API).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Coins per page of the ranked market list.
pub const PER_PAGE: u32 = 10;

/// Depth of the ranked market list, in pages.
pub const TOTAL_PAGES: u32 = 10;
